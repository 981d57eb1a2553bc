use did_profiles_integrity::Did;
use hdk::prelude::*;

use crate::errors::{DidProfilesError, DidProfilesResult};

pub(crate) fn err(reason: &str) -> WasmError {
    wasm_error!(WasmErrorInner::Host(String::from(reason)))
}

/// Checks `did:<method>:<method-specific-id>` syntax. Nothing is resolved.
pub fn validate_did(did: &str) -> DidProfilesResult<Did> {
    let mut parts = did.splitn(3, ':');
    match (parts.next(), parts.next(), parts.next()) {
        (Some("did"), Some(method), Some(id)) if is_method(method) && is_method_specific_id(id) => {
            Ok(Did(did.to_owned()))
        }
        _ => Err(DidProfilesError::InvalidDid(did.to_owned())),
    }
}

fn is_method(method: &str) -> bool {
    !method.is_empty()
        && method
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
}

fn is_method_specific_id(id: &str) -> bool {
    !id.is_empty()
        && !id.ends_with(':')
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_' | ':' | '%'))
}

#[cfg(test)]
mod tests {
    use super::validate_did;
    use crate::errors::DidProfilesError;

    #[test]
    fn accepts_common_did_methods() {
        for did in &[
            "did:key:zQ3shokFTS3brHcDQrn82RUDfCZESWL1ZdCEJwekUDPQiYBme",
            "did:elem:EiAS3mqC4OLMKOwcz3ItIL7XfWduPT7q3Fa4vHgiCfSG2A",
            "did:web:example.com:user:alice",
        ] {
            assert!(validate_did(did).is_ok(), "expected {} to be valid", did);
        }
    }

    #[test]
    fn rejects_malformed_dids() {
        for did in &["", "did", "did:key", "did:key:", "did:Key:abc", "uri:key:abc", "did:key:abc#frag", "did::abc"] {
            match validate_did(did) {
                Err(DidProfilesError::InvalidDid(value)) => assert_eq!(&value, did),
                other => panic!("expected InvalidDid for {:?}, got {:?}", did, other),
            }
        }
    }
}
