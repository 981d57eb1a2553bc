use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::config::AuthorCheck;
use crate::errors::{LanguageResult, ProfileLanguageError};
use crate::expression::{Agent, Expression, ExpressionProof, Profile};

pub const PROOF_KEY: &str = "proof";
pub const TIMESTAMP_KEY: &str = "timestamp";

/// A profile record as the zome returns it, split into envelope and data.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct StoredProfile {
    pub proof: ExpressionProof,
    pub timestamp: DateTime<Utc>,
    pub data: Profile,
}

impl StoredProfile {
    pub fn from_record(record: Value) -> LanguageResult<StoredProfile> {
        let fields = match record {
            Value::Object(fields) => fields,
            other => {
                return Err(ProfileLanguageError::MalformedRecord(format!(
                    "expected an object, got {}",
                    other
                )))
            }
        };

        let mut proof = None;
        let mut timestamp = None;
        let mut data = Profile::new();
        for (key, value) in fields {
            match key.as_str() {
                PROOF_KEY => proof = Some(value),
                TIMESTAMP_KEY => timestamp = Some(value),
                _ => {
                    data.insert(key, value);
                }
            }
        }

        let proof = proof.ok_or_else(|| {
            ProfileLanguageError::MalformedRecord(String::from("record has no proof"))
        })?;
        let proof: ExpressionProof = serde_json::from_value(proof).map_err(|error| {
            ProfileLanguageError::MalformedRecord(format!("invalid proof: {}", error))
        })?;
        let timestamp = timestamp.ok_or_else(|| {
            ProfileLanguageError::MalformedRecord(String::from("record has no timestamp"))
        })?;
        let timestamp: DateTime<Utc> = serde_json::from_value(timestamp).map_err(|error| {
            ProfileLanguageError::MalformedRecord(format!("invalid timestamp: {}", error))
        })?;

        Ok(StoredProfile {
            proof,
            timestamp,
            data,
        })
    }

    pub fn check_author(&self, address: &str, check: AuthorCheck) -> LanguageResult<()> {
        match check {
            AuthorCheck::TrustAddress => Ok(()),
            AuthorCheck::ProofKey => match self.proof.signer_did() {
                Some(did) if did == address => Ok(()),
                Some(_) => Err(ProfileLanguageError::AuthorMismatch {
                    address: address.to_owned(),
                    key: self.proof.key.clone(),
                }),
                None => Err(ProfileLanguageError::RelativeProofKey {
                    address: address.to_owned(),
                    key: self.proof.key.clone(),
                }),
            },
        }
    }

    pub fn into_expression(self, author: Agent) -> Expression {
        Expression {
            author,
            timestamp: self.timestamp,
            data: self.data,
            proof: self.proof,
        }
    }
}
