#[cfg(test)]
fn profile_input(did: &str, name: &str, seconds: i64) -> crate::inputs::ProfileInput {
    use chrono::{DateTime, NaiveDateTime, Utc};
    use did_profiles_integrity::ExpressionProof;

    crate::inputs::ProfileInput {
        author: crate::inputs::Agent {
            did: String::from(did),
        },
        data: serde_json::json!({
            "@context": {"foaf": "http://xmlns.com/foaf/0.1/"},
            "foaf:AccountName": name,
        })
        .as_object()
        .cloned()
        .unwrap(),
        proof: ExpressionProof {
            signature: format!("{}-signature", name),
            key: format!("{}#primary", did),
        },
        timestamp: DateTime::<Utc>::from_utc(NaiveDateTime::from_timestamp(seconds, 0), Utc),
    }
}

#[test]
pub fn test_create_then_get_flattens_profile() {
    use crate::inputs::DidInput;
    use crate::profile::{create_profile, get_profile};
    use crate::retriever::MockRetriever;

    let did = "did:elem:EiAS3mqC4OLMKOwcz3ItIL7XfWduPT7q3Fa4vHgiCfSG2A";
    create_profile::<MockRetriever>(profile_input(did, "Alice", 10)).expect("create to succeed");

    let record = get_profile::<MockRetriever>(DidInput(String::from(did)))
        .expect("get to succeed")
        .expect("profile to exist");
    assert_eq!(record.0.get("foaf:AccountName"), Some(&serde_json::json!("Alice")));
    assert_eq!(
        record.0.get("@context"),
        Some(&serde_json::json!({"foaf": "http://xmlns.com/foaf/0.1/"}))
    );
    assert_eq!(
        record.0.get("proof"),
        Some(&serde_json::json!({"signature": "Alice-signature", "key": format!("{}#primary", did)}))
    );
    assert_eq!(record.0.get("timestamp"), Some(&serde_json::json!("1970-01-01T00:00:10Z")));
    assert_eq!(record.0.len(), 4);
}

#[test]
pub fn test_nested_objects_keep_signed_order() {
    use hdk::prelude::*;
    use std::convert::TryFrom;

    use crate::inputs::{DidInput, ProfileInput};
    use crate::profile::{create_profile, get_profile};
    use crate::retriever::MockRetriever;

    let did = "did:key:zQ3shNestedOrder";
    let mut input = profile_input(did, "Carol", 50);
    input.data.insert(
        String::from("z"),
        serde_json::json!({"y": 1, "x": 2, "w": {"b": true, "a": false}}),
    );

    // Decode the payload the way the conductor hands it to the extern.
    let bytes = SerializedBytes::try_from(input).expect("input to serialize");
    let input = ProfileInput::try_from(bytes).expect("input to deserialize");
    create_profile::<MockRetriever>(input).unwrap();

    let record = get_profile::<MockRetriever>(DidInput(String::from(did)))
        .unwrap()
        .unwrap();
    let bytes = SerializedBytes::try_from(record).expect("record to serialize");
    let record = crate::outputs::ProfileRecord::try_from(bytes).expect("record to deserialize");
    assert_eq!(
        serde_json::to_string(&record.0["z"]).unwrap(),
        r#"{"y":1,"x":2,"w":{"b":true,"a":false}}"#
    );
}

#[test]
pub fn test_get_unknown_did_is_none() {
    use crate::inputs::DidInput;
    use crate::profile::get_profile;
    use crate::retriever::MockRetriever;

    let res = get_profile::<MockRetriever>(DidInput(String::from("did:key:doesNotExist")));
    assert!(res.is_ok());
    assert!(res.unwrap().is_none());
}

#[test]
pub fn test_newest_profile_wins() {
    use crate::inputs::DidInput;
    use crate::profile::{create_profile, get_profile};
    use crate::retriever::MockRetriever;

    let did = "did:key:zQ3shNewestWins";
    create_profile::<MockRetriever>(profile_input(did, "Bob", 20)).unwrap();
    create_profile::<MockRetriever>(profile_input(did, "Robert", 30)).unwrap();

    let record = get_profile::<MockRetriever>(DidInput(String::from(did)))
        .unwrap()
        .unwrap();
    assert_eq!(record.0.get("foaf:AccountName"), Some(&serde_json::json!("Robert")));
}

#[test]
pub fn test_invalid_did_is_rejected() {
    use crate::errors::DidProfilesError;
    use crate::inputs::DidInput;
    use crate::profile::{create_profile, get_profile};
    use crate::retriever::{MockRetriever, GLOBAL_MOCKED_PROFILES};

    let res = create_profile::<MockRetriever>(profile_input("not-a-did", "Mallory", 40));
    assert!(matches!(res, Err(DidProfilesError::InvalidDid(_))));
    assert!(!GLOBAL_MOCKED_PROFILES
        .lock()
        .unwrap()
        .contains_key("not-a-did"));

    let res = get_profile::<MockRetriever>(DidInput(String::from("did:key")));
    assert!(matches!(res, Err(DidProfilesError::InvalidDid(_))));
}

#[test]
pub fn test_add_profile_requires_registered_did() {
    use crate::errors::DidProfilesError;
    use crate::inputs::DidInput;
    use crate::profile::{add_profile, create_profile, get_profile};
    use crate::retriever::MockRetriever;

    let did = "did:key:zQ3shAddProfile";
    let res = add_profile::<MockRetriever>(profile_input(did, "Dave", 60));
    assert!(matches!(res, Err(DidProfilesError::UnknownDid(ref value)) if value == did));

    create_profile::<MockRetriever>(profile_input(did, "Dave", 60)).unwrap();
    add_profile::<MockRetriever>(profile_input(did, "David", 70)).unwrap();

    let record = get_profile::<MockRetriever>(DidInput(String::from(did)))
        .unwrap()
        .unwrap();
    assert_eq!(record.0.get("foaf:AccountName"), Some(&serde_json::json!("David")));
}

#[test]
pub fn test_who_am_i_returns_agent_key() {
    use crate::profile::who_am_i;
    use crate::retriever::{MockRetriever, MOCKED_AGENT};

    assert_eq!(who_am_i::<MockRetriever>().unwrap(), *MOCKED_AGENT);
}
