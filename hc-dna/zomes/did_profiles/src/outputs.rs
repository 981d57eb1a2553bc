use did_profiles_integrity::ProfileData;
use hdk::prelude::*;

/// Stored profile flattened for callers: data fields plus `proof` and `timestamp`.
#[derive(Serialize, Deserialize, SerializedBytes, Debug, Clone, PartialEq)]
#[serde(transparent)]
pub struct ProfileRecord(pub ProfileData);
