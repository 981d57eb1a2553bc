use chrono::{DateTime, Utc};
use hdi::prelude::*;

pub mod impls;

/// Profile fields as signed by the author, in signing order. Values are arbitrary JSON.
pub type ProfileData = serde_json::Map<String, serde_json::Value>;

#[derive(Serialize, Deserialize, Clone, SerializedBytes, Debug, PartialEq, Eq, Hash)]
pub struct ExpressionProof {
    pub signature: String,
    pub key: String,
}

#[derive(
    Serialize,
    Deserialize,
    Clone,
    SerializedBytes,
    Debug,
    PartialEq,
    Eq,
    Hash,
    derive_more::Display,
)]
pub struct Did(pub String);

app_entry!(Did);

#[derive(Clone, Debug, Serialize, Deserialize, SerializedBytes, PartialEq)]
pub struct Profile {
    pub data: ProfileData,
    pub proof: ExpressionProof,
    pub timestamp: DateTime<Utc>,
}

app_entry!(Profile);

#[hdk_entry_defs]
#[unit_enum(UnitEntryTypes)]
pub enum EntryTypes {
    #[entry_def(visibility = "public")]
    Did(Did),
    #[entry_def(visibility = "public")]
    Profile(Profile),
}

#[hdk_link_types]
pub enum LinkTypes {
    Profile,
}
