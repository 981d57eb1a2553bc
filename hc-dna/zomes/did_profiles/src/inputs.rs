use chrono::{DateTime, Utc};
use did_profiles_integrity::{ExpressionProof, ProfileData};
use hdk::prelude::*;

#[derive(Serialize, Deserialize, SerializedBytes, Debug, Clone)]
pub struct DidInput(pub String);

#[derive(Serialize, Deserialize, Clone, SerializedBytes, Debug)]
pub struct Agent {
    pub did: String,
}

/// A signed profile expression as produced by the language's signer.
#[derive(Serialize, Deserialize, SerializedBytes, Debug, Clone)]
pub struct ProfileInput {
    pub author: Agent,
    pub data: ProfileData,
    pub proof: ExpressionProof,
    pub timestamp: DateTime<Utc>,
}
