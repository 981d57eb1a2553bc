use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Profile fields in caller order. Values are arbitrary JSON.
pub type Profile = serde_json::Map<String, serde_json::Value>;

/// A profile address is the DID of its author.
pub type Address = String;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Agent {
    pub did: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub perspective: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direct_message_language: Option<String>,
}

impl Agent {
    pub fn new(did: impl Into<String>) -> Self {
        Agent {
            did: did.into(),
            perspective: None,
            direct_message_language: None,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ExpressionProof {
    pub signature: String,
    pub key: String,
}

impl ExpressionProof {
    /// The DID a proof key belongs to: the key id without its `#fragment`.
    /// `None` for relative key ids such as `#primary`, which name no DID.
    pub fn signer_did(&self) -> Option<&str> {
        match self.key.split('#').next() {
            Some(did) if !did.is_empty() => Some(did),
            _ => None,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Expression {
    pub author: Agent,
    pub timestamp: DateTime<Utc>,
    pub data: Profile,
    pub proof: ExpressionProof,
}
