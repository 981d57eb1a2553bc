use serde::{Deserialize, Serialize};

use crate::errors::LanguageResult;

pub const LANGUAGE_NAME: &str = "did-profiles";
pub const DNA_NICK: &str = "did-profiles";
pub const ZOME_NAME: &str = "did-profiles";
pub const CREATE_FUNCTION: &str = "create_profile";
pub const GET_FUNCTION: &str = "get_profile";

/// How the read path attributes a stored profile to an author.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AuthorCheck {
    /// The queried DID is the author. Records are stored under their author's DID,
    /// so a record returned under a different DID is attributed to the queried one.
    TrustAddress,
    /// The DID part of `proof.key` must equal the queried DID. Proofs with a relative
    /// key id (`#key-1`) cannot be attributed and fail with `RelativeProofKey`.
    ProofKey,
}

impl Default for AuthorCheck {
    fn default() -> Self {
        AuthorCheck::TrustAddress
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LanguageConfig {
    pub dna_nick: String,
    pub zome_name: String,
    pub create_function: String,
    pub get_function: String,
    pub author_check: AuthorCheck,
}

impl Default for LanguageConfig {
    fn default() -> Self {
        LanguageConfig {
            dna_nick: String::from(DNA_NICK),
            zome_name: String::from(ZOME_NAME),
            create_function: String::from(CREATE_FUNCTION),
            get_function: String::from(GET_FUNCTION),
            author_check: AuthorCheck::default(),
        }
    }
}

impl LanguageConfig {
    /// Reads the settings object a host passes to a language. Missing fields keep their defaults.
    pub fn from_settings(settings: &serde_json::Value) -> LanguageResult<Self> {
        if settings.is_null() {
            return Ok(LanguageConfig::default());
        }
        Ok(serde_json::from_value(settings.clone())?)
    }
}
