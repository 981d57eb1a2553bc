use derive_more::From;
use thiserror::Error;

/// Raised by an `AgentService` that cannot sign.
#[derive(Error, Debug, From, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct SignerError(pub String);

/// Raised by a `HolochainLanguageDelegate` for transport and zome errors alike.
#[derive(Error, Debug, From, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct DelegateError(pub String);

#[derive(Error, Debug)]
pub enum ProfileLanguageError {
    #[error("Could not sign profile expression: {0}")]
    SigningFailure(#[from] SignerError),
    #[error("Zome call {function} failed: {source}")]
    StoreFailure {
        function: String,
        #[source]
        source: DelegateError,
    },
    #[error("Stored profile record is malformed: {0}")]
    MalformedRecord(String),
    #[error("Profile stored under {address} is signed by key {key}")]
    AuthorMismatch { address: String, key: String },
    #[error("Profile stored under {address} is signed by relative key {key}, which names no DID")]
    RelativeProofKey { address: String, key: String },
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
}

pub type LanguageResult<T> = Result<T, ProfileLanguageError>;
