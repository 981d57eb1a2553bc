use hdk::prelude::*;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DidProfilesError {
    #[error(transparent)]
    Serialization(#[from] SerializedBytesError),
    #[error(transparent)]
    Wasm(#[from] WasmError),
    #[error("Could not convert profile to record: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Given DID is not a valid DID: {0}")]
    InvalidDid(String),
    #[error("Given DID does not exist: {0}")]
    UnknownDid(String),
    #[error("Internal Error. Error: {0}")]
    InternalError(&'static str),
}

pub type DidProfilesResult<T> = Result<T, DidProfilesError>;
