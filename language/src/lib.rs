//! Language for sharing agent profiles through the `did-profiles` Holochain DNA.
//!
//! A profile is an arbitrary JSON object. Writing one canonicalizes its key order,
//! has the host agent sign it and stores the signed expression under the agent's DID.
//! Reading turns the flat record the zome returns back into an expression envelope.

mod adapter;
mod author_adapter;
mod canonical;
pub mod config;
mod context;
mod errors;
mod expression;
#[cfg(any(test, feature = "test"))]
pub mod mock;
mod record;

pub use adapter::{ProfileAdapter, ProfilePutAdapter};
pub use author_adapter::ProfileAuthorAdapter;
pub use canonical::canonicalize;
pub use config::{AuthorCheck, LanguageConfig, LANGUAGE_NAME};
pub use context::{AgentService, HolochainLanguageDelegate, LanguageContext};
pub use errors::{DelegateError, LanguageResult, ProfileLanguageError, SignerError};
pub use expression::{Address, Agent, Expression, ExpressionProof, Profile};

/// The adapters a host gets when it loads this language.
pub struct ProfileLanguage {
    expression_adapter: ProfileAdapter,
    author_adapter: ProfileAuthorAdapter,
}

impl ProfileLanguage {
    pub fn new(context: LanguageContext, config: LanguageConfig) -> Self {
        ProfileLanguage {
            expression_adapter: ProfileAdapter::new(&context, config.clone()),
            author_adapter: ProfileAuthorAdapter::new(&context, config),
        }
    }

    pub fn name(&self) -> &'static str {
        LANGUAGE_NAME
    }

    pub fn expression_adapter(&self) -> &ProfileAdapter {
        &self.expression_adapter
    }

    pub fn author_adapter(&self) -> &ProfileAuthorAdapter {
        &self.author_adapter
    }
}
