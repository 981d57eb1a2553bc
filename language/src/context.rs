use async_trait::async_trait;
use std::sync::Arc;

use crate::errors::{DelegateError, SignerError};
use crate::expression::{Expression, Profile};

/// Host identity able to sign expressions on behalf of the current agent.
pub trait AgentService: Send + Sync {
    /// Wraps `data` in an expression authored and signed by the current agent.
    fn create_signed_expression(&self, data: Profile) -> Result<Expression, SignerError>;
}

/// Call bridge into the host's Holochain conductor.
#[async_trait]
pub trait HolochainLanguageDelegate: Send + Sync {
    async fn call(
        &self,
        dna_nick: &str,
        zome_name: &str,
        fn_name: &str,
        params: serde_json::Value,
    ) -> Result<serde_json::Value, DelegateError>;
}

/// Host capabilities handed to the language when it is loaded.
#[derive(Clone)]
pub struct LanguageContext {
    pub agent: Arc<dyn AgentService>,
    pub holochain: Arc<dyn HolochainLanguageDelegate>,
}
