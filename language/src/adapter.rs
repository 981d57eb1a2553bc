use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

use crate::canonical::canonicalize;
use crate::config::LanguageConfig;
use crate::context::{AgentService, HolochainLanguageDelegate, LanguageContext};
use crate::errors::{LanguageResult, ProfileLanguageError};
use crate::expression::{Address, Agent, Expression, Profile};
use crate::record::StoredProfile;

/// Calls `function` on the profile zome, tagging failures with the function name.
pub(crate) async fn call_zome(
    dna: &dyn HolochainLanguageDelegate,
    config: &LanguageConfig,
    function: &str,
    params: Value,
) -> LanguageResult<Value> {
    debug!(
        dna = %config.dna_nick,
        zome = %config.zome_name,
        "Calling zome function {}",
        function
    );
    dna.call(&config.dna_nick, &config.zome_name, function, params)
        .await
        .map_err(|source| ProfileLanguageError::StoreFailure {
            function: function.to_owned(),
            source,
        })
}

/// Shares profiles: one profile per agent, stored under the agent's DID.
pub struct ProfilePutAdapter {
    agent: Arc<dyn AgentService>,
    dna: Arc<dyn HolochainLanguageDelegate>,
    config: LanguageConfig,
}

impl ProfilePutAdapter {
    pub fn new(context: &LanguageContext, config: LanguageConfig) -> Self {
        ProfilePutAdapter {
            agent: context.agent.clone(),
            dna: context.holochain.clone(),
            config,
        }
    }

    /// Signs `short_form` as the current agent and stores it. Returns the agent's DID,
    /// which is the address of the profile; a second call for the same agent replaces it.
    pub async fn create_public(&self, short_form: &Profile) -> LanguageResult<Address> {
        let ordered_short_form = canonicalize(short_form);
        let expression = self.agent.create_signed_expression(ordered_short_form)?;
        debug!(
            author = %expression.author.did,
            "ProfilePutAdapter.create_public(): posting expression"
        );

        let params = serde_json::to_value(&expression)?;
        call_zome(&*self.dna, &self.config, &self.config.create_function, params).await?;
        Ok(expression.author.did)
    }
}

pub struct ProfileAdapter {
    dna: Arc<dyn HolochainLanguageDelegate>,
    config: LanguageConfig,
    pub put_adapter: ProfilePutAdapter,
}

impl ProfileAdapter {
    pub fn new(context: &LanguageContext, config: LanguageConfig) -> Self {
        ProfileAdapter {
            dna: context.holochain.clone(),
            put_adapter: ProfilePutAdapter::new(context, config.clone()),
            config,
        }
    }

    /// Fetches the profile stored under `address`. The returned author carries only
    /// the queried DID; see `AuthorCheck` for how far that DID is trusted.
    pub async fn get(&self, address: &str) -> LanguageResult<Option<Expression>> {
        debug!("ProfileAdapter.get(): getting expression with address {}", address);
        let record = call_zome(
            &*self.dna,
            &self.config,
            &self.config.get_function,
            Value::String(address.to_owned()),
        )
        .await?;
        if record.is_null() {
            return Ok(None);
        }

        let stored = StoredProfile::from_record(record)?;
        stored.check_author(address, self.config.author_check)?;
        Ok(Some(stored.into_expression(Agent::new(address))))
    }
}
