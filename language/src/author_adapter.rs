use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, trace};

use crate::adapter::call_zome;
use crate::config::LanguageConfig;
use crate::context::{HolochainLanguageDelegate, LanguageContext};
use crate::errors::LanguageResult;
use crate::expression::{Agent, Expression};
use crate::record::StoredProfile;

pub struct ProfileAuthorAdapter {
    dna: Arc<dyn HolochainLanguageDelegate>,
    config: LanguageConfig,
}

impl ProfileAuthorAdapter {
    pub fn new(context: &LanguageContext, config: LanguageConfig) -> Self {
        ProfileAuthorAdapter {
            dna: context.holochain.clone(),
            config,
        }
    }

    /// Profiles authored by `author`. A DID holds at most one profile, so the result is
    /// `None` or a single expression whose author is `author` as given.
    ///
    /// Only `author.did` is looked up. Agents known under several DIDs are not resolved,
    /// and `count` / `page` do not apply to a single-record lookup.
    pub async fn get_by_author(
        &self,
        author: &Agent,
        count: usize,
        page: usize,
    ) -> LanguageResult<Option<Vec<Expression>>> {
        debug!("ProfileAuthorAdapter.get_by_author(): getting profile of {}", author.did);
        trace!(count, page, "ProfileAuthorAdapter.get_by_author(): pagination ignored");

        let record = call_zome(
            &*self.dna,
            &self.config,
            &self.config.get_function,
            Value::String(author.did.clone()),
        )
        .await?;
        if record.is_null() {
            return Ok(None);
        }

        let stored = StoredProfile::from_record(record)?;
        stored.check_author(&author.did, self.config.author_check)?;
        Ok(Some(vec![stored.into_expression(author.clone())]))
    }
}
