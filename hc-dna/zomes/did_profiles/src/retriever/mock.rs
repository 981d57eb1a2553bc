use did_profiles_integrity::{Did, Profile};
use hdk::prelude::AgentPubKey;
use std::collections::BTreeMap;
use std::sync::Mutex;

use super::ProfileRetriever;
use crate::errors::{DidProfilesError, DidProfilesResult};

/// Profiles per DID in link creation order. A DID is registered once it has a profile.
pub struct MockRetriever;

impl ProfileRetriever for MockRetriever {
    fn store_profile(did: &Did, profile: Profile) -> DidProfilesResult<()> {
        GLOBAL_MOCKED_PROFILES
            .lock()
            .map_err(|_| DidProfilesError::InternalError("Could not get lock on mocked profiles"))?
            .entry(did.0.clone())
            .or_insert_with(Vec::new)
            .push(profile);
        Ok(())
    }

    fn latest_profile(did: &Did) -> DidProfilesResult<Option<Profile>> {
        Ok(GLOBAL_MOCKED_PROFILES
            .lock()
            .map_err(|_| DidProfilesError::InternalError("Could not get lock on mocked profiles"))?
            .get(&did.0)
            .and_then(|profiles| profiles.last().cloned()))
    }

    fn did_exists(did: &Did) -> DidProfilesResult<bool> {
        Ok(GLOBAL_MOCKED_PROFILES
            .lock()
            .map_err(|_| DidProfilesError::InternalError("Could not get lock on mocked profiles"))?
            .contains_key(&did.0))
    }

    fn agent_pub_key() -> DidProfilesResult<AgentPubKey> {
        Ok(MOCKED_AGENT.clone())
    }
}

lazy_static! {
    pub static ref GLOBAL_MOCKED_PROFILES: Mutex<BTreeMap<String, Vec<Profile>>> =
        Mutex::new(BTreeMap::new());
    pub static ref MOCKED_AGENT: AgentPubKey = AgentPubKey::from_raw_36(vec![0xdb; 36]);
}
