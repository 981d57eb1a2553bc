use did_profiles_integrity::{Did, Profile};
use hdk::prelude::AgentPubKey;

use crate::errors::DidProfilesResult;

mod holochain;
#[cfg(any(test, feature = "test"))]
mod mock;

pub use holochain::HolochainRetriever;
#[cfg(any(test, feature = "test"))]
pub use mock::{MockRetriever, GLOBAL_MOCKED_PROFILES, MOCKED_AGENT};

pub trait ProfileRetriever {
    /// Records `profile` as the newest profile of `did`.
    fn store_profile(did: &Did, profile: Profile) -> DidProfilesResult<()>;
    fn latest_profile(did: &Did) -> DidProfilesResult<Option<Profile>>;
    fn did_exists(did: &Did) -> DidProfilesResult<bool>;
    fn agent_pub_key() -> DidProfilesResult<AgentPubKey>;
}
