//! Holochain zome storing signed profile expressions under the DID of their author.
//! A profile is linked from its `Did` entry; the newest link wins on read, so creating
//! a profile for a DID that already has one replaces it for all readers.

#[macro_use]
extern crate lazy_static;

use hdk::prelude::*;

mod errors;
mod inputs;
mod outputs;
mod profile;
mod retriever;
mod tests;
mod utils;

pub use inputs::{Agent, DidInput, ProfileInput};
pub use outputs::ProfileRecord;

#[hdk_extern]
pub fn create_profile(input: ProfileInput) -> ExternResult<()> {
    profile::create_profile::<retriever::HolochainRetriever>(input)
        .map_err(|error| utils::err(&format!("{}", error)))
}

#[hdk_extern]
pub fn add_profile(input: ProfileInput) -> ExternResult<()> {
    profile::add_profile::<retriever::HolochainRetriever>(input)
        .map_err(|error| utils::err(&format!("{}", error)))
}

#[hdk_extern]
pub fn who_am_i(_: ()) -> ExternResult<AgentPubKey> {
    profile::who_am_i::<retriever::HolochainRetriever>()
        .map_err(|error| utils::err(&format!("{}", error)))
}

#[hdk_extern]
pub fn get_profile(did: DidInput) -> ExternResult<Option<ProfileRecord>> {
    profile::get_profile::<retriever::HolochainRetriever>(did)
        .map_err(|error| utils::err(&format!("{}", error)))
}

lazy_static! {
    pub static ref PROFILE_LINK_TAG: LinkTag = LinkTag::new("profile");
}
