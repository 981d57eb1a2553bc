use did_profiles_integrity::Profile;
use hdk::prelude::*;

use crate::errors::{DidProfilesError, DidProfilesResult};
use crate::inputs::{DidInput, ProfileInput};
use crate::outputs::ProfileRecord;
use crate::retriever::ProfileRetriever;
use crate::utils::validate_did;

pub fn create_profile<Retriever: ProfileRetriever>(input: ProfileInput) -> DidProfilesResult<()> {
    let did = validate_did(&input.author.did)?;
    debug!("DidProfiles.create_profile(): storing profile for {}", did);

    let profile = Profile {
        data: input.data,
        proof: input.proof,
        timestamp: input.timestamp,
    };
    Retriever::store_profile(&did, profile)
}

/// Adds a profile to a DID that already has one. Unlike `create_profile`,
/// an unknown DID is an error.
pub fn add_profile<Retriever: ProfileRetriever>(input: ProfileInput) -> DidProfilesResult<()> {
    let did = validate_did(&input.author.did)?;
    if !Retriever::did_exists(&did)? {
        return Err(DidProfilesError::UnknownDid(did.0));
    }
    debug!("DidProfiles.add_profile(): storing profile for {}", did);

    let profile = Profile {
        data: input.data,
        proof: input.proof,
        timestamp: input.timestamp,
    };
    Retriever::store_profile(&did, profile)
}

pub fn who_am_i<Retriever: ProfileRetriever>() -> DidProfilesResult<AgentPubKey> {
    Retriever::agent_pub_key()
}

pub fn get_profile<Retriever: ProfileRetriever>(
    did: DidInput,
) -> DidProfilesResult<Option<ProfileRecord>> {
    let did = validate_did(&did.0)?;

    match Retriever::latest_profile(&did)? {
        Some(profile) => Ok(Some(ProfileRecord(profile.into_record()?))),
        None => {
            debug!("DidProfiles.get_profile(): no profile linked from {}", did);
            Ok(None)
        }
    }
}
