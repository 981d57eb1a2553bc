use did_profiles_integrity::{Did, EntryTypes, LinkTypes, Profile};
use hdk::prelude::*;
use std::convert::TryFrom;

use super::ProfileRetriever;
use crate::errors::{DidProfilesError, DidProfilesResult};
use crate::PROFILE_LINK_TAG;

pub struct HolochainRetriever;

impl ProfileRetriever for HolochainRetriever {
    fn store_profile(did: &Did, profile: Profile) -> DidProfilesResult<()> {
        let did_hash = hash_entry(did)?;
        if !Self::did_exists(did)? {
            create_entry(EntryTypes::Did(did.clone()))?;
            debug!("HolochainRetriever.store_profile(): created did entry for {}", did);
        }

        let profile_hash = hash_entry(&profile)?;
        create_entry(EntryTypes::Profile(profile))?;
        create_link(
            did_hash,
            profile_hash,
            LinkTypes::Profile,
            PROFILE_LINK_TAG.clone(),
        )?;
        Ok(())
    }

    fn latest_profile(did: &Did) -> DidProfilesResult<Option<Profile>> {
        let did_hash = hash_entry(did)?;
        let latest = get_links(did_hash, LinkTypes::Profile, Some(PROFILE_LINK_TAG.clone()))?
            .into_iter()
            .max_by_key(|link| link.timestamp);

        match latest {
            Some(link) => {
                let profile_hash = EntryHash::try_from(link.target).map_err(|_| {
                    DidProfilesError::InternalError("Profile link does not point to an entry")
                })?;
                match get(profile_hash, GetOptions::latest())? {
                    Some(record) => Ok(Some(record.entry().to_app_option::<Profile>()?.ok_or(
                        DidProfilesError::InternalError(
                            "Expected element to contain profile entry data",
                        ),
                    )?)),
                    None => Ok(None),
                }
            }
            None => Ok(None),
        }
    }

    fn did_exists(did: &Did) -> DidProfilesResult<bool> {
        Ok(get(hash_entry(did)?, GetOptions::content())?.is_some())
    }

    fn agent_pub_key() -> DidProfilesResult<AgentPubKey> {
        Ok(agent_info()?.agent_initial_pubkey)
    }
}
