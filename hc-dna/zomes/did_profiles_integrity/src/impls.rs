use crate::{Profile, ProfileData};

pub const PROOF_KEY: &str = "proof";
pub const TIMESTAMP_KEY: &str = "timestamp";

impl Profile {
    /// Flattens the profile into the record shape handed back to callers:
    /// every data field at the top level next to `proof` and `timestamp`.
    /// The envelope fields overwrite data fields of the same name.
    pub fn into_record(self) -> Result<ProfileData, serde_json::Error> {
        let mut record = self.data;
        record.insert(String::from(PROOF_KEY), serde_json::to_value(&self.proof)?);
        record.insert(String::from(TIMESTAMP_KEY), serde_json::to_value(&self.timestamp)?);
        Ok(record)
    }
}
