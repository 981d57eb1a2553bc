use async_trait::async_trait;
use chrono::Utc;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Mutex;

use crate::config::{CREATE_FUNCTION, GET_FUNCTION};
use crate::context::{AgentService, HolochainLanguageDelegate};
use crate::errors::{DelegateError, SignerError};
use crate::expression::{Agent, Expression, ExpressionProof, Profile};
use crate::record::{PROOF_KEY, TIMESTAMP_KEY};

/// Signs with a fake key derived from its DID. The signature is the signed JSON itself.
pub struct MockAgent {
    did: String,
    can_sign: bool,
}

impl MockAgent {
    pub fn new(did: &str) -> Self {
        MockAgent {
            did: String::from(did),
            can_sign: true,
        }
    }

    /// An agent whose keystore is locked.
    pub fn locked(did: &str) -> Self {
        MockAgent {
            did: String::from(did),
            can_sign: false,
        }
    }
}

impl AgentService for MockAgent {
    fn create_signed_expression(&self, data: Profile) -> Result<Expression, SignerError> {
        if !self.can_sign {
            return Err(SignerError::from(format!("Keystore locked for {}", self.did)));
        }
        let signature =
            serde_json::to_string(&data).map_err(|error| SignerError::from(error.to_string()))?;
        Ok(Expression {
            author: Agent::new(self.did.clone()),
            timestamp: Utc::now(),
            data,
            proof: ExpressionProof {
                signature,
                key: format!("{}#primary", self.did),
            },
        })
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct MockCall {
    pub dna_nick: String,
    pub zome_name: String,
    pub fn_name: String,
    pub params: Value,
}

/// In-memory stand-in for the profile zome. Stores the flattened record per author DID.
#[derive(Default)]
pub struct MockHolochain {
    records: Mutex<HashMap<String, Value>>,
    calls: Mutex<Vec<MockCall>>,
    failure: Mutex<Option<String>>,
}

impl MockHolochain {
    pub fn new() -> Self {
        MockHolochain::default()
    }

    /// Every following call fails with `reason`.
    pub fn fail_with(&self, reason: &str) {
        *self.failure.lock().expect("Could not get lock on failure") = Some(String::from(reason));
    }

    /// Puts a raw record under `did`, bypassing create.
    pub fn insert_record(&self, did: &str, record: Value) {
        self.records
            .lock()
            .expect("Could not get lock on records")
            .insert(String::from(did), record);
    }

    pub fn calls(&self) -> Vec<MockCall> {
        self.calls.lock().expect("Could not get lock on calls").clone()
    }

    fn create_profile(&self, params: Value) -> Result<Value, DelegateError> {
        let expression: Expression = serde_json::from_value(params)
            .map_err(|error| DelegateError::from(format!("Invalid profile input: {}", error)))?;
        let proof = serde_json::to_value(&expression.proof)
            .map_err(|error| DelegateError::from(error.to_string()))?;
        let timestamp = serde_json::to_value(&expression.timestamp)
            .map_err(|error| DelegateError::from(error.to_string()))?;

        let mut record = expression.data;
        record.insert(String::from(PROOF_KEY), proof);
        record.insert(String::from(TIMESTAMP_KEY), timestamp);
        self.insert_record(&expression.author.did, Value::Object(record));
        Ok(Value::Null)
    }

    fn get_profile(&self, params: Value) -> Result<Value, DelegateError> {
        let did = params
            .as_str()
            .ok_or_else(|| DelegateError::from(format!("Expected a DID string, got {}", params)))?;
        Ok(self
            .records
            .lock()
            .expect("Could not get lock on records")
            .get(did)
            .cloned()
            .unwrap_or(Value::Null))
    }
}

#[async_trait]
impl HolochainLanguageDelegate for MockHolochain {
    async fn call(
        &self,
        dna_nick: &str,
        zome_name: &str,
        fn_name: &str,
        params: Value,
    ) -> Result<Value, DelegateError> {
        self.calls
            .lock()
            .expect("Could not get lock on calls")
            .push(MockCall {
                dna_nick: String::from(dna_nick),
                zome_name: String::from(zome_name),
                fn_name: String::from(fn_name),
                params: params.clone(),
            });
        if let Some(reason) = self.failure.lock().expect("Could not get lock on failure").clone() {
            return Err(DelegateError::from(reason));
        }

        match fn_name {
            CREATE_FUNCTION => self.create_profile(params),
            GET_FUNCTION => self.get_profile(params),
            other => Err(DelegateError::from(format!(
                "Zome function {} not found",
                other
            ))),
        }
    }
}
