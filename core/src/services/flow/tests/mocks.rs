//! Mock implementations for testing the verification flow

use async_trait::async_trait;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::domain::entities::VerificationRequest;
use crate::errors::ProviderError;
use crate::services::flow::traits::{CorrelationStore, NumberVerificationProvider};
use crate::services::flow::types::TokenGrant;

// Mock provider for testing
pub struct MockProvider {
    pub exchanged_codes: Arc<Mutex<Vec<String>>>,
    pub verified_numbers: Arc<Mutex<Vec<String>>>,
    pub exchange_should_fail: bool,
    pub verify_should_fail: bool,
}

impl MockProvider {
    pub fn new() -> Self {
        Self {
            exchanged_codes: Arc::new(Mutex::new(Vec::new())),
            verified_numbers: Arc::new(Mutex::new(Vec::new())),
            exchange_should_fail: false,
            verify_should_fail: false,
        }
    }

    pub fn failing_exchange() -> Self {
        Self {
            exchange_should_fail: true,
            ..Self::new()
        }
    }

    pub fn failing_verify() -> Self {
        Self {
            verify_should_fail: true,
            ..Self::new()
        }
    }
}

#[async_trait]
impl NumberVerificationProvider for MockProvider {
    fn build_authorization_url(
        &self,
        state: &str,
        number: &str,
    ) -> Result<String, ProviderError> {
        Ok(format!(
            "https://provider.test/oauth2/auth?state={}&login_hint=tel:{}",
            state, number
        ))
    }

    async fn exchange_code_for_token(&self, code: &str) -> Result<TokenGrant, ProviderError> {
        if self.exchange_should_fail {
            return Err(ProviderError::Status {
                status: 400,
                body: "invalid_grant".to_string(),
            });
        }
        self.exchanged_codes.lock().unwrap().push(code.to_string());
        Ok(TokenGrant {
            access_token: format!("mock-token-for-{}", code),
            token_type: Some("Bearer".to_string()),
            expires_in: Some(300),
        })
    }

    async fn verify_number(
        &self,
        number: &str,
        access_token: &str,
    ) -> Result<Value, ProviderError> {
        if self.verify_should_fail {
            return Err(ProviderError::Request("connection reset".to_string()));
        }
        self.verified_numbers.lock().unwrap().push(number.to_string());
        Ok(json!({
            "devicePhoneNumberVerified": true,
            "accessTokenUsed": access_token,
        }))
    }
}

// Mock correlation store for testing; a plain map without expiry
pub struct MockStore {
    pub entries: Arc<Mutex<HashMap<String, VerificationRequest>>>,
}

impl MockStore {
    pub fn new() -> Self {
        Self {
            entries: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }

    pub fn contains(&self, state: &str) -> bool {
        self.entries.lock().unwrap().contains_key(state)
    }
}

#[async_trait]
impl CorrelationStore for MockStore {
    async fn insert(&self, state: &str, request: VerificationRequest) {
        self.entries
            .lock()
            .unwrap()
            .insert(state.to_string(), request);
    }

    async fn lookup(&self, state: &str) -> Option<VerificationRequest> {
        self.entries.lock().unwrap().get(state).cloned()
    }

    async fn evict(&self, state: &str) {
        self.entries.lock().unwrap().remove(state);
    }
}
