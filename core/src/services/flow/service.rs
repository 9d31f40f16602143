//! Main verification flow service implementation

use std::collections::HashMap;
use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, info, warn};

use crate::domain::entities::{VerificationMethod, VerificationRequest};
use crate::errors::{FlowError, FlowResult};
use crate::services::state::generate_state;

use super::config::FlowConfig;
use super::traits::{CorrelationStore, NumberVerificationProvider};
use super::types::InitiateResult;

/// Flow service relaying the two-phase, state-correlated verification flow
pub struct VerificationFlowService<P: NumberVerificationProvider, S: CorrelationStore> {
    /// Verification provider client
    provider: Arc<P>,
    /// Store correlating redirects to callbacks
    store: Arc<S>,
    /// Service configuration
    config: FlowConfig,
}

impl<P: NumberVerificationProvider, S: CorrelationStore> VerificationFlowService<P, S> {
    /// Create a new verification flow service
    ///
    /// # Arguments
    ///
    /// * `provider` - Verification provider implementation
    /// * `store` - Correlation store implementation
    /// * `config` - Service configuration
    pub fn new(provider: Arc<P>, store: Arc<S>, config: FlowConfig) -> Self {
        Self {
            provider,
            store,
            config,
        }
    }

    /// Initiate a verification flow
    ///
    /// Records a pending request under the correlation state, then builds
    /// the provider authorization URL for the client redirect. By the time
    /// the URL is returned, a matching entry exists in the store.
    ///
    /// # Arguments
    ///
    /// * `number` - The phone number to verify (format-unvalidated here)
    /// * `method` - Verification method identifier; defaults to the single
    ///   supported method when absent. Unrecognized values are still
    ///   recorded and rejected at callback time.
    /// * `supplied_state` - Caller-chosen correlation token; generated when
    ///   absent
    /// * `headers` - Snapshot of the initiating request's headers
    pub async fn initiate(
        &self,
        number: &str,
        method: Option<&str>,
        supplied_state: Option<String>,
        headers: HashMap<String, String>,
    ) -> FlowResult<InitiateResult> {
        let state = supplied_state.unwrap_or_else(generate_state);
        let method = method
            .map(str::to_string)
            .unwrap_or_else(|| self.config.default_method.clone());

        debug!(state = %state, method = %method, "Recording pending verification request");

        let request =
            VerificationRequest::new(state.clone(), method, number.to_string(), headers);
        self.store.insert(&state, request).await;

        let redirect_url = self
            .provider
            .build_authorization_url(&state, number)
            .map_err(FlowError::AuthorizationUrl)?;

        info!(state = %state, "Issued verification authorization redirect");

        Ok(InitiateResult {
            redirect_url,
            state,
        })
    }

    /// Complete a verification flow from the provider callback
    ///
    /// Runs the callback algorithm in order, each step a potential
    /// termination point:
    /// 1. Look up the state in the correlation store
    /// 2. Compare the stored request's state field to the callback's
    /// 3. Exchange the code for an access token
    /// 4. Dispatch on the stored method
    /// 5. Evict the entry and return the provider result unchanged
    ///
    /// On the unsupported-method path the entry is deliberately left
    /// pending so the failed dispatch can be diagnosed; the store's TTL
    /// reclaims it.
    pub async fn complete(&self, code: &str, state: &str) -> FlowResult<Value> {
        let request = self
            .store
            .lookup(state)
            .await
            .ok_or(FlowError::RequestNotFound)?;

        if request.state != state {
            warn!(state = %state, "Stored request state diverges from callback state");
            return Err(FlowError::StateMismatch);
        }

        let grant = self
            .provider
            .exchange_code_for_token(code)
            .await
            .map_err(FlowError::UpstreamExchange)?;

        debug!(state = %state, "Exchanged authorization code for access token");

        let result = match VerificationMethod::parse(&request.method) {
            Some(VerificationMethod::NumberVerification) => self
                .provider
                .verify_number(&request.number, &grant.access_token)
                .await
                .map_err(FlowError::UpstreamVerification)?,
            None => {
                warn!(state = %state, method = %request.method, "Unsupported verification method");
                return Err(FlowError::UnsupportedMethod {
                    method: request.method,
                });
            }
        };

        // Single-use guarantee: the request is consumed on success
        self.store.evict(state).await;

        info!(state = %state, "Verification flow completed");

        Ok(result)
    }
}
