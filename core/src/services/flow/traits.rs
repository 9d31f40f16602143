//! Traits for the correlation store and verification provider seams

use async_trait::async_trait;
use serde_json::Value;

use crate::domain::entities::VerificationRequest;
use crate::errors::ProviderError;

use super::types::TokenGrant;

/// Trait for the store correlating redirects to their callbacks.
///
/// Entries carry a time-to-live enforced by the implementation: an expired
/// entry is reported absent on lookup. `evict` is idempotent.
#[async_trait]
pub trait CorrelationStore: Send + Sync {
    /// Insert or overwrite the pending request recorded under `state`
    async fn insert(&self, state: &str, request: VerificationRequest);
    /// Look up a pending request; expiry is checked here
    async fn lookup(&self, state: &str) -> Option<VerificationRequest>;
    /// Delete the entry if present; does nothing otherwise
    async fn evict(&self, state: &str);
}

/// Trait for the external verification provider.
///
/// Three opaque capabilities: build the authorization redirect, exchange an
/// authorization code for an access token, and run the number verification
/// check itself.
#[async_trait]
pub trait NumberVerificationProvider: Send + Sync {
    /// Build the provider authorization URL parameterized by `state`
    fn build_authorization_url(
        &self,
        state: &str,
        number: &str,
    ) -> Result<String, ProviderError>;

    /// Exchange an authorization code for an access token
    async fn exchange_code_for_token(&self, code: &str) -> Result<TokenGrant, ProviderError>;

    /// Verify a phone number using the access token; the provider's JSON
    /// result is returned unchanged
    async fn verify_number(
        &self,
        number: &str,
        access_token: &str,
    ) -> Result<Value, ProviderError>;
}
