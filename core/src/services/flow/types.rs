//! Types for verification flow results

use serde::{Deserialize, Serialize};

/// Result of initiating a verification flow
#[derive(Debug, Clone)]
pub struct InitiateResult {
    /// Provider authorization URL the client should be redirected to
    pub redirect_url: String,
    /// Correlation state under which the pending request was recorded
    pub state: String,
}

/// Access token grant obtained from the code-for-token exchange
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenGrant {
    /// Short-lived credential passed to the verification call
    pub access_token: String,
    /// Token type reported by the provider, typically "Bearer"
    #[serde(default)]
    pub token_type: Option<String>,
    /// Seconds until the token expires, when reported
    #[serde(default)]
    pub expires_in: Option<i64>,
}
