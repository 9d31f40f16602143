//! Error types for the verification flow and its provider seam.
//!
//! Validation failures carry enough detail for the transport layer to pick
//! a specific status code; upstream provider failures are wrapped so they
//! surface as gateway errors instead of terminating the process.

use thiserror::Error;

/// Errors surfaced by the verification provider client
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Provider request failed: {0}")]
    Request(String),

    #[error("Provider returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Failed to decode provider response: {0}")]
    Decode(String),

    #[error("Invalid provider endpoint: {0}")]
    InvalidEndpoint(String),

    #[error("Failed to build provider credentials: {0}")]
    Credentials(String),
}

/// Errors produced by the two-phase verification flow
#[derive(Error, Debug)]
pub enum FlowError {
    /// Callback state has no matching pending request: never issued,
    /// already completed, or lost to restart/expiry
    #[error("No pending verification request for the supplied state")]
    RequestNotFound,

    /// Stored request's state field disagrees with the callback's state
    /// parameter; signals a corrupted or tampered entry
    #[error("Callback state does not match the stored request")]
    StateMismatch,

    /// Request's recorded method is not a recognized verification method
    #[error("Unsupported verification method: {method}")]
    UnsupportedMethod { method: String },

    /// The code-for-token exchange with the provider failed
    #[error("Code exchange with the verification provider failed")]
    UpstreamExchange(#[source] ProviderError),

    /// The number verification call against the provider failed
    #[error("Number verification call failed")]
    UpstreamVerification(#[source] ProviderError),

    /// The provider client could not build the authorization URL
    #[error("Failed to build the provider authorization URL")]
    AuthorizationUrl(#[source] ProviderError),
}
