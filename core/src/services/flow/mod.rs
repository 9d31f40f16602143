//! Verification flow module for the two-phase provider redirect workflow
//!
//! This module provides the state-correlated authorization flow:
//! - Initiation: record a pending request and build the provider redirect
//! - Callback completion: validate state, exchange the code, dispatch the
//!   verification method, and retire the request

mod config;
mod service;
mod traits;
mod types;

#[cfg(test)]
mod tests;

pub use config::FlowConfig;
pub use service::VerificationFlowService;
pub use traits::{CorrelationStore, NumberVerificationProvider};
pub use types::{InitiateResult, TokenGrant};
