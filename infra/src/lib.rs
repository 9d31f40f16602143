//! # Infrastructure Layer
//!
//! This crate implements the infrastructure layer for the VerifyRelay
//! application. It provides the concrete collaborators behind the core
//! crate's trait seams:
//!
//! - **Cache**: the in-memory, TTL-bounded correlation store
//! - **Provider**: the HTTP client for the verification provider's
//!   OIDC authorize, token, and number-verification endpoints

// Re-export core types for convenience
pub use vr_core::errors::*;

/// Cache module - correlation store implementations
pub mod cache;

/// Provider module - verification provider HTTP client
pub mod provider;
