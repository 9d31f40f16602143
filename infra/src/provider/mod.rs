//! Provider module for the verification provider HTTP client
//!
//! Exposes the three opaque capabilities of the provider: building the
//! OIDC authorization redirect, exchanging an authorization code for an
//! access token, and invoking the number-verification check.

pub mod client;
pub mod config;
mod jwt;

pub use client::OidcProviderClient;
pub use config::ProviderConfig;
