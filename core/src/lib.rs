//! # VerifyRelay Core
//!
//! Core domain and flow logic for the VerifyRelay backend.
//! This crate contains the verification request entity, the two-phase
//! state-correlated flow service, the trait seams implemented by the
//! infrastructure layer, and the error taxonomy.

pub mod domain;
pub mod errors;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use services::*;
