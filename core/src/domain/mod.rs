//! Domain layer containing the entities of the verification flow.

pub mod entities;

// Re-export commonly used domain types
pub use entities::*;
