//! Domain entities representing core business objects.

pub mod verification_request;

// Re-export commonly used types
pub use verification_request::{
    VerificationMethod, VerificationRequest, METHOD_NUMBER_VERIFICATION,
};
