//! Business services containing the verification flow logic.

pub mod flow;
pub mod state;

// Re-export commonly used types
pub use flow::{
    CorrelationStore, FlowConfig, InitiateResult, NumberVerificationProvider, TokenGrant,
    VerificationFlowService,
};
pub use state::generate_state;
