//! Configuration for the verification flow service

use crate::domain::entities::METHOD_NUMBER_VERIFICATION;

/// Configuration for [`VerificationFlowService`](super::VerificationFlowService)
#[derive(Debug, Clone)]
pub struct FlowConfig {
    /// Method identifier applied when the caller supplies none
    pub default_method: String,
}

impl Default for FlowConfig {
    fn default() -> Self {
        Self {
            default_method: METHOD_NUMBER_VERIFICATION.to_string(),
        }
    }
}
