//! Domain-specific error types and error handling.

mod flow_error;

pub use flow_error::{FlowError, ProviderError};

/// Result alias for flow operations
pub type FlowResult<T> = Result<T, FlowError>;
