use serde::Deserialize;

/// Query parameters for GET /prepStep1
///
/// All fields are optional at the deserialization layer so the handler can
/// report a precise error for the missing `number` rather than a generic
/// query parse failure.
#[derive(Debug, Clone, Deserialize)]
pub struct InitiateQuery {
    /// Phone number to verify; required for the flow to be meaningful
    pub number: Option<String>,

    /// Verification method identifier; defaults to "number-verification"
    pub method: Option<String>,

    /// Caller-chosen correlation state; generated when absent
    pub state: Option<String>,
}

/// Query parameters for GET /step2, the provider callback
#[derive(Debug, Clone, Deserialize)]
pub struct CallbackQuery {
    /// Authorization code issued by the provider
    pub code: Option<String>,

    /// Correlation state echoed back by the provider
    pub state: Option<String>,
}
