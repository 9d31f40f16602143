//! Verification provider client configuration

/// Default OIDC authorize endpoint
pub const DEFAULT_AUTH_URL: &str = "https://oidc.api.vonage.com/oauth2/auth";

/// Default token exchange endpoint
pub const DEFAULT_TOKEN_URL: &str = "https://api-eu.vonage.com/oauth2/token";

/// Default base URL for the number-verification API
pub const DEFAULT_API_BASE_URL: &str =
    "https://api-eu.vonage.com/camara/number-verification/v031";

/// Scope requested on the authorization redirect
pub const DEFAULT_SCOPE: &str =
    "openid dpv:FraudPreventionAndDetection#number-verification-verify-read";

/// Configuration for [`OidcProviderClient`](super::OidcProviderClient)
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    /// Application identifier registered with the provider
    pub application_id: String,
    /// RSA private key (PEM, UTF-8) paired with the application
    pub private_key_pem: String,
    /// Callback URL the provider redirects to after authorization
    pub redirect_url: String,
    /// OIDC authorize endpoint
    pub auth_url: String,
    /// Token exchange endpoint
    pub token_url: String,
    /// Base URL for the number-verification API
    pub api_base_url: String,
    /// Scope requested on the authorization redirect
    pub scope: String,
    /// Timeout for provider API requests in seconds
    pub request_timeout_secs: u64,
}

impl ProviderConfig {
    /// Create a configuration with the default provider endpoints
    pub fn new(
        application_id: impl Into<String>,
        private_key_pem: impl Into<String>,
        redirect_url: impl Into<String>,
    ) -> Self {
        Self {
            application_id: application_id.into(),
            private_key_pem: private_key_pem.into(),
            redirect_url: redirect_url.into(),
            auth_url: DEFAULT_AUTH_URL.to_string(),
            token_url: DEFAULT_TOKEN_URL.to_string(),
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            scope: DEFAULT_SCOPE.to_string(),
            request_timeout_secs: 30,
        }
    }
}
