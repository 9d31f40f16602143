//! Application configuration, read once from the environment at startup.

use std::env;
use std::fs;
use thiserror::Error;

/// Errors raised while assembling the startup configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Required environment variable {0} is not set")]
    MissingVar(&'static str),

    #[error("Environment variable {name} has an invalid value: {value}")]
    InvalidVar { name: &'static str, value: String },

    #[error("Failed to read private key file {path}: {source}")]
    PrivateKey {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Startup configuration for the VerifyRelay API
#[derive(Debug, Clone)]
pub struct Config {
    /// Application identifier registered with the verification provider
    pub application_id: String,
    /// Path to the application's RSA private key file
    pub private_key_path: String,
    /// Callback URL override; defaults to `https://localhost:{port}/step2`
    pub redirect_url: Option<String>,
    /// Host address to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Provider authorize endpoint override
    pub auth_url: Option<String>,
    /// Provider token endpoint override
    pub token_url: Option<String>,
    /// Provider API base URL override
    pub api_base_url: Option<String>,
    /// TTL for pending correlation entries in seconds
    pub state_ttl_seconds: i64,
    /// Capacity cap for pending correlation entries
    pub state_capacity: usize,
}

impl Config {
    /// Load the configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        let application_id = env::var("VERIFY_APPLICATION_ID")
            .map_err(|_| ConfigError::MissingVar("VERIFY_APPLICATION_ID"))?;
        let private_key_path = env::var("VERIFY_PRIVATE_KEY_PATH")
            .map_err(|_| ConfigError::MissingVar("VERIFY_PRIVATE_KEY_PATH"))?;

        Ok(Config {
            application_id,
            private_key_path,
            redirect_url: env::var("REDIRECT_URL").ok(),
            host: env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: parse_var("PORT", 3000)?,
            auth_url: env::var("VERIFY_AUTH_URL").ok(),
            token_url: env::var("VERIFY_TOKEN_URL").ok(),
            api_base_url: env::var("VERIFY_API_BASE_URL").ok(),
            state_ttl_seconds: parse_var("STATE_TTL_SECONDS", 600)?,
            state_capacity: parse_var("STATE_CAPACITY", 10_000)?,
        })
    }

    /// The callback URL handed to the provider
    pub fn redirect_url(&self) -> String {
        self.redirect_url
            .clone()
            .unwrap_or_else(|| format!("https://localhost:{}/step2", self.port))
    }

    /// The address the HTTP server binds to
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Read the private key file and decode it as UTF-8 text
    pub fn load_private_key(&self) -> Result<String, ConfigError> {
        fs::read_to_string(&self.private_key_path).map_err(|source| ConfigError::PrivateKey {
            path: self.private_key_path.clone(),
            source,
        })
    }
}

fn parse_var<T: std::str::FromStr>(name: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(name) {
        Ok(value) => value
            .parse()
            .map_err(|_| ConfigError::InvalidVar { name, value }),
        Err(_) => Ok(default),
    }
}
