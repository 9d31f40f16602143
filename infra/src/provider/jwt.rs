//! Application JWT generation for provider authentication

use chrono::Utc;
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use serde::Serialize;
use uuid::Uuid;

use vr_core::errors::ProviderError;

/// Lifetime of a generated application JWT in seconds
const JWT_TTL_SECONDS: i64 = 900;

#[derive(Debug, Serialize)]
struct ApplicationClaims {
    application_id: String,
    iat: i64,
    exp: i64,
    jti: String,
}

/// Signs a short-lived RS256 application JWT used as the bearer
/// credential on token-exchange requests.
pub fn generate_application_jwt(
    application_id: &str,
    private_key_pem: &str,
) -> Result<String, ProviderError> {
    let key = EncodingKey::from_rsa_pem(private_key_pem.as_bytes())
        .map_err(|e| ProviderError::Credentials(format!("invalid private key: {}", e)))?;

    let now = Utc::now().timestamp();
    let claims = ApplicationClaims {
        application_id: application_id.to_string(),
        iat: now,
        exp: now + JWT_TTL_SECONDS,
        jti: Uuid::new_v4().to_string(),
    };

    encode(&Header::new(Algorithm::RS256), &claims, &key)
        .map_err(|e| ProviderError::Credentials(format!("failed to sign JWT: {}", e)))
}
