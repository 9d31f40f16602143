//! Pending verification request entity for the state-correlated flow.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Method identifier for the single supported verification flow
pub const METHOD_NUMBER_VERIFICATION: &str = "number-verification";

/// A pending verification request awaiting its provider callback.
///
/// Created when the authorization redirect is issued and stored under its
/// `state` token. The stored `state` field must always equal the store key;
/// a divergence signals a corrupted or tampered entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationRequest {
    /// Opaque correlation token linking the redirect to its callback
    pub state: String,

    /// Verification method identifier as supplied by the caller.
    /// Kept raw so that initiation can record any value; dispatch
    /// rejects unrecognized ones at callback time.
    pub method: String,

    /// Phone number to verify (caller-supplied, format-unvalidated)
    pub number: String,

    /// Snapshot of the initiating HTTP request's headers, retained
    /// for audit/context
    pub headers: HashMap<String, String>,

    /// Timestamp when the request was recorded; drives TTL eviction
    pub created_at: DateTime<Utc>,
}

impl VerificationRequest {
    /// Creates a new pending request stamped with the current time
    pub fn new(
        state: String,
        method: String,
        number: String,
        headers: HashMap<String, String>,
    ) -> Self {
        Self {
            state,
            method,
            number,
            headers,
            created_at: Utc::now(),
        }
    }
}

/// Typed dispatch for the verification method recorded on a request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerificationMethod {
    /// Provider-side phone number verification check
    NumberVerification,
}

impl VerificationMethod {
    /// Parses a raw method identifier; `None` for unrecognized values
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            METHOD_NUMBER_VERIFICATION => Some(Self::NumberVerification),
            _ => None,
        }
    }

    /// Canonical identifier for this method
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NumberVerification => METHOD_NUMBER_VERIFICATION,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_request_records_all_fields() {
        let mut headers = HashMap::new();
        headers.insert("user-agent".to_string(), "test-agent".to_string());

        let request = VerificationRequest::new(
            "state-123".to_string(),
            METHOD_NUMBER_VERIFICATION.to_string(),
            "+15551234567".to_string(),
            headers,
        );

        assert_eq!(request.state, "state-123");
        assert_eq!(request.method, METHOD_NUMBER_VERIFICATION);
        assert_eq!(request.number, "+15551234567");
        assert_eq!(
            request.headers.get("user-agent").map(String::as_str),
            Some("test-agent")
        );
        assert!(request.created_at <= Utc::now());
    }

    #[test]
    fn test_method_parse_recognizes_number_verification() {
        assert_eq!(
            VerificationMethod::parse("number-verification"),
            Some(VerificationMethod::NumberVerification)
        );
        assert_eq!(VerificationMethod::parse("unknown-method"), None);
        assert_eq!(VerificationMethod::parse(""), None);
    }

    #[test]
    fn test_method_as_str_round_trips() {
        let method = VerificationMethod::NumberVerification;
        assert_eq!(VerificationMethod::parse(method.as_str()), Some(method));
    }
}
