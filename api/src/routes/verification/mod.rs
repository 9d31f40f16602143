//! Verification flow route handlers
//!
//! The two-phase flow:
//! - `initiate` records a pending request and redirects to the provider
//! - `callback` validates the returning state, exchanges the code, and
//!   completes the verification

pub mod callback;
pub mod initiate;

use actix_web::HttpRequest;
use std::collections::HashMap;
use std::sync::Arc;

use vr_core::services::flow::{
    CorrelationStore, NumberVerificationProvider, VerificationFlowService,
};

/// Application state that holds the shared flow service
pub struct AppState<P, S>
where
    P: NumberVerificationProvider,
    S: CorrelationStore,
{
    pub flow_service: Arc<VerificationFlowService<P, S>>,
}

/// Snapshot the request headers for the audit trail on the pending request
pub(crate) fn snapshot_headers(req: &HttpRequest) -> HashMap<String, String> {
    req.headers()
        .iter()
        .filter_map(|(name, value)| {
            value
                .to_str()
                .ok()
                .map(|v| (name.as_str().to_string(), v.to_string()))
        })
        .collect()
}

/// Mask a phone number for logging, keeping only the last four characters.
/// The number is caller-supplied and format-unvalidated, so masking works
/// on characters, never on byte offsets.
pub(crate) fn mask_number(number: &str) -> String {
    let chars = number.chars().count();
    if chars <= 4 {
        return "*".repeat(chars);
    }
    let masked = chars - 4;
    let tail: String = number.chars().skip(masked).collect();
    format!("{}{}", "*".repeat(masked), tail)
}

#[cfg(test)]
mod tests {
    use super::mask_number;

    #[test]
    fn test_mask_number_keeps_last_four_characters() {
        assert_eq!(mask_number("+15551234567"), "********4567");
    }

    #[test]
    fn test_mask_number_masks_short_numbers_entirely() {
        assert_eq!(mask_number("1234"), "****");
        assert_eq!(mask_number(""), "");
    }

    #[test]
    fn test_mask_number_handles_multi_byte_characters() {
        // Unvalidated input may contain non-ASCII characters
        assert_eq!(mask_number("aéééa"), "*éééa");
        assert_eq!(mask_number("ééé"), "***");
    }
}
