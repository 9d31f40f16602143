use actix_web::HttpResponse;

use vr_core::errors::FlowError;

/// Handle flow errors and convert them to appropriate HTTP responses
///
/// Validation failures get a specific status and message; upstream
/// provider failures are reported as gateway errors so they never
/// terminate the process.
pub fn handle_flow_error(error: FlowError) -> HttpResponse {
    match error {
        FlowError::RequestNotFound => {
            log::warn!("Callback rejected: no pending request for the supplied state");
            HttpResponse::Unauthorized().body("Server error - request doesnt exist")
        }
        FlowError::StateMismatch => {
            log::warn!("Callback rejected: stored state diverges from callback state");
            HttpResponse::Forbidden().body("State is incorrect!")
        }
        FlowError::UnsupportedMethod { method } => {
            log::warn!("Callback rejected: unsupported method {}", method);
            HttpResponse::BadRequest().body("Invalid method")
        }
        FlowError::UpstreamExchange(source) => {
            log::error!("Code exchange failed: {}", source);
            HttpResponse::BadGateway().body("Verification provider request failed")
        }
        FlowError::UpstreamVerification(source) => {
            log::error!("Number verification call failed: {}", source);
            HttpResponse::BadGateway().body("Verification provider request failed")
        }
        FlowError::AuthorizationUrl(source) => {
            log::error!("Failed to build authorization URL: {}", source);
            HttpResponse::BadGateway().body("Verification provider request failed")
        }
    }
}
