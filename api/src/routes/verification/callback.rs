use actix_web::{web, HttpResponse};

use crate::dto::verification::CallbackQuery;
use crate::handlers::error::handle_flow_error;

use vr_core::services::flow::{CorrelationStore, NumberVerificationProvider};

use super::AppState;

/// Handler for GET /step2, the provider callback
///
/// Correlates the callback to its pending request via `state`, exchanges
/// the authorization `code` for an access token, runs the stored
/// verification method, and returns the provider's result unchanged.
///
/// # Responses
///
/// * `200` - JSON verification result
/// * `400` - missing parameters or unsupported method
/// * `401` - no pending request for the supplied state
/// * `403` - stored state diverges from the callback state
/// * `502` - provider exchange or verification failure
pub async fn callback<P, S>(
    state: web::Data<AppState<P, S>>,
    query: web::Query<CallbackQuery>,
) -> HttpResponse
where
    P: NumberVerificationProvider + 'static,
    S: CorrelationStore + 'static,
{
    let (code, callback_state) = match (query.code.as_deref(), query.state.as_deref()) {
        (Some(code), Some(callback_state)) if !code.is_empty() && !callback_state.is_empty() => {
            (code, callback_state)
        }
        _ => {
            log::warn!("Callback rejected: missing code or state parameter");
            return HttpResponse::BadRequest()
                .body("Missing required query parameters: code, state");
        }
    };

    match state.flow_service.complete(code, callback_state).await {
        Ok(result) => HttpResponse::Ok().json(result),
        Err(error) => handle_flow_error(error),
    }
}
