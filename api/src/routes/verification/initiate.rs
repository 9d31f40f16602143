use actix_web::{http::header, web, HttpRequest, HttpResponse};

use crate::dto::verification::InitiateQuery;
use crate::handlers::error::handle_flow_error;

use vr_core::services::flow::{CorrelationStore, NumberVerificationProvider};

use super::{mask_number, snapshot_headers, AppState};

/// Handler for GET /prepStep1
///
/// Records a pending verification request under an opaque correlation
/// state and redirects the client to the provider's authorization URL.
/// By the time the redirect is issued, a matching entry exists in the
/// correlation store.
///
/// # Query parameters
///
/// * `number` - phone number to verify (required)
/// * `method` - verification method identifier (optional, defaults to
///   `number-verification`)
/// * `state` - caller-chosen correlation token (optional, generated when
///   absent)
pub async fn initiate<P, S>(
    req: HttpRequest,
    state: web::Data<AppState<P, S>>,
    query: web::Query<InitiateQuery>,
) -> HttpResponse
where
    P: NumberVerificationProvider + 'static,
    S: CorrelationStore + 'static,
{
    let number = match query.number.as_deref() {
        Some(number) if !number.is_empty() => number.to_string(),
        _ => {
            log::warn!("Initiation rejected: missing number parameter");
            return HttpResponse::BadRequest().body("Missing required query parameter: number");
        }
    };

    let headers = snapshot_headers(&req);

    log::info!(
        "Initiating verification for number: {}, method: {}",
        mask_number(&number),
        query.method.as_deref().unwrap_or("default")
    );

    match state
        .flow_service
        .initiate(
            &number,
            query.method.as_deref(),
            query.state.clone(),
            headers,
        )
        .await
    {
        Ok(result) => {
            log::info!("Redirecting client to provider authorization URL");
            HttpResponse::Found()
                .insert_header((header::LOCATION, result.redirect_url))
                .finish()
        }
        Err(error) => handle_flow_error(error),
    }
}
