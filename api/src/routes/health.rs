use actix_web::HttpResponse;

/// Handler for GET /_/health
///
/// Liveness probe; responds 200 with an empty body.
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().finish()
}
