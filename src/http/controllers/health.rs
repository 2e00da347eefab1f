use actix_web::HttpResponse;
use chrono::Utc;
use serde_json::json;

/// Liveness probe for the deployment's monitoring.
pub async fn check() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": crate::SERVICE_NAME,
        "timestamp": Utc::now(),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
