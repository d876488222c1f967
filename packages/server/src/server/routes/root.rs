use axum::Json;
use serde::Serialize;

#[derive(Serialize)]
pub struct ServiceInfo {
    message: String,
    version: String,
}

/// Root endpoint - service identification.
pub async fn root_handler() -> Json<ServiceInfo> {
    Json(ServiceInfo {
        message: "UI Generator API".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
