use axum::{extract::Extension, http::StatusCode, Json};
use serde::{Deserialize, Serialize};

use codegen::{GenerationOutcome, PageType};

use crate::server::app::AppState;

/// Request body for UI generation.
#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    /// Natural language description of the UI to generate
    pub prompt: String,

    /// Optional page type hint to guide generation
    #[serde(default)]
    pub page_type: Option<PageType>,
}

/// Body returned for malformed requests.
#[derive(Debug, Serialize)]
pub struct RequestError {
    pub error: String,
}

/// Generate UI code from a natural-language prompt.
///
/// Generation failures (upstream errors, unparseable responses) are
/// reported in-band with a 200 status and `success: false`; only a
/// malformed request gets a 4xx.
pub async fn generate_handler(
    Extension(state): Extension<AppState>,
    Json(request): Json<GenerateRequest>,
) -> Result<Json<GenerationOutcome>, (StatusCode, Json<RequestError>)> {
    if request.prompt.trim().is_empty() {
        return Err((
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(RequestError {
                error: "prompt must not be empty".to_string(),
            }),
        ));
    }

    tracing::info!(
        prompt_len = request.prompt.len(),
        page_type = ?request.page_type,
        "generation request"
    );

    let outcome = state
        .generator
        .generate(&request.prompt, request.page_type)
        .await;

    Ok(Json(outcome))
}
