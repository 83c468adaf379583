use axum::Json;
use axum::extract::State;
use axum::response::IntoResponse;
use serde::{Deserialize, Serialize};

use crate::infrastructure::observability::sanitize_prompt;
use crate::presentation::handlers::ApiError;
use crate::presentation::state::AppState;

#[derive(Deserialize)]
pub struct RewriteRequest {
    pub text: String,
    pub tone: Option<String>,
}

#[derive(Serialize)]
pub struct RewriteResponse {
    pub rewritten: String,
}

#[tracing::instrument(skip(state, request))]
pub async fn rewrite_handler(
    State(state): State<AppState>,
    Json(request): Json<RewriteRequest>,
) -> Result<impl IntoResponse, ApiError> {
    tracing::debug!(text = %sanitize_prompt(&request.text), tone = ?request.tone, "Processing rewrite");

    let rewritten = state
        .generation_service
        .rewrite(&request.text, request.tone.as_deref())
        .await?;

    Ok(Json(RewriteResponse { rewritten }))
}
