use axum::Json;
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::SessionId;
use crate::infrastructure::observability::sanitize_prompt;
use crate::presentation::handlers::ApiError;
use crate::presentation::handlers::retrieve::{ChunkResponse, NO_DOCUMENT_MESSAGE};
use crate::presentation::state::AppState;

#[derive(Deserialize)]
pub struct QueryRequest {
    pub question: String,
    pub k: Option<usize>,
}

#[derive(Serialize)]
pub struct QueryResponse {
    pub answer: Option<String>,
    pub sources: Vec<ChunkResponse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[tracing::instrument(skip(state, request))]
pub async fn query_handler(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(request): Json<QueryRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let handle = state.session(SessionId::from_uuid(session_id)).await?;
    let session = handle.lock().await;

    tracing::debug!(question = %sanitize_prompt(&request.question), "Processing query");

    let response = state
        .generation_service
        .answer(&session, &request.question, request.k)
        .await?;

    tracing::info!(sources_count = response.sources.len(), "Query successful");

    let message = response
        .answer
        .is_none()
        .then(|| NO_DOCUMENT_MESSAGE.to_string());

    Ok(Json(QueryResponse {
        answer: response.answer,
        sources: response.sources.into_iter().map(ChunkResponse::from).collect(),
        message,
    }))
}
