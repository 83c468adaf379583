use axum::Json;
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use serde::Serialize;
use uuid::Uuid;

use crate::domain::SessionId;
use crate::presentation::handlers::ApiError;
use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct SummaryResponse {
    pub summary: String,
}

#[tracing::instrument(skip(state))]
pub async fn summary_handler(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let handle = state.session(SessionId::from_uuid(session_id)).await?;
    let session = handle.lock().await;

    let summary = state.generation_service.summarize(&session).await?;

    Ok(Json(SummaryResponse { summary }))
}
