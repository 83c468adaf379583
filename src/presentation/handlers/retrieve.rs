use axum::Json;
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::application::services::SourceChunk;
use crate::domain::SessionId;
use crate::infrastructure::observability::sanitize_prompt;
use crate::presentation::handlers::ApiError;
use crate::presentation::state::AppState;

pub const NO_DOCUMENT_MESSAGE: &str = "No document indexed yet. Please upload a document.";

#[derive(Deserialize)]
pub struct RetrieveRequest {
    pub query: String,
    pub k: Option<usize>,
}

#[derive(Serialize)]
pub struct RetrieveResponse {
    pub chunks: Vec<ChunkResponse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Serialize)]
pub struct ChunkResponse {
    pub index: usize,
    pub offset: usize,
    pub text: String,
    pub score: f32,
}

impl From<SourceChunk> for ChunkResponse {
    fn from(source: SourceChunk) -> Self {
        Self {
            index: source.index,
            offset: source.offset,
            text: source.text,
            score: source.score,
        }
    }
}

#[tracing::instrument(skip(state, request))]
pub async fn retrieve_handler(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(request): Json<RetrieveRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let handle = state.session(SessionId::from_uuid(session_id)).await?;
    let session = handle.lock().await;

    tracing::debug!(query = %sanitize_prompt(&request.query), "Processing retrieval");

    let k = request.k.unwrap_or(state.retrieval_service.top_k());
    let results = state
        .retrieval_service
        .retrieve(&request.query, session.index(), k)
        .await?;

    let message = session
        .index()
        .is_empty()
        .then(|| NO_DOCUMENT_MESSAGE.to_string());

    Ok(Json(RetrieveResponse {
        chunks: results
            .into_iter()
            .map(|r| ChunkResponse::from(SourceChunk::from(r)))
            .collect(),
        message,
    }))
}
