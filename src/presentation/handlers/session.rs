use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;
use uuid::Uuid;

use crate::domain::{Session, SessionId};
use crate::presentation::handlers::ApiError;
use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct CreateSessionResponse {
    pub session_id: String,
}

#[derive(Serialize)]
pub struct SessionStatusResponse {
    pub session_id: String,
    pub document: Option<DocumentSummary>,
}

#[derive(Serialize)]
pub struct DocumentSummary {
    pub document_id: String,
    pub filename: String,
    pub content_type: String,
    pub characters: usize,
    pub chunks: usize,
    pub dimensions: Option<usize>,
}

#[tracing::instrument(skip(state))]
pub async fn create_session_handler(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    let session = Session::new();
    let session_id = session.id;
    state.session_store.insert(session).await?;

    tracing::info!(session_id = %session_id, "Session opened");

    Ok((
        StatusCode::CREATED,
        Json(CreateSessionResponse {
            session_id: session_id.to_string(),
        }),
    ))
}

#[tracing::instrument(skip(state))]
pub async fn session_status_handler(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let session_id = SessionId::from_uuid(session_id);
    let handle = state.session(session_id).await?;
    let session = handle.lock().await;

    let document = session.document().map(|doc| DocumentSummary {
        document_id: doc.id.as_uuid().to_string(),
        filename: doc.filename.clone(),
        content_type: doc.content_type.as_mime().to_string(),
        characters: doc.char_len(),
        chunks: session.index().len(),
        dimensions: session.index().dimensions(),
    });

    Ok(Json(SessionStatusResponse {
        session_id: session_id.to_string(),
        document,
    }))
}

#[tracing::instrument(skip(state))]
pub async fn delete_session_handler(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let session_id = SessionId::from_uuid(session_id);
    if !state.session_store.remove(session_id).await? {
        return Err(ApiError::session_not_found(session_id));
    }

    tracing::info!(session_id = %session_id, "Session closed");
    Ok(StatusCode::NO_CONTENT)
}
