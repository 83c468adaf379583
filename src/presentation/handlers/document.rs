use axum::Json;
use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;
use uuid::Uuid;

use crate::domain::{ContentType, SessionId, Upload};
use crate::presentation::handlers::ApiError;
use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct UploadResponse {
    pub document_id: String,
    pub filename: String,
    pub characters: usize,
    pub chunks: usize,
    pub dimensions: Option<usize>,
}

/// Replaces the session's document with the uploaded file and rebuilds its
/// index. The session lock is held for the whole build, so queries on this
/// session wait for it.
#[tracing::instrument(skip(state, multipart))]
pub async fn upload_document_handler(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, ApiError> {
    let session_id = SessionId::from_uuid(session_id);
    let handle = state.session(session_id).await?;

    // Plain form fields may precede the file part.
    let field = loop {
        let field = multipart
            .next_field()
            .await
            .map_err(|e| ApiError::bad_request(format!("Failed to read multipart: {e}")))?
            .ok_or_else(|| ApiError::bad_request("No file uploaded"))?;
        if field.file_name().is_some() {
            break field;
        }
        tracing::debug!(field = ?field.name(), "Skipping non-file multipart field");
    };

    let filename = field.file_name().unwrap_or_default().to_string();
    let mime = field.content_type().map(str::to_string);

    tracing::debug!(filename = %filename, content_type = ?mime, "Processing file upload");

    let content_type = ContentType::detect(mime.as_deref(), &filename).ok_or_else(|| {
        ApiError::new(
            StatusCode::UNSUPPORTED_MEDIA_TYPE,
            format!(
                "Unsupported file type: {} ({filename}). Upload a PDF or TXT file.",
                mime.as_deref().unwrap_or("unknown")
            ),
        )
    })?;

    let data = field
        .bytes()
        .await
        .map_err(|e| ApiError::bad_request(format!("Failed to read file: {e}")))?;

    tracing::debug!(bytes = data.len(), "File data received");

    let upload = Upload::new(filename.clone(), content_type, data.len() as u64);

    let mut session = handle.lock().await;
    let document_id = state
        .indexing_service
        .ingest_into(&mut session, &data, upload)
        .await?;

    let characters = session.document().map(|d| d.char_len()).unwrap_or_default();
    let index = session.index();

    tracing::info!(
        session_id = %session_id,
        document_id = %document_id.as_uuid(),
        chunks = index.len(),
        "Document ready for questions"
    );

    Ok((
        StatusCode::CREATED,
        Json(UploadResponse {
            document_id: document_id.as_uuid().to_string(),
            filename,
            characters,
            chunks: index.len(),
            dimensions: index.dimensions(),
        }),
    ))
}
