use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::application::ports::{SessionStoreError, TextExtractorError, TextSplitterError};
use crate::application::services::{GenerationError, IndexingError, RetrievalError};
use crate::domain::SessionId;

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// An error already mapped to the status code the client sees.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn session_not_found(id: SessionId) -> Self {
        Self::new(StatusCode::NOT_FOUND, format!("Session not found: {id}"))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            tracing::error!(status = %self.status, error = %self.message, "Request failed");
        } else {
            tracing::warn!(status = %self.status, error = %self.message, "Request rejected");
        }

        (
            self.status,
            Json(ErrorResponse {
                error: self.message,
            }),
        )
            .into_response()
    }
}

impl From<IndexingError> for ApiError {
    fn from(e: IndexingError) -> Self {
        let status = match &e {
            IndexingError::Extraction(TextExtractorError::UnsupportedContentType(_)) => {
                StatusCode::UNSUPPORTED_MEDIA_TYPE
            }
            IndexingError::Extraction(TextExtractorError::ExtractionFailed(_)) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            IndexingError::Splitting(TextSplitterError::InvalidConfiguration(_)) => {
                StatusCode::BAD_REQUEST
            }
            IndexingError::Embedding(_) | IndexingError::EmbeddingContract(_) => {
                StatusCode::BAD_GATEWAY
            }
        };
        Self::new(status, format!("Indexing failed: {e}"))
    }
}

impl From<RetrievalError> for ApiError {
    fn from(e: RetrievalError) -> Self {
        let status = match &e {
            RetrievalError::InvalidTopK => StatusCode::BAD_REQUEST,
            RetrievalError::Embedding(_) | RetrievalError::DimensionMismatch(_) => {
                StatusCode::BAD_GATEWAY
            }
        };
        Self::new(status, format!("Retrieval failed: {e}"))
    }
}

impl From<GenerationError> for ApiError {
    fn from(e: GenerationError) -> Self {
        match e {
            GenerationError::Retrieval(inner) => inner.into(),
            GenerationError::EmptyInput(_) => Self::bad_request(e.to_string()),
            GenerationError::NoDocument => Self::new(
                StatusCode::CONFLICT,
                "No document uploaded. Please upload a document first.",
            ),
            GenerationError::Generator(_) => Self::new(StatusCode::BAD_GATEWAY, e.to_string()),
        }
    }
}

impl From<SessionStoreError> for ApiError {
    fn from(e: SessionStoreError) -> Self {
        let status = match &e {
            SessionStoreError::AlreadyExists(_) => StatusCode::CONFLICT,
            SessionStoreError::CapacityReached(_) => StatusCode::SERVICE_UNAVAILABLE,
        };
        Self::new(status, e.to_string())
    }
}
