use std::sync::Arc;

use crate::application::ports::{Generator, SessionHandle, SessionStore, TextSplitter};
use crate::application::services::{GenerationService, IndexingService, RetrievalService};
use crate::domain::SessionId;
use crate::presentation::config::Settings;
use crate::presentation::handlers::ApiError;

#[derive(Clone)]
pub struct AppState {
    pub indexing_service: Arc<IndexingService<dyn TextSplitter>>,
    pub retrieval_service: Arc<RetrievalService>,
    pub generation_service: Arc<GenerationService<dyn Generator>>,
    pub session_store: Arc<dyn SessionStore>,
    pub settings: Settings,
}

impl AppState {
    pub async fn session(&self, id: SessionId) -> Result<SessionHandle, ApiError> {
        self.session_store
            .get(id)
            .await?
            .ok_or_else(|| ApiError::session_not_found(id))
    }
}
