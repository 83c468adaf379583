use std::sync::Arc;

use crate::application::ports::Embedder;
use crate::presentation::config::{EmbeddingProvider, EmbeddingsSettings};

use super::ollama_embedder::DEFAULT_OLLAMA_URL;
use super::openai_embedder::DEFAULT_OPENAI_URL;
use super::{MockEmbedder, OllamaEmbedder, OpenAiEmbedder};

pub struct EmbedderFactory;

#[derive(Debug, thiserror::Error)]
pub enum EmbedderFactoryError {
    #[error("missing API key: OpenAI embedder requires embeddings.api_key")]
    MissingApiKey,
}

impl EmbedderFactory {
    pub fn create(settings: &EmbeddingsSettings) -> Result<Arc<dyn Embedder>, EmbedderFactoryError> {
        let model = settings.model.clone();
        match settings.provider {
            EmbeddingProvider::Ollama => {
                let base_url = settings.base_url.as_deref().unwrap_or(DEFAULT_OLLAMA_URL);
                tracing::info!(model = %model, base_url, "Using Ollama embedder");
                Ok(Arc::new(OllamaEmbedder::new(base_url, model)))
            }
            EmbeddingProvider::OpenAi => {
                let key = settings
                    .api_key
                    .clone()
                    .filter(|k| !k.is_empty())
                    .ok_or(EmbedderFactoryError::MissingApiKey)?;
                let base_url = settings.base_url.as_deref().unwrap_or(DEFAULT_OPENAI_URL);
                tracing::info!(model = %model, base_url, "Using OpenAI-compatible embedder");
                Ok(Arc::new(OpenAiEmbedder::new(base_url, key, model)))
            }
            EmbeddingProvider::Mock => {
                tracing::warn!("Using mock embedder");
                Ok(Arc::new(MockEmbedder::default()))
            }
        }
    }
}
