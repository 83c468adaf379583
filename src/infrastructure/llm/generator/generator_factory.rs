use std::sync::Arc;

use crate::application::ports::Generator;
use crate::infrastructure::llm::embedder::{DEFAULT_OLLAMA_URL, DEFAULT_OPENAI_URL};
use crate::presentation::config::{GenerationProvider, GenerationSettings};

use super::{MockGenerator, OllamaGenerator, OpenAiGenerator};

pub struct GeneratorFactory;

#[derive(Debug, thiserror::Error)]
pub enum GeneratorFactoryError {
    #[error("missing API key: OpenAI generator requires generation.api_key")]
    MissingApiKey,
}

impl GeneratorFactory {
    pub fn create(
        settings: &GenerationSettings,
    ) -> Result<Arc<dyn Generator>, GeneratorFactoryError> {
        let model = settings.model.clone();
        match settings.provider {
            GenerationProvider::Ollama => {
                let base_url = settings.base_url.as_deref().unwrap_or(DEFAULT_OLLAMA_URL);
                tracing::info!(model = %model, base_url, "Using Ollama generator");
                Ok(Arc::new(OllamaGenerator::new(
                    base_url,
                    model,
                    settings.temperature,
                )))
            }
            GenerationProvider::OpenAi => {
                let key = settings
                    .api_key
                    .clone()
                    .filter(|k| !k.is_empty())
                    .ok_or(GeneratorFactoryError::MissingApiKey)?;
                let base_url = settings.base_url.as_deref().unwrap_or(DEFAULT_OPENAI_URL);
                tracing::info!(model = %model, base_url, "Using OpenAI-compatible generator");
                Ok(Arc::new(OpenAiGenerator::new(
                    base_url,
                    key,
                    model,
                    settings.temperature,
                )))
            }
            GenerationProvider::Mock => {
                tracing::warn!("Using mock generator");
                Ok(Arc::new(MockGenerator))
            }
        }
    }
}
