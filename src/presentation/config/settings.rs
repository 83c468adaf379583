use std::time::Duration;

use config::{Config, ConfigError, File};
use serde::Deserialize;

use crate::application::services::{
    DEFAULT_MAX_NEW_TOKENS, DEFAULT_SUMMARY_LANGUAGE, DEFAULT_SUMMARY_PREFIX_CHARS, DEFAULT_TOP_K,
};
use crate::domain::{
    ChunkingConfig, ChunkingConfigError, DEFAULT_CHUNK_OVERLAP, DEFAULT_CHUNK_SIZE,
};
use crate::infrastructure::llm::embedder::DEFAULT_OLLAMA_EMBEDDING_MODEL;
use crate::infrastructure::llm::generator::DEFAULT_OLLAMA_GENERATION_MODEL;

use super::Environment;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub server: ServerSettings,
    pub chunking: ChunkingSettings,
    pub retrieval: RetrievalSettings,
    pub embeddings: EmbeddingsSettings,
    pub generation: GenerationSettings,
    pub sessions: SessionSettings,
    pub logging: LoggingSettings,
}

impl Settings {
    /// Layers `appsettings.{environment}` (optional) under `APP_*` variables,
    /// e.g. `APP_CHUNKING__CHUNK_SIZE=400`.
    pub fn load(environment: Environment) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(
                File::with_name(&format!(
                    "appsettings.{}",
                    environment.as_str().to_lowercase()
                ))
                .required(false),
            )
            .add_source(
                config::Environment::with_prefix("APP")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }

    pub fn chunking_config(&self) -> Result<ChunkingConfig, ChunkingConfigError> {
        ChunkingConfig::new(self.chunking.chunk_size, self.chunking.overlap)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub max_upload_mb: usize,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            max_upload_mb: 20,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ChunkingSettings {
    pub chunk_size: usize,
    pub overlap: usize,
}

impl Default for ChunkingSettings {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            overlap: DEFAULT_CHUNK_OVERLAP,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RetrievalSettings {
    pub top_k: usize,
}

impl Default for RetrievalSettings {
    fn default() -> Self {
        Self {
            top_k: DEFAULT_TOP_K,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmbeddingProvider {
    Ollama,
    #[serde(rename = "openai")]
    OpenAi,
    Mock,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EmbeddingsSettings {
    pub provider: EmbeddingProvider,
    pub model: String,
    pub base_url: Option<String>,
    pub api_key: Option<String>,
}

impl Default for EmbeddingsSettings {
    fn default() -> Self {
        Self {
            provider: EmbeddingProvider::Ollama,
            model: DEFAULT_OLLAMA_EMBEDDING_MODEL.to_string(),
            base_url: None,
            api_key: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GenerationProvider {
    Ollama,
    #[serde(rename = "openai")]
    OpenAi,
    Mock,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GenerationSettings {
    pub provider: GenerationProvider,
    pub model: String,
    pub base_url: Option<String>,
    pub api_key: Option<String>,
    pub max_new_tokens: usize,
    pub temperature: Option<f32>,
    pub summary_prefix_chars: usize,
    /// Output language requested in summary prompts; blank leaves it to the model.
    pub summary_language: String,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            provider: GenerationProvider::Ollama,
            model: DEFAULT_OLLAMA_GENERATION_MODEL.to_string(),
            base_url: None,
            api_key: None,
            max_new_tokens: DEFAULT_MAX_NEW_TOKENS,
            temperature: None,
            summary_prefix_chars: DEFAULT_SUMMARY_PREFIX_CHARS,
            summary_language: DEFAULT_SUMMARY_LANGUAGE.to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SessionSettings {
    pub max_sessions: usize,
    /// Seconds a session may go unused before it is evicted; 0 keeps sessions
    /// until they are deleted.
    pub idle_ttl_secs: u64,
    pub sweep_interval_secs: u64,
}

impl SessionSettings {
    pub fn idle_ttl(&self) -> Option<Duration> {
        (self.idle_ttl_secs > 0).then(|| Duration::from_secs(self.idle_ttl_secs))
    }

    pub fn sweep_interval(&self) -> Duration {
        Duration::from_secs(self.sweep_interval_secs.max(1))
    }
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            max_sessions: 1024,
            idle_ttl_secs: 3600,
            sweep_interval_secs: 60,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    pub json_format: bool,
}
