mod embedder_factory;
mod mock_embedder;
mod ollama_embedder;
mod openai_embedder;

pub use embedder_factory::{EmbedderFactory, EmbedderFactoryError};
pub use mock_embedder::{MOCK_EMBEDDING_DIMENSIONS, MockEmbedder};
pub use ollama_embedder::{DEFAULT_OLLAMA_EMBEDDING_MODEL, DEFAULT_OLLAMA_URL, OllamaEmbedder};
pub use openai_embedder::{DEFAULT_OPENAI_URL, OpenAiEmbedder};
