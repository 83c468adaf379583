pub mod embedder;
pub mod generator;

pub use embedder::{
    EmbedderFactory, EmbedderFactoryError, MockEmbedder, OllamaEmbedder, OpenAiEmbedder,
};
pub use generator::{
    GeneratorFactory, GeneratorFactoryError, MockGenerator, OllamaGenerator, OpenAiGenerator,
};
