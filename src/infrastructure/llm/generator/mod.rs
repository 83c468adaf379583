mod generator_factory;
mod mock_generator;
mod ollama_generator;
mod openai_generator;

pub use generator_factory::{GeneratorFactory, GeneratorFactoryError};
pub use mock_generator::MockGenerator;
pub use ollama_generator::{DEFAULT_OLLAMA_GENERATION_MODEL, OllamaGenerator};
pub use openai_generator::OpenAiGenerator;
