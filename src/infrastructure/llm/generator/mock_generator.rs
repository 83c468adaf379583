use crate::application::ports::{Generator, GeneratorError};

/// Answers every prompt with a fixed string.
pub struct MockGenerator;

#[async_trait::async_trait]
impl Generator for MockGenerator {
    async fn generate(
        &self,
        _prompt: &str,
        _max_output_length: usize,
    ) -> Result<String, GeneratorError> {
        Ok("Mock answer".to_string())
    }
}
