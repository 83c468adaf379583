use async_trait::async_trait;

#[async_trait]
pub trait Generator: Send + Sync {
    /// Produces text for a fully assembled prompt. `max_output_length` is the
    /// provider's output token budget.
    async fn generate(
        &self,
        prompt: &str,
        max_output_length: usize,
    ) -> Result<String, GeneratorError>;
}

#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    #[error("generator unavailable: {0}")]
    Unavailable(String),
    #[error("generation rate limited")]
    RateLimited,
    #[error("invalid generation response: {0}")]
    InvalidResponse(String),
}
