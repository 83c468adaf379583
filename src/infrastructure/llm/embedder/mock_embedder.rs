use crate::application::ports::{Embedder, EmbedderError};
use crate::domain::Embedding;

pub const MOCK_EMBEDDING_DIMENSIONS: usize = 64;

/// Offline embedder: a bag-of-characters histogram hashed into a fixed number
/// of buckets. Texts sharing characters score higher, which is enough for
/// scaffold mode and tests.
pub struct MockEmbedder {
    dimensions: usize,
}

impl MockEmbedder {
    pub fn new(dimensions: usize) -> Self {
        Self {
            dimensions: dimensions.max(1),
        }
    }

    fn vectorize(&self, text: &str) -> Embedding {
        let mut values = vec![0.0; self.dimensions];
        for ch in text.chars().flat_map(char::to_lowercase) {
            if ch.is_alphanumeric() {
                values[ch as usize % self.dimensions] += 1.0;
            }
        }
        Embedding::new(values)
    }
}

impl Default for MockEmbedder {
    fn default() -> Self {
        Self::new(MOCK_EMBEDDING_DIMENSIONS)
    }
}

#[async_trait::async_trait]
impl Embedder for MockEmbedder {
    async fn embed(&self, text: &str) -> Result<Embedding, EmbedderError> {
        Ok(self.vectorize(text))
    }

    async fn embed_batch(&self, texts: &[&str]) -> Result<Vec<Embedding>, EmbedderError> {
        Ok(texts.iter().map(|t| self.vectorize(t)).collect())
    }
}
