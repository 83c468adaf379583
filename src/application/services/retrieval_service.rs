use std::sync::Arc;

use crate::application::ports::{Embedder, EmbedderError};
use crate::domain::{IndexError, ScoredChunk, VectorIndex};

pub const DEFAULT_TOP_K: usize = 3;

/// Ranks the chunks of an index against a free-text query.
///
/// The embedder must be the one the index was built with; a mismatch is only
/// detected when it changes the vector dimensionality.
pub struct RetrievalService {
    embedder: Arc<dyn Embedder>,
    top_k: usize,
}

impl RetrievalService {
    pub fn new(embedder: Arc<dyn Embedder>, top_k: usize) -> Self {
        Self { embedder, top_k }
    }

    pub fn top_k(&self) -> usize {
        self.top_k
    }

    /// Returns at most `k` chunks, most similar first. An empty index yields an
    /// empty result without calling the embedder.
    pub async fn retrieve(
        &self,
        query: &str,
        index: &VectorIndex,
        k: usize,
    ) -> Result<Vec<ScoredChunk>, RetrievalError> {
        if k == 0 {
            return Err(RetrievalError::InvalidTopK);
        }

        if index.is_empty() {
            tracing::debug!("Retrieval against empty index");
            return Ok(Vec::new());
        }

        let query_embedding = self
            .embedder
            .embed(query)
            .await
            .map_err(RetrievalError::Embedding)?;

        let results = index
            .rank(&query_embedding, k)
            .map_err(RetrievalError::DimensionMismatch)?;

        tracing::debug!(
            candidates = index.len(),
            returned = results.len(),
            top_score = results.first().map(|r| r.score).unwrap_or_default(),
            "Retrieval complete"
        );

        Ok(results)
    }

    pub async fn retrieve_default(
        &self,
        query: &str,
        index: &VectorIndex,
    ) -> Result<Vec<ScoredChunk>, RetrievalError> {
        self.retrieve(query, index, self.top_k).await
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RetrievalError {
    #[error("k must be at least 1")]
    InvalidTopK,
    #[error("embedding: {0}")]
    Embedding(EmbedderError),
    #[error("query/index dimension mismatch: {0}")]
    DimensionMismatch(IndexError),
}
