use std::cmp::Ordering;

use super::{Chunk, Embedding};

/// Chunks and their embeddings held side by side; `chunks[i]` pairs with
/// `embeddings[i]`.
///
/// Every embedding has the same non-zero dimensionality. The index is built
/// once per document and never updated in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VectorIndex {
    chunks: Vec<Chunk>,
    embeddings: Vec<Embedding>,
    dimensions: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScoredChunk {
    pub chunk: Chunk,
    pub score: f32,
}

impl VectorIndex {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Pairs chunks with embeddings after checking the embedder kept its contract.
    pub fn from_parts(chunks: Vec<Chunk>, embeddings: Vec<Embedding>) -> Result<Self, IndexError> {
        if chunks.len() != embeddings.len() {
            return Err(IndexError::CountMismatch {
                chunks: chunks.len(),
                embeddings: embeddings.len(),
            });
        }

        let Some(first) = embeddings.first() else {
            return Ok(Self::empty());
        };

        let dimensions = first.dimensions();
        if dimensions == 0 {
            return Err(IndexError::ZeroDimensions);
        }

        if let Some((position, embedding)) = embeddings
            .iter()
            .enumerate()
            .find(|(_, e)| e.dimensions() != dimensions)
        {
            return Err(IndexError::InconsistentDimensions {
                expected: dimensions,
                actual: embedding.dimensions(),
                position,
            });
        }

        Ok(Self {
            chunks,
            embeddings,
            dimensions,
        })
    }

    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    /// Shared vector dimensionality, `None` for an empty index.
    pub fn dimensions(&self) -> Option<usize> {
        (!self.is_empty()).then_some(self.dimensions)
    }

    pub fn chunks(&self) -> &[Chunk] {
        &self.chunks
    }

    pub fn embeddings(&self) -> &[Embedding] {
        &self.embeddings
    }

    /// Scores every chunk against `query` and returns the best `top_k`,
    /// highest similarity first. Equal scores keep chunk order.
    pub fn rank(&self, query: &Embedding, top_k: usize) -> Result<Vec<ScoredChunk>, IndexError> {
        if self.is_empty() || top_k == 0 {
            return Ok(Vec::new());
        }

        if query.dimensions() != self.dimensions {
            return Err(IndexError::QueryDimensionMismatch {
                index: self.dimensions,
                query: query.dimensions(),
            });
        }

        let mut scored: Vec<(usize, f32)> = self
            .embeddings
            .iter()
            .map(|embedding| {
                let score = embedding.cosine_similarity(query);
                // NaN ranks last.
                if score.is_nan() {
                    f32::NEG_INFINITY
                } else {
                    score
                }
            })
            .enumerate()
            .collect();

        // Vec::sort_by is stable, so ties stay in ordinal order.
        scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
        scored.truncate(top_k);

        Ok(scored
            .into_iter()
            .map(|(position, score)| ScoredChunk {
                chunk: self.chunks[position].clone(),
                score,
            })
            .collect())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IndexError {
    #[error("embedder returned {embeddings} vectors for {chunks} chunks")]
    CountMismatch { chunks: usize, embeddings: usize },
    #[error("embedder returned zero-length vectors")]
    ZeroDimensions,
    #[error("vector {position} has {actual} dimensions, expected {expected}")]
    InconsistentDimensions {
        expected: usize,
        actual: usize,
        position: usize,
    },
    #[error("query vector has {query} dimensions but the index holds {index}")]
    QueryDimensionMismatch { index: usize, query: usize },
}
