use std::sync::Arc;

use docent::application::ports::EmbedderError;
use docent::application::services::{DEFAULT_TOP_K, RetrievalError, RetrievalService};
use docent::domain::{Chunk, Embedding, IndexError, VectorIndex};

use crate::support::{TableEmbedder, UnavailableEmbedder};

fn index_of(entries: &[(&str, [f32; 2])]) -> VectorIndex {
    let chunks = entries
        .iter()
        .enumerate()
        .map(|(i, (text, _))| Chunk::new(i, i * 100, text.to_string()))
        .collect();
    let embeddings = entries
        .iter()
        .map(|(_, v)| Embedding::new(v.to_vec()))
        .collect();
    VectorIndex::from_parts(chunks, embeddings).unwrap()
}

fn fruit_index() -> VectorIndex {
    index_of(&[
        ("apples are red", [1.0, 0.0]),
        ("bananas are yellow", [0.0, 1.0]),
        ("cherries are red too", [0.9, 0.1]),
    ])
}

#[tokio::test]
async fn given_known_vectors_when_retrieving_then_most_similar_chunk_is_first() {
    let embedder = Arc::new(TableEmbedder::new(&[("red fruit", vec![1.0, 0.0])], vec![0.0, 0.0]));
    let service = RetrievalService::new(embedder, DEFAULT_TOP_K);

    let results = service.retrieve("red fruit", &fruit_index(), 2).await.unwrap();

    let texts: Vec<&str> = results.iter().map(|r| r.chunk.text.as_str()).collect();
    assert_eq!(texts, vec!["apples are red", "cherries are red too"]);
}

#[tokio::test]
async fn given_same_query_when_retrieving_twice_then_results_match() {
    let embedder = Arc::new(TableEmbedder::new(&[], vec![0.4, 0.6]));
    let service = RetrievalService::new(embedder, DEFAULT_TOP_K);
    let index = fruit_index();

    let first = service.retrieve("anything", &index, 3).await.unwrap();
    let second = service.retrieve("anything", &index, 3).await.unwrap();

    assert_eq!(first, second);
}

#[tokio::test]
async fn given_empty_index_when_retrieving_then_returns_empty_without_embedding() {
    let embedder = Arc::new(TableEmbedder::new(&[], vec![1.0, 0.0]));
    let service = RetrievalService::new(embedder.clone(), DEFAULT_TOP_K);

    let results = service
        .retrieve("question", &VectorIndex::empty(), 3)
        .await
        .unwrap();

    assert!(results.is_empty());
    assert_eq!(embedder.calls(), 0);
}

#[tokio::test]
async fn given_k_larger_than_index_when_retrieving_then_returns_all_chunks_ranked() {
    let embedder = Arc::new(TableEmbedder::new(&[], vec![0.0, 1.0]));
    let service = RetrievalService::new(embedder, DEFAULT_TOP_K);

    let results = service.retrieve("yellow", &fruit_index(), 10).await.unwrap();

    assert_eq!(results.len(), 3);
    assert_eq!(results[0].chunk.text, "bananas are yellow");
}

#[tokio::test]
async fn given_zero_k_when_retrieving_then_returns_invalid_top_k() {
    let embedder = Arc::new(TableEmbedder::new(&[], vec![1.0, 0.0]));
    let service = RetrievalService::new(embedder, DEFAULT_TOP_K);

    let result = service.retrieve("question", &fruit_index(), 0).await;

    assert!(matches!(result, Err(RetrievalError::InvalidTopK)));
}

#[tokio::test]
async fn given_query_vector_of_other_dimension_when_retrieving_then_fails() {
    let embedder = Arc::new(TableEmbedder::new(&[], vec![1.0, 0.0, 0.0]));
    let service = RetrievalService::new(embedder, DEFAULT_TOP_K);

    let result = service.retrieve("question", &fruit_index(), 3).await;

    assert!(matches!(
        result,
        Err(RetrievalError::DimensionMismatch(
            IndexError::QueryDimensionMismatch { index: 2, query: 3 }
        ))
    ));
}

#[tokio::test]
async fn given_query_vector_of_other_dimension_when_retrieving_then_message_names_the_mismatch() {
    let embedder = Arc::new(TableEmbedder::new(&[], vec![1.0, 0.0, 0.0]));
    let service = RetrievalService::new(embedder, DEFAULT_TOP_K);

    let error = service
        .retrieve("question", &fruit_index(), 3)
        .await
        .unwrap_err();

    assert_eq!(
        error.to_string(),
        "query/index dimension mismatch: query vector has 3 dimensions but the index holds 2"
    );
}

#[tokio::test]
async fn given_unavailable_embedder_when_retrieving_then_error_is_propagated() {
    let service = RetrievalService::new(Arc::new(UnavailableEmbedder), DEFAULT_TOP_K);

    let result = service.retrieve("question", &fruit_index(), 3).await;

    assert!(matches!(
        result,
        Err(RetrievalError::Embedding(EmbedderError::Unavailable(_)))
    ));
}

#[tokio::test]
async fn given_configured_top_k_when_retrieving_default_then_limits_results() {
    let embedder = Arc::new(TableEmbedder::new(&[], vec![1.0, 1.0]));
    let service = RetrievalService::new(embedder, 1);

    let results = service.retrieve_default("q", &fruit_index()).await.unwrap();

    assert_eq!(results.len(), 1);
}
