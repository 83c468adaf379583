use std::sync::Arc;

use docent::application::ports::GeneratorError;
use docent::application::services::{
    DEFAULT_MAX_NEW_TOKENS, DEFAULT_TOP_K, GenerationError, GenerationService, PromptTemplates,
    RetrievalService,
};
use docent::domain::{Chunk, ContentType, Document, Embedding, Session, VectorIndex};

use crate::support::{RecordingGenerator, TableEmbedder, UnavailableGenerator};

const SUMMARY_PREFIX_CHARS: usize = 20;

fn retrieval(query_vector: Vec<f32>) -> Arc<RetrievalService> {
    Arc::new(RetrievalService::new(
        Arc::new(TableEmbedder::new(&[], query_vector)),
        DEFAULT_TOP_K,
    ))
}

fn service_with(
    generator: Arc<RecordingGenerator>,
    query_vector: Vec<f32>,
) -> GenerationService<RecordingGenerator> {
    GenerationService::new(
        retrieval(query_vector),
        generator,
        PromptTemplates::default(),
        DEFAULT_MAX_NEW_TOKENS,
        SUMMARY_PREFIX_CHARS,
    )
}

fn session_with(text: &str, entries: &[(&str, [f32; 2])]) -> Session {
    let chunks = entries
        .iter()
        .enumerate()
        .map(|(i, (t, _))| Chunk::new(i, i * 10, t.to_string()))
        .collect();
    let embeddings = entries
        .iter()
        .map(|(_, v)| Embedding::new(v.to_vec()))
        .collect();
    let mut session = Session::new();
    session.replace_document(
        Document::new("notes.txt".to_string(), ContentType::Text, text.to_string()),
        VectorIndex::from_parts(chunks, embeddings).unwrap(),
    );
    session
}

#[tokio::test]
async fn given_indexed_session_when_answering_then_prompt_holds_retrieved_context_in_rank_order() {
    let generator = Arc::new(RecordingGenerator::new("Paris"));
    let service = service_with(generator.clone(), vec![1.0, 0.0]);
    let session = session_with(
        "irrelevant",
        &[
            ("Berlin is in Germany.", [0.0, 1.0]),
            ("Paris is the capital of France.", [1.0, 0.0]),
            ("France borders Spain.", [0.8, 0.2]),
        ],
    );

    let response = service
        .answer(&session, "  What is the capital of France?  ", Some(2))
        .await
        .unwrap();

    assert_eq!(response.answer.as_deref(), Some("Paris"));
    assert_eq!(response.sources.len(), 2);
    assert_eq!(response.sources[0].index, 1);

    let prompts = generator.prompts();
    assert_eq!(prompts.len(), 1);
    let (prompt, max_tokens) = &prompts[0];
    assert!(prompt.contains("Paris is the capital of France.\nFrance borders Spain."));
    assert!(prompt.contains("Question: What is the capital of France?"));
    assert!(!prompt.contains("Berlin"));
    assert_eq!(*max_tokens, DEFAULT_MAX_NEW_TOKENS);
}

#[tokio::test]
async fn given_empty_session_when_answering_then_generator_is_not_called() {
    let generator = Arc::new(RecordingGenerator::new("unused"));
    let service = service_with(generator.clone(), vec![1.0, 0.0]);

    let response = service.answer(&Session::new(), "anything?", None).await.unwrap();

    assert!(response.answer.is_none());
    assert!(response.sources.is_empty());
    assert!(generator.prompts().is_empty());
}

#[tokio::test]
async fn given_blank_question_when_answering_then_returns_empty_input() {
    let generator = Arc::new(RecordingGenerator::new("unused"));
    let service = service_with(generator, vec![1.0, 0.0]);

    let result = service.answer(&Session::new(), "   ", None).await;

    assert!(matches!(result, Err(GenerationError::EmptyInput("question"))));
}

#[tokio::test]
async fn given_zero_k_when_answering_then_returns_retrieval_error() {
    let generator = Arc::new(RecordingGenerator::new("unused"));
    let service = service_with(generator, vec![1.0, 0.0]);
    let session = session_with("text", &[("text", [1.0, 0.0])]);

    let result = service.answer(&session, "question", Some(0)).await;

    assert!(matches!(result, Err(GenerationError::Retrieval(_))));
}

#[tokio::test]
async fn given_unavailable_generator_when_answering_then_error_is_surfaced() {
    let service = GenerationService::new(
        retrieval(vec![1.0, 0.0]),
        Arc::new(UnavailableGenerator),
        PromptTemplates::default(),
        DEFAULT_MAX_NEW_TOKENS,
        SUMMARY_PREFIX_CHARS,
    );
    let session = session_with("text", &[("text", [1.0, 0.0])]);

    let result = service.answer(&session, "question", None).await;

    assert!(matches!(
        result,
        Err(GenerationError::Generator(GeneratorError::Unavailable(_)))
    ));
}

#[tokio::test]
async fn given_long_document_when_summarizing_then_prompt_uses_truncated_prefix() {
    let generator = Arc::new(RecordingGenerator::new("A summary."));
    let service = service_with(generator.clone(), vec![1.0, 0.0]);
    let session = session_with(
        "0123456789abcdefghijTHIS PART IS CUT",
        &[("0123456789", [1.0, 0.0])],
    );

    let summary = service.summarize(&session).await.unwrap();

    assert_eq!(summary, "A summary.");
    let (prompt, _) = &generator.prompts()[0];
    assert!(prompt.ends_with("0123456789abcdefghij..."));
    assert!(!prompt.contains("CUT"));
}

#[tokio::test]
async fn given_short_document_when_summarizing_then_prompt_has_no_ellipsis() {
    let generator = Arc::new(RecordingGenerator::new("ok"));
    let service = service_with(generator.clone(), vec![1.0, 0.0]);
    let session = session_with("brief", &[("brief", [1.0, 0.0])]);

    service.summarize(&session).await.unwrap();

    let (prompt, _) = &generator.prompts()[0];
    assert!(prompt.ends_with("brief"));
}

#[tokio::test]
async fn given_no_document_when_summarizing_then_returns_no_document() {
    let generator = Arc::new(RecordingGenerator::new("unused"));
    let service = service_with(generator.clone(), vec![1.0, 0.0]);

    let result = service.summarize(&Session::new()).await;

    assert!(matches!(result, Err(GenerationError::NoDocument)));
    assert!(generator.prompts().is_empty());
}

#[tokio::test]
async fn given_text_without_tone_when_rewriting_then_uses_default_tone() {
    let generator = Arc::new(RecordingGenerator::new("Rewritten."));
    let service = service_with(generator.clone(), vec![1.0, 0.0]);

    let rewritten = service.rewrite("gonna be late lol", None).await.unwrap();

    assert_eq!(rewritten, "Rewritten.");
    let (prompt, _) = &generator.prompts()[0];
    assert!(prompt.contains("more natural but formal"));
    assert!(prompt.contains("gonna be late lol"));
}

#[tokio::test]
async fn given_explicit_tone_when_rewriting_then_prompt_uses_it() {
    let generator = Arc::new(RecordingGenerator::new("Rewritten."));
    let service = service_with(generator.clone(), vec![1.0, 0.0]);

    service.rewrite("hello there", Some("playful")).await.unwrap();

    let (prompt, _) = &generator.prompts()[0];
    assert!(prompt.contains("playful tone"));
}

#[tokio::test]
async fn given_blank_text_when_rewriting_then_returns_empty_input() {
    let generator = Arc::new(RecordingGenerator::new("unused"));
    let service = service_with(generator, vec![1.0, 0.0]);

    let result = service.rewrite("\n\t ", Some("formal")).await;

    assert!(matches!(result, Err(GenerationError::EmptyInput("text"))));
}
