use std::sync::Arc;

use crate::application::ports::{Generator, GeneratorError};
use crate::domain::{ScoredChunk, Session};

use super::prompt_template::{DEFAULT_TONE, PromptTemplates};
use super::retrieval_service::{RetrievalError, RetrievalService};

pub const DEFAULT_MAX_NEW_TOKENS: usize = 256;
pub const DEFAULT_SUMMARY_PREFIX_CHARS: usize = 2000;

/// Question answering, summarization and rewriting on top of a session.
pub struct GenerationService<G: ?Sized>
where
    G: Generator,
{
    retrieval_service: Arc<RetrievalService>,
    generator: Arc<G>,
    templates: PromptTemplates,
    max_new_tokens: usize,
    summary_prefix_chars: usize,
}

impl<G: ?Sized> GenerationService<G>
where
    G: Generator,
{
    pub fn new(
        retrieval_service: Arc<RetrievalService>,
        generator: Arc<G>,
        templates: PromptTemplates,
        max_new_tokens: usize,
        summary_prefix_chars: usize,
    ) -> Self {
        Self {
            retrieval_service,
            generator,
            templates,
            max_new_tokens,
            summary_prefix_chars,
        }
    }

    /// Retrieves context for `question` and asks the generator to answer from
    /// it. With nothing indexed the generator is skipped and `answer` is `None`.
    pub async fn answer(
        &self,
        session: &Session,
        question: &str,
        k: Option<usize>,
    ) -> Result<AnswerResponse, GenerationError> {
        let question = question.trim();
        if question.is_empty() {
            return Err(GenerationError::EmptyInput("question"));
        }

        let k = k.unwrap_or(self.retrieval_service.top_k());
        let results = self
            .retrieval_service
            .retrieve(question, session.index(), k)
            .await
            .map_err(GenerationError::Retrieval)?;

        if results.is_empty() {
            tracing::info!("No indexed context for question");
            return Ok(AnswerResponse {
                answer: None,
                sources: Vec::new(),
            });
        }

        let context = results
            .iter()
            .map(|r| r.chunk.text.as_str())
            .collect::<Vec<_>>()
            .join("\n");

        let prompt = self.templates.answer_prompt(&context, question);
        let answer = self
            .generator
            .generate(&prompt, self.max_new_tokens)
            .await
            .map_err(GenerationError::Generator)?;

        Ok(AnswerResponse {
            answer: Some(answer),
            sources: results.into_iter().map(SourceChunk::from).collect(),
        })
    }

    /// Summarizes the leading part of the session's document.
    pub async fn summarize(&self, session: &Session) -> Result<String, GenerationError> {
        let document = session.document().ok_or(GenerationError::NoDocument)?;
        let (prefix, truncated) = document.prefix(self.summary_prefix_chars);

        tracing::debug!(
            document_id = %document.id.as_uuid(),
            prefix_chars = prefix.chars().count(),
            truncated,
            "Summarizing document"
        );

        let prompt = self.templates.summary_prompt(prefix, truncated);
        self.generator
            .generate(&prompt, self.max_new_tokens)
            .await
            .map_err(GenerationError::Generator)
    }

    /// Rewrites user text in the requested tone. Needs no document.
    pub async fn rewrite(&self, text: &str, tone: Option<&str>) -> Result<String, GenerationError> {
        if text.trim().is_empty() {
            return Err(GenerationError::EmptyInput("text"));
        }

        let tone = tone
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .unwrap_or(DEFAULT_TONE);

        let prompt = self.templates.rewrite_prompt(text, tone);
        self.generator
            .generate(&prompt, self.max_new_tokens)
            .await
            .map_err(GenerationError::Generator)
    }
}

#[derive(Debug, Clone)]
pub struct AnswerResponse {
    pub answer: Option<String>,
    pub sources: Vec<SourceChunk>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SourceChunk {
    pub index: usize,
    pub offset: usize,
    pub text: String,
    pub score: f32,
}

impl From<ScoredChunk> for SourceChunk {
    fn from(scored: ScoredChunk) -> Self {
        Self {
            index: scored.chunk.index,
            offset: scored.chunk.offset,
            text: scored.chunk.text,
            score: scored.score,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    #[error("{0} must not be empty")]
    EmptyInput(&'static str),
    #[error("no document has been uploaded")]
    NoDocument,
    #[error("retrieval: {0}")]
    Retrieval(RetrievalError),
    #[error("generation: {0}")]
    Generator(GeneratorError),
}
