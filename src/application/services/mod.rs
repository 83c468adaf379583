mod generation_service;
mod indexing_service;
mod prompt_template;
mod retrieval_service;

pub use generation_service::{
    AnswerResponse, DEFAULT_MAX_NEW_TOKENS, DEFAULT_SUMMARY_PREFIX_CHARS, GenerationError,
    GenerationService, SourceChunk,
};
pub use indexing_service::{IndexingError, IndexingService};
pub use prompt_template::{
    DEFAULT_ANSWER_TEMPLATE, DEFAULT_REWRITE_TEMPLATE, DEFAULT_SUMMARY_LANGUAGE,
    DEFAULT_SUMMARY_TEMPLATE, DEFAULT_TONE, LOCALIZED_SUMMARY_TEMPLATE, PromptTemplates,
};
pub use retrieval_service::{DEFAULT_TOP_K, RetrievalError, RetrievalService};
