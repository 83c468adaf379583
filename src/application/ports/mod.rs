mod embedder;
mod generator;
mod session_store;
mod text_extractor;
mod text_splitter;

pub use embedder::{Embedder, EmbedderError};
pub use generator::{Generator, GeneratorError};
pub use session_store::{SessionHandle, SessionStore, SessionStoreError};
pub use text_extractor::{TextExtractor, TextExtractorError};
pub use text_splitter::{TextSplitter, TextSplitterError};
