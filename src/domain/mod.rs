mod chunk;
mod chunking_config;
mod document;
mod embedding;
mod session;
mod session_id;
mod vector_index;

pub use chunk::Chunk;
pub use chunking_config::{
    ChunkingConfig, ChunkingConfigError, DEFAULT_CHUNK_OVERLAP, DEFAULT_CHUNK_SIZE,
};
pub use document::{ContentType, Document, DocumentId, Upload};
pub use embedding::{Embedding, SIMILARITY_EPSILON};
pub use session::Session;
pub use session_id::SessionId;
pub use vector_index::{IndexError, ScoredChunk, VectorIndex};
