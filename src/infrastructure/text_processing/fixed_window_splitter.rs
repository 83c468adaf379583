use async_trait::async_trait;

use crate::application::ports::{TextSplitter, TextSplitterError};
use crate::domain::{Chunk, ChunkingConfig, ChunkingConfigError};

/// Cuts text into windows of `chunk_size` characters, each starting
/// `chunk_size - overlap` characters after the previous one.
///
/// Boundaries ignore words and sentences. The last window may be shorter.
#[derive(Debug, Clone, Copy)]
pub struct FixedWindowSplitter {
    config: ChunkingConfig,
}

impl FixedWindowSplitter {
    pub fn new(chunk_size: usize, overlap: usize) -> Result<Self, ChunkingConfigError> {
        ChunkingConfig::new(chunk_size, overlap).map(Self::from_config)
    }

    pub fn from_config(config: ChunkingConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> ChunkingConfig {
        self.config
    }

    pub fn chunk(&self, text: &str) -> Vec<Chunk> {
        let chars: Vec<char> = text.chars().collect();
        let total_len = chars.len();
        let step = self.config.step();

        let mut chunks = Vec::with_capacity(total_len.div_ceil(step));
        let mut offset = 0;
        while offset < total_len {
            let end = (offset + self.config.chunk_size()).min(total_len);
            let chunk_text: String = chars[offset..end].iter().collect();

            chunks.push(Chunk::new(chunks.len(), offset, chunk_text));

            offset += step;
        }

        chunks
    }
}

impl Default for FixedWindowSplitter {
    fn default() -> Self {
        Self::from_config(ChunkingConfig::default())
    }
}

#[async_trait]
impl TextSplitter for FixedWindowSplitter {
    async fn split(&self, text: &str) -> Result<Vec<Chunk>, TextSplitterError> {
        Ok(self.chunk(text))
    }
}
