use std::sync::Arc;

use crate::application::ports::{
    Embedder, EmbedderError, TextExtractor, TextExtractorError, TextSplitter, TextSplitterError,
};
use crate::domain::{Chunk, Document, DocumentId, IndexError, Session, Upload, VectorIndex};

/// Turns an upload into a document plus the vector index over its chunks.
pub struct IndexingService<T: ?Sized>
where
    T: TextSplitter,
{
    text_extractor: Arc<dyn TextExtractor>,
    embedder: Arc<dyn Embedder>,
    text_splitter: Arc<T>,
}

impl<T: ?Sized> IndexingService<T>
where
    T: TextSplitter,
{
    pub fn new(
        text_extractor: Arc<dyn TextExtractor>,
        embedder: Arc<dyn Embedder>,
        text_splitter: Arc<T>,
    ) -> Self {
        Self {
            text_extractor,
            embedder,
            text_splitter,
        }
    }

    /// Embeds all chunk texts in one batch and pairs the vectors with the
    /// chunks. An empty chunk list never reaches the embedder.
    pub async fn build_index(&self, chunks: Vec<Chunk>) -> Result<VectorIndex, IndexingError> {
        if chunks.is_empty() {
            return Ok(VectorIndex::empty());
        }

        let texts: Vec<&str> = chunks.iter().map(|c| c.text.as_str()).collect();
        let embeddings = self
            .embedder
            .embed_batch(&texts)
            .await
            .map_err(IndexingError::Embedding)?;

        let index =
            VectorIndex::from_parts(chunks, embeddings).map_err(IndexingError::EmbeddingContract)?;

        tracing::debug!(
            chunks = index.len(),
            dimensions = index.dimensions().unwrap_or_default(),
            "Vector index built"
        );

        Ok(index)
    }

    #[tracing::instrument(
        skip(self, data, upload),
        fields(filename = %upload.filename, bytes = upload.size_bytes)
    )]
    pub async fn ingest(
        &self,
        data: &[u8],
        upload: Upload,
    ) -> Result<(Document, VectorIndex), IndexingError> {
        let text = self
            .text_extractor
            .extract_text(data, &upload)
            .await
            .map_err(IndexingError::Extraction)?;

        let chunks = self
            .text_splitter
            .split(&text)
            .await
            .map_err(IndexingError::Splitting)?;

        let document = Document::new(upload.filename, upload.content_type, text);
        if document.is_empty() {
            tracing::warn!(document_id = %document.id.as_uuid(), "Upload contains no extractable text");
        }
        let index = self.build_index(chunks).await?;

        tracing::info!(
            document_id = %document.id.as_uuid(),
            characters = document.char_len(),
            chunks = index.len(),
            "Document indexed"
        );

        Ok((document, index))
    }

    /// Indexes the upload and installs it in `session`, replacing whatever was
    /// there. A failed upload leaves the session empty rather than holding on
    /// to the previous document.
    pub async fn ingest_into(
        &self,
        session: &mut Session,
        data: &[u8],
        upload: Upload,
    ) -> Result<DocumentId, IndexingError> {
        match self.ingest(data, upload).await {
            Ok((document, index)) => {
                let document_id = document.id;
                session.replace_document(document, index);
                Ok(document_id)
            }
            Err(e) => {
                session.clear();
                Err(e)
            }
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum IndexingError {
    #[error("text extraction: {0}")]
    Extraction(TextExtractorError),
    #[error("text splitting: {0}")]
    Splitting(TextSplitterError),
    #[error("embedding: {0}")]
    Embedding(EmbedderError),
    #[error("embedding contract violated: {0}")]
    EmbeddingContract(IndexError),
}
