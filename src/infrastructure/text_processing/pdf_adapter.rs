use std::io::Write;
use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;
use pdf_oxide::PdfDocument;

use crate::application::ports::{TextExtractor, TextExtractorError};
use crate::domain::{ContentType, Upload};

use super::text_sanitizer::sanitize_extracted_text;

const EXTRACTION_TIMEOUT: Duration = Duration::from_secs(30);

/// Extracts text page by page and joins the pages with `\n`.
///
/// Extraction is best effort: a page that fails or yields nothing
/// contributes an empty string. Only an unreadable file is an error.
#[derive(Default)]
pub struct PdfAdapter;

impl PdfAdapter {
    pub fn new() -> Self {
        Self
    }

    fn extract_pages(path: &Path) -> Result<Vec<String>, TextExtractorError> {
        let mut doc = PdfDocument::open(path).map_err(|e| {
            TextExtractorError::ExtractionFailed(format!("failed to parse PDF: {e}"))
        })?;

        let page_count = doc.page_count().map_err(|e| {
            TextExtractorError::ExtractionFailed(format!("failed to read page count: {e}"))
        })?;

        let pages = (0..page_count)
            .map(|page_index| match doc.extract_text(page_index) {
                Ok(text) => sanitize_extracted_text(&text),
                Err(e) => {
                    tracing::warn!(page = page_index + 1, error = %e, "PDF page yielded no text");
                    String::new()
                }
            })
            .collect();

        Ok(pages)
    }
}

#[async_trait]
impl TextExtractor for PdfAdapter {
    #[tracing::instrument(skip(self, data), fields(filename = %upload.filename))]
    async fn extract_text(
        &self,
        data: &[u8],
        upload: &Upload,
    ) -> Result<String, TextExtractorError> {
        if upload.content_type != ContentType::Pdf {
            return Err(TextExtractorError::UnsupportedContentType(
                upload.content_type.as_mime().to_string(),
            ));
        }

        let mut temp_file = tempfile::NamedTempFile::new().map_err(|e| {
            TextExtractorError::ExtractionFailed(format!("failed to create temp file: {e}"))
        })?;

        temp_file.write_all(data).map_err(|e| {
            TextExtractorError::ExtractionFailed(format!("failed to write temp file: {e}"))
        })?;

        // The temp file is removed on drop, so it moves into the blocking task.
        let pages = tokio::time::timeout(
            EXTRACTION_TIMEOUT,
            tokio::task::spawn_blocking(move || Self::extract_pages(temp_file.path())),
        )
        .await
        .map_err(|_| TextExtractorError::ExtractionFailed("PDF extraction timed out".to_string()))?
        .map_err(|e| TextExtractorError::ExtractionFailed(format!("task join error: {e}")))??;

        let empty_pages = pages.iter().filter(|p| p.is_empty()).count();
        tracing::info!(
            page_count = pages.len(),
            empty_pages,
            "PDF text extraction complete"
        );

        Ok(pages.join("\n"))
    }
}
