use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;

use crate::application::ports::{TextExtractor, TextExtractorError};
use crate::domain::{ContentType, Upload};

use super::{PdfAdapter, PlainTextAdapter};

/// Routes each upload to the extractor registered for its content type.
pub struct CompositeExtractor {
    adapters: HashMap<ContentType, Arc<dyn TextExtractor>>,
}

impl CompositeExtractor {
    pub fn new(adapters: Vec<(ContentType, Arc<dyn TextExtractor>)>) -> Self {
        Self {
            adapters: adapters.into_iter().collect(),
        }
    }

    /// PDF and plain text, the two upload kinds the service accepts.
    pub fn with_default_adapters() -> Self {
        let pdf: Arc<dyn TextExtractor> = Arc::new(PdfAdapter::new());
        let text: Arc<dyn TextExtractor> = Arc::new(PlainTextAdapter);
        Self::new(vec![(ContentType::Pdf, pdf), (ContentType::Text, text)])
    }
}

#[async_trait]
impl TextExtractor for CompositeExtractor {
    async fn extract_text(
        &self,
        data: &[u8],
        upload: &Upload,
    ) -> Result<String, TextExtractorError> {
        let adapter = self.adapters.get(&upload.content_type).ok_or_else(|| {
            TextExtractorError::UnsupportedContentType(upload.content_type.as_mime().to_string())
        })?;

        adapter.extract_text(data, upload).await
    }
}
