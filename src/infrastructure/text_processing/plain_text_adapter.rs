use async_trait::async_trait;

use crate::application::ports::{TextExtractor, TextExtractorError};
use crate::domain::{ContentType, Upload};

pub struct PlainTextAdapter;

#[async_trait]
impl TextExtractor for PlainTextAdapter {
    async fn extract_text(
        &self,
        data: &[u8],
        upload: &Upload,
    ) -> Result<String, TextExtractorError> {
        if upload.content_type != ContentType::Text {
            return Err(TextExtractorError::UnsupportedContentType(
                upload.content_type.as_mime().to_string(),
            ));
        }

        let text = std::str::from_utf8(data)
            .map_err(|e| TextExtractorError::ExtractionFailed(e.to_string()))?;

        Ok(text.strip_prefix('\u{feff}').unwrap_or(text).to_string())
    }
}
