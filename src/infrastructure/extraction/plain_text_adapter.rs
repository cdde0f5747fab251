use async_trait::async_trait;

use crate::application::ports::{ExtractionError, TextExtractor};
use crate::domain::{Document, DocumentFormat};

/// Decodes the byte stream as UTF-8 verbatim; no normalization.
pub struct PlainTextAdapter;

#[async_trait]
impl TextExtractor for PlainTextAdapter {
    async fn extract_text(
        &self,
        data: &[u8],
        document: &Document,
    ) -> Result<String, ExtractionError> {
        if document.format != DocumentFormat::Txt {
            return Err(ExtractionError::UnsupportedFormat(
                document.format.as_extension().to_string(),
            ));
        }

        String::from_utf8(data.to_vec()).map_err(|e| ExtractionError::InvalidEncoding(e.to_string()))
    }
}
