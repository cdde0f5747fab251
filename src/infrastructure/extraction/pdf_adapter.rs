use async_trait::async_trait;
use lopdf::Document as PdfDocument;

use crate::application::ports::{ExtractionError, TextExtractor};
use crate::domain::{Document, DocumentFormat};

/// Page-by-page text pull with no structure preservation. A page that
/// yields no extractable text contributes an empty segment, not an error;
/// only an unreadable container aborts the extraction.
#[derive(Default)]
pub struct PdfAdapter;

impl PdfAdapter {
    pub fn new() -> Self {
        Self
    }

    fn extract_pages(data: &[u8]) -> Result<Vec<String>, ExtractionError> {
        let doc = PdfDocument::load_mem(data)
            .map_err(|e| ExtractionError::ParseFailed(format!("failed to parse PDF: {e}")))?;

        let pages = doc.get_pages();
        let mut segments = Vec::with_capacity(pages.len());

        for page_number in pages.keys() {
            let text = doc.extract_text(&[*page_number]).unwrap_or_default();
            segments.push(text.trim_end().to_string());
        }

        Ok(segments)
    }
}

#[async_trait]
impl TextExtractor for PdfAdapter {
    #[tracing::instrument(skip(self, data), fields(filename = %document.filename))]
    async fn extract_text(
        &self,
        data: &[u8],
        document: &Document,
    ) -> Result<String, ExtractionError> {
        if document.format != DocumentFormat::Pdf {
            return Err(ExtractionError::UnsupportedFormat(
                document.format.as_extension().to_string(),
            ));
        }

        let data_owned = data.to_vec();
        let segments = tokio::task::spawn_blocking(move || Self::extract_pages(&data_owned))
            .await
            .map_err(|e| ExtractionError::ParseFailed(format!("task join error: {e}")))??;

        tracing::info!(page_count = segments.len(), "PDF text extraction complete");

        Ok(segments.join("\n"))
    }
}
