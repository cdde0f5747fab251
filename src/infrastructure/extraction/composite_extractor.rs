use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;

use crate::application::ports::{ExtractionError, TextExtractor};
use crate::domain::{Document, DocumentFormat};

/// Dispatches to the adapter registered for the document's format tag.
/// An unregistered format fails without any extraction being attempted.
pub struct CompositeExtractor {
    adapters: HashMap<DocumentFormat, Arc<dyn TextExtractor>>,
}

impl CompositeExtractor {
    pub fn new(adapters: Vec<(DocumentFormat, Arc<dyn TextExtractor>)>) -> Self {
        Self {
            adapters: adapters.into_iter().collect(),
        }
    }

    /// The standard configuration: one adapter per supported format.
    pub fn with_default_adapters() -> Self {
        use super::{DocxAdapter, PdfAdapter, PlainTextAdapter};

        Self::new(vec![
            (DocumentFormat::Pdf, Arc::new(PdfAdapter::new())),
            (DocumentFormat::Docx, Arc::new(DocxAdapter::new())),
            (DocumentFormat::Txt, Arc::new(PlainTextAdapter)),
        ])
    }
}

#[async_trait]
impl TextExtractor for CompositeExtractor {
    async fn extract_text(
        &self,
        data: &[u8],
        document: &Document,
    ) -> Result<String, ExtractionError> {
        let adapter = self.adapters.get(&document.format).ok_or_else(|| {
            ExtractionError::UnsupportedFormat(document.format.as_extension().to_string())
        })?;

        adapter.extract_text(data, document).await
    }
}
