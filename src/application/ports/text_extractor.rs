use async_trait::async_trait;

use crate::domain::Document;

/// Converts an uploaded byte stream into a single plain-text string.
///
/// Adapters return whatever text the container yields, including empty
/// segments; the emptiness of the overall result is the caller's concern.
#[async_trait]
pub trait TextExtractor: Send + Sync {
    async fn extract_text(
        &self,
        data: &[u8],
        document: &Document,
    ) -> Result<String, ExtractionError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ExtractionError {
    #[error("unsupported document format: {0}")]
    UnsupportedFormat(String),
    #[error("failed to parse document: {0}")]
    ParseFailed(String),
    #[error("document is not valid UTF-8: {0}")]
    InvalidEncoding(String),
}
