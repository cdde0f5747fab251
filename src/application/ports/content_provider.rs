use async_trait::async_trait;

use super::ProviderError;

/// Single-shot generation against the nested-parts content provider. No
/// persona is ever attached on this path; the text (a direct prompt or
/// extracted document text) is sent as one content block.
#[async_trait]
pub trait ContentProvider: Send + Sync {
    async fn generate(&self, text: &str) -> Result<String, ProviderError>;
}
