use async_trait::async_trait;

use super::ProviderError;

/// Single-turn chat completion against the role-tagged-message provider.
///
/// When a persona is given it is sent as a leading system-role message,
/// followed by exactly one user-role message.
#[async_trait]
pub trait ChatProvider: Send + Sync {
    async fn complete(
        &self,
        persona: Option<&str>,
        message: &str,
    ) -> Result<String, ProviderError>;
}
