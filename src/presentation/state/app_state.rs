use std::sync::Arc;

use crate::application::ports::{ChatProvider, ContentProvider, TextExtractor};
use crate::domain::AgentCatalog;

/// Per-process shared state: the two provider gateways, the document
/// extractor, and the immutable agent catalog. Nothing here is mutated
/// after startup.
pub struct AppState<C, G, X>
where
    C: ChatProvider,
    G: ContentProvider,
    X: TextExtractor,
{
    pub chat_provider: Arc<C>,
    pub content_provider: Arc<G>,
    pub extractor: Arc<X>,
    pub catalog: Arc<AgentCatalog>,
}

impl<C, G, X> Clone for AppState<C, G, X>
where
    C: ChatProvider,
    G: ContentProvider,
    X: TextExtractor,
{
    fn clone(&self) -> Self {
        Self {
            chat_provider: Arc::clone(&self.chat_provider),
            content_provider: Arc::clone(&self.content_provider),
            extractor: Arc::clone(&self.extractor),
            catalog: Arc::clone(&self.catalog),
        }
    }
}
