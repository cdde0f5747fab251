mod chat_provider;
mod content_provider;
mod provider_error;
mod text_extractor;

pub use chat_provider::ChatProvider;
pub use content_provider::ContentProvider;
pub use provider_error::ProviderError;
pub use text_extractor::{ExtractionError, TextExtractor};
