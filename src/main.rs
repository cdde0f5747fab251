use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;

use lexgate::domain::AgentCatalog;
use lexgate::infrastructure::extraction::CompositeExtractor;
use lexgate::infrastructure::observability::{TracingConfig, init_tracing};
use lexgate::infrastructure::providers::{GeminiContentProvider, OpenAiChatProvider};
use lexgate::presentation::{AppState, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let settings = Settings::from_env();
    init_tracing(TracingConfig::default(), settings.server.port);

    let chat_provider = Arc::new(OpenAiChatProvider::new(
        &settings.providers.openai_api_key,
        &settings.providers.openai_model,
    ));
    let content_provider = Arc::new(GeminiContentProvider::new(
        &settings.providers.gemini_api_key,
        &settings.providers.gemini_model,
    ));
    let extractor = Arc::new(CompositeExtractor::with_default_adapters());
    let catalog = Arc::new(AgentCatalog::builtin());

    let state = AppState {
        chat_provider,
        content_provider,
        extractor,
        catalog,
    };

    let router = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], settings.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
