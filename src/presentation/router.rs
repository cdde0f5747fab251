use axum::Router;
use axum::middleware;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::application::ports::{ChatProvider, ContentProvider, TextExtractor};
use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::handlers::{
    gemini_handler, gemini_upload_handler, home_handler, list_agents_handler, run_agent_handler,
};
use crate::presentation::state::AppState;

pub fn create_router<C, G, X>(state: AppState<C, G, X>) -> Router
where
    C: ChatProvider + 'static,
    G: ContentProvider + 'static,
    X: TextExtractor + 'static,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    Router::new()
        .route("/", get(home_handler))
        .route("/agents", get(list_agents_handler::<C, G, X>))
        .route("/run-agent", post(run_agent_handler::<C, G, X>))
        .route("/gemini", post(gemini_handler::<C, G, X>))
        .route("/gemini-upload", post(gemini_upload_handler::<C, G, X>))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}
