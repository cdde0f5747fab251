use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::application::ports::{ChatProvider, ContentProvider, TextExtractor};
use crate::presentation::state::AppState;

/// Identifier → display name for every configured agent. Personas stay
/// server-side.
pub async fn list_agents_handler<C, G, X>(
    State(state): State<AppState<C, G, X>>,
) -> impl IntoResponse
where
    C: ChatProvider + 'static,
    G: ContentProvider + 'static,
    X: TextExtractor + 'static,
{
    (StatusCode::OK, Json(state.catalog.listing()))
}
