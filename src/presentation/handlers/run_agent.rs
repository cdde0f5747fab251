use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::{Deserialize, Serialize};

use crate::application::ports::{ChatProvider, ContentProvider, TextExtractor};
use crate::infrastructure::observability::sanitize_prompt;
use crate::presentation::state::AppState;

use super::ErrorResponse;

#[derive(Deserialize)]
pub struct RunAgentRequest {
    #[serde(default)]
    pub agent: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Serialize)]
pub struct RunAgentResponse {
    pub reply: String,
}

/// Runs one chat-completion turn with the selected agent's persona attached
/// as the system message. Every provider failure maps to a fixed 500.
#[tracing::instrument(skip(state, request))]
pub async fn run_agent_handler<C, G, X>(
    State(state): State<AppState<C, G, X>>,
    Json(request): Json<RunAgentRequest>,
) -> impl IntoResponse
where
    C: ChatProvider + 'static,
    G: ContentProvider + 'static,
    X: TextExtractor + 'static,
{
    let agent_key = match request.agent.as_deref() {
        Some(key) if !key.is_empty() => key,
        _ => {
            tracing::warn!("Run-agent request without agent key");
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: "Missing 'agent'".to_string(),
                }),
            )
                .into_response();
        }
    };

    let message = match request.message.as_deref() {
        Some(message) if !message.is_empty() => message,
        _ => {
            tracing::warn!(agent = %agent_key, "Run-agent request without message");
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: "Missing 'message'".to_string(),
                }),
            )
                .into_response();
        }
    };

    let agent = match state.catalog.get(agent_key) {
        Some(agent) => agent,
        None => {
            tracing::warn!(agent = %agent_key, "Unknown agent requested");
            return (
                StatusCode::NOT_FOUND,
                Json(ErrorResponse {
                    error: "Agent not found".to_string(),
                }),
            )
                .into_response();
        }
    };

    tracing::debug!(
        agent = %agent.key,
        message = %sanitize_prompt(message),
        "Forwarding to chat provider"
    );

    match state
        .chat_provider
        .complete(Some(agent.persona), message)
        .await
    {
        Ok(reply) => {
            tracing::info!(agent = %agent.key, "Agent run successful");
            (StatusCode::OK, Json(RunAgentResponse { reply })).into_response()
        }
        Err(e) => {
            tracing::error!(agent = %agent.key, error = %e, "Chat provider call failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: e.to_string(),
                }),
            )
                .into_response()
        }
    }
}
