use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::{Deserialize, Serialize};

use crate::application::ports::{ChatProvider, ContentProvider, ProviderError, TextExtractor};
use crate::infrastructure::observability::sanitize_prompt;
use crate::presentation::state::AppState;

use super::ErrorResponse;

#[derive(Deserialize)]
pub struct GeminiRequest {
    #[serde(default)]
    pub prompt: Option<String>,
}

#[derive(Serialize)]
pub struct GeminiResponse {
    pub response: String,
}

/// Forwards a raw prompt to the generate-content provider. Unlike the
/// chat route, a provider rejection passes its original status code and
/// raw body through to the client.
#[tracing::instrument(skip(state, request))]
pub async fn gemini_handler<C, G, X>(
    State(state): State<AppState<C, G, X>>,
    Json(request): Json<GeminiRequest>,
) -> impl IntoResponse
where
    C: ChatProvider + 'static,
    G: ContentProvider + 'static,
    X: TextExtractor + 'static,
{
    let prompt = match request.prompt.as_deref() {
        Some(prompt) if !prompt.is_empty() => prompt,
        _ => {
            tracing::warn!("Gemini request without prompt");
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: "Missing 'prompt'".to_string(),
                }),
            )
                .into_response();
        }
    };

    tracing::debug!(prompt = %sanitize_prompt(prompt), "Forwarding to content provider");

    match state.content_provider.generate(prompt).await {
        Ok(reply) => {
            tracing::info!("Content generation successful");
            (StatusCode::OK, Json(GeminiResponse { response: reply })).into_response()
        }
        Err(e) => provider_error_response(e),
    }
}

/// Maps a content-provider failure to a response: API rejections keep the
/// provider's status and raw body, everything else is a 500.
pub(super) fn provider_error_response(error: ProviderError) -> axum::response::Response {
    match error {
        ProviderError::Api { status, body } => {
            tracing::error!(status, "Content provider rejected request");
            let status =
                StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            (status, Json(ErrorResponse { error: body })).into_response()
        }
        other => {
            tracing::error!(error = %other, "Content provider call failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: other.to_string(),
                }),
            )
                .into_response()
        }
    }
}
