use axum::Json;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;

use crate::application::ports::{
    ChatProvider, ContentProvider, ExtractionError, TextExtractor,
};
use crate::domain::{Document, DocumentFormat};
use crate::presentation::state::AppState;

use super::ErrorResponse;
use super::gemini::provider_error_response;

#[derive(Serialize)]
pub struct UploadResponse {
    pub response: String,
}

/// Extracts plain text from an uploaded document and forwards it to the
/// generate-content provider. No persona is attached on this path.
#[tracing::instrument(skip(state, multipart))]
pub async fn gemini_upload_handler<C, G, X>(
    State(state): State<AppState<C, G, X>>,
    mut multipart: Multipart,
) -> impl IntoResponse
where
    C: ChatProvider + 'static,
    G: ContentProvider + 'static,
    X: TextExtractor + 'static,
{
    let mut upload: Option<(String, Vec<u8>)> = None;

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(e) => {
                tracing::error!(error = %e, "Failed to read multipart body");
                return (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorResponse {
                        error: format!("Failed to read multipart body: {}", e),
                    }),
                )
                    .into_response();
            }
        };

        if field.name() != Some("file") {
            continue;
        }

        let filename = field.file_name().unwrap_or_default().to_string();
        match field.bytes().await {
            Ok(data) => {
                upload = Some((filename, data.to_vec()));
                break;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to read file bytes");
                return (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorResponse {
                        error: format!("Failed to read file: {}", e),
                    }),
                )
                    .into_response();
            }
        }
    }

    let Some((filename, data)) = upload else {
        tracing::warn!("Upload request with no file field");
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "No file uploaded".to_string(),
            }),
        )
            .into_response();
    };

    let Some(format) = DocumentFormat::from_filename(&filename) else {
        tracing::warn!(filename = %filename, "Unsupported file extension");
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: format!("Unsupported file type: {}", filename),
            }),
        )
            .into_response();
    };

    let document = Document::new(filename, format, data.len() as u64);
    tracing::debug!(
        filename = %document.filename,
        bytes = document.size_bytes,
        "Extracting document text"
    );

    let text = match state.extractor.extract_text(&data, &document).await {
        Ok(text) => text,
        Err(e @ ExtractionError::UnsupportedFormat(_)) => {
            tracing::warn!(error = %e, "Extractor rejected format");
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: e.to_string(),
                }),
            )
                .into_response();
        }
        Err(e) => {
            tracing::error!(filename = %document.filename, error = %e, "Extraction failed");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: e.to_string(),
                }),
            )
                .into_response();
        }
    };

    // Empty documents must never reach the provider.
    if text.trim().is_empty() {
        tracing::warn!(filename = %document.filename, "Empty extracted text");
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "Empty extracted text".to_string(),
            }),
        )
            .into_response();
    }

    tracing::info!(
        filename = %document.filename,
        chars = text.len(),
        "Document text extracted, forwarding to content provider"
    );

    match state.content_provider.generate(&text).await {
        Ok(reply) => {
            tracing::info!(filename = %document.filename, "Content generation successful");
            (StatusCode::OK, Json(UploadResponse { response: reply })).into_response()
        }
        Err(e) => provider_error_response(e),
    }
}
