use std::sync::Mutex;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use axum::body::Body;
use axum::http::{Request, StatusCode};
use tower::ServiceExt;

use lexgate::application::ports::{
    ChatProvider, ContentProvider, ExtractionError, ProviderError, TextExtractor,
};
use lexgate::domain::{AgentCatalog, Document};
use lexgate::presentation::{AppState, create_router};

const BOUNDARY: &str = "test-upload-boundary";

#[derive(Default)]
struct RecordingChatProvider {
    calls: AtomicUsize,
    last: Mutex<Option<(Option<String>, String)>>,
}

#[async_trait::async_trait]
impl ChatProvider for RecordingChatProvider {
    async fn complete(
        &self,
        persona: Option<&str>,
        message: &str,
    ) -> Result<String, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last.lock().unwrap() = Some((persona.map(String::from), message.to_string()));
        Ok("Mock reply".to_string())
    }
}

struct FailingChatProvider;

#[async_trait::async_trait]
impl ChatProvider for FailingChatProvider {
    async fn complete(&self, _: Option<&str>, _: &str) -> Result<String, ProviderError> {
        Err(ProviderError::Api {
            status: 502,
            body: "upstream unavailable".to_string(),
        })
    }
}

#[derive(Default)]
struct RecordingContentProvider {
    calls: AtomicUsize,
    last: Mutex<Option<String>>,
}

#[async_trait::async_trait]
impl ContentProvider for RecordingContentProvider {
    async fn generate(&self, text: &str) -> Result<String, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last.lock().unwrap() = Some(text.to_string());
        Ok("Mock generated reply".to_string())
    }
}

struct RejectingContentProvider;

#[async_trait::async_trait]
impl ContentProvider for RejectingContentProvider {
    async fn generate(&self, _: &str) -> Result<String, ProviderError> {
        Err(ProviderError::Api {
            status: 429,
            body: r#"{"error": "quota exceeded"}"#.to_string(),
        })
    }
}

struct UnreachableContentProvider;

#[async_trait::async_trait]
impl ContentProvider for UnreachableContentProvider {
    async fn generate(&self, _: &str) -> Result<String, ProviderError> {
        Err(ProviderError::Transport("connection refused".to_string()))
    }
}

struct PassthroughExtractor;

#[async_trait::async_trait]
impl TextExtractor for PassthroughExtractor {
    async fn extract_text(&self, data: &[u8], _: &Document) -> Result<String, ExtractionError> {
        Ok(String::from_utf8_lossy(data).into_owned())
    }
}

struct WhitespaceExtractor;

#[async_trait::async_trait]
impl TextExtractor for WhitespaceExtractor {
    async fn extract_text(&self, _: &[u8], _: &Document) -> Result<String, ExtractionError> {
        Ok("   \n\t  ".to_string())
    }
}

struct CorruptDocumentExtractor;

#[async_trait::async_trait]
impl TextExtractor for CorruptDocumentExtractor {
    async fn extract_text(&self, _: &[u8], _: &Document) -> Result<String, ExtractionError> {
        Err(ExtractionError::ParseFailed(
            "unreadable container".to_string(),
        ))
    }
}

fn app_with<C, G, X>(chat: Arc<C>, content: Arc<G>, extractor: Arc<X>) -> axum::Router
where
    C: ChatProvider + 'static,
    G: ContentProvider + 'static,
    X: TextExtractor + 'static,
{
    let state = AppState {
        chat_provider: chat,
        content_provider: content,
        extractor,
        catalog: Arc::new(AgentCatalog::builtin()),
    };
    create_router(state)
}

fn default_app() -> axum::Router {
    app_with(
        Arc::new(RecordingChatProvider::default()),
        Arc::new(RecordingContentProvider::default()),
        Arc::new(PassthroughExtractor),
    )
}

fn json_post(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn upload_request(field_name: &str, filename: &str, bytes: &[u8]) -> Request<Body> {
    let mut body = Vec::new();
    body.extend_from_slice(
        format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{field_name}\"; \
             filename=\"{filename}\"\r\nContent-Type: application/octet-stream\r\n\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(bytes);
    body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());

    Request::builder()
        .method("POST")
        .uri("/gemini-upload")
        .header(
            "content-type",
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn given_running_server_when_home_then_returns_liveness_text() {
    let app = default_app();

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert_eq!(&bytes[..], b"Legal Agent API is running!");
}

#[tokio::test]
async fn given_fixed_catalog_when_listing_agents_then_returns_all_display_names() {
    let app = default_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/agents")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let agents = json.as_object().unwrap();

    assert_eq!(agents.len(), 3);
    assert_eq!(agents["ppm_review"], "PPM Review Agent");
    assert_eq!(agents["employment_review"], "Employment Agreement Review Agent");
    assert_eq!(agents["nda_review"], "NDA Review Agent");
}

#[tokio::test]
async fn given_known_agent_when_run_agent_then_returns_provider_reply() {
    let chat = Arc::new(RecordingChatProvider::default());
    let app = app_with(
        Arc::clone(&chat),
        Arc::new(RecordingContentProvider::default()),
        Arc::new(PassthroughExtractor),
    );

    let response = app
        .oneshot(json_post(
            "/run-agent",
            r#"{"agent": "ppm_review", "message": "Review this PPM."}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["reply"], "Mock reply");

    let last = chat.last.lock().unwrap().clone();
    let (persona, message) = last.unwrap();
    assert!(persona.unwrap().contains("fund formation attorney"));
    assert_eq!(message, "Review this PPM.");
}

#[tokio::test]
async fn given_unknown_agent_when_run_agent_then_returns_not_found() {
    let chat = Arc::new(RecordingChatProvider::default());
    let app = app_with(
        Arc::clone(&chat),
        Arc::new(RecordingContentProvider::default()),
        Arc::new(PassthroughExtractor),
    );

    let response = app
        .oneshot(json_post(
            "/run-agent",
            r#"{"agent": "tax_review", "message": "hello"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Agent not found");
    assert_eq!(chat.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn given_missing_message_when_run_agent_then_returns_bad_request_without_provider_call() {
    let chat = Arc::new(RecordingChatProvider::default());
    let app = app_with(
        Arc::clone(&chat),
        Arc::new(RecordingContentProvider::default()),
        Arc::new(PassthroughExtractor),
    );

    let response = app
        .oneshot(json_post("/run-agent", r#"{"agent": "ppm_review"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Missing 'message'");
    assert_eq!(chat.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn given_missing_agent_when_run_agent_then_returns_bad_request() {
    let app = default_app();

    let response = app
        .oneshot(json_post("/run-agent", r#"{"message": "hello"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Missing 'agent'");
}

#[tokio::test]
async fn given_provider_failure_when_run_agent_then_returns_internal_error() {
    let app = app_with(
        Arc::new(FailingChatProvider),
        Arc::new(RecordingContentProvider::default()),
        Arc::new(PassthroughExtractor),
    );

    let response = app
        .oneshot(json_post(
            "/run-agent",
            r#"{"agent": "nda_review", "message": "Check this NDA."}"#,
        ))
        .await
        .unwrap();

    // The chat route always maps provider failures to a fixed 500.
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json(response).await;
    assert!(json["error"].as_str().unwrap().contains("502"));
}

#[tokio::test]
async fn given_valid_prompt_when_gemini_then_returns_response() {
    let content = Arc::new(RecordingContentProvider::default());
    let app = app_with(
        Arc::new(RecordingChatProvider::default()),
        Arc::clone(&content),
        Arc::new(PassthroughExtractor),
    );

    let response = app
        .oneshot(json_post("/gemini", r#"{"prompt": "Summarize this clause."}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["response"], "Mock generated reply");
    assert_eq!(
        content.last.lock().unwrap().as_deref(),
        Some("Summarize this clause.")
    );
}

#[tokio::test]
async fn given_missing_prompt_when_gemini_then_returns_bad_request_without_provider_call() {
    let content = Arc::new(RecordingContentProvider::default());
    let app = app_with(
        Arc::new(RecordingChatProvider::default()),
        Arc::clone(&content),
        Arc::new(PassthroughExtractor),
    );

    let response = app.oneshot(json_post("/gemini", r#"{}"#)).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Missing 'prompt'");
    assert_eq!(content.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn given_provider_rejection_when_gemini_then_echoes_status_and_raw_body() {
    let app = app_with(
        Arc::new(RecordingChatProvider::default()),
        Arc::new(RejectingContentProvider),
        Arc::new(PassthroughExtractor),
    );

    let response = app
        .oneshot(json_post("/gemini", r#"{"prompt": "hello"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
    let json = body_json(response).await;
    assert_eq!(json["error"], r#"{"error": "quota exceeded"}"#);
}

#[tokio::test]
async fn given_network_failure_when_gemini_then_returns_internal_error() {
    let app = app_with(
        Arc::new(RecordingChatProvider::default()),
        Arc::new(UnreachableContentProvider),
        Arc::new(PassthroughExtractor),
    );

    let response = app
        .oneshot(json_post("/gemini", r#"{"prompt": "hello"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json(response).await;
    assert!(json["error"].as_str().unwrap().contains("connection refused"));
}

#[tokio::test]
async fn given_txt_upload_when_gemini_upload_then_forwards_extracted_text() {
    let content = Arc::new(RecordingContentProvider::default());
    let app = app_with(
        Arc::new(RecordingChatProvider::default()),
        Arc::clone(&content),
        Arc::new(PassthroughExtractor),
    );

    let response = app
        .oneshot(upload_request("file", "agreement.txt", b"Section 1. Terms."))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["response"], "Mock generated reply");
    assert_eq!(
        content.last.lock().unwrap().as_deref(),
        Some("Section 1. Terms.")
    );
}

#[tokio::test]
async fn given_unsupported_extension_when_gemini_upload_then_returns_bad_request() {
    let content = Arc::new(RecordingContentProvider::default());
    let app = app_with(
        Arc::new(RecordingChatProvider::default()),
        Arc::clone(&content),
        Arc::new(PassthroughExtractor),
    );

    let response = app
        .oneshot(upload_request("file", "archive.zip", b"PK"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(content.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn given_no_file_field_when_gemini_upload_then_returns_bad_request() {
    let app = default_app();

    let response = app
        .oneshot(upload_request("attachment", "brief.pdf", b"%PDF-"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "No file uploaded");
}

#[tokio::test]
async fn given_whitespace_extraction_when_gemini_upload_then_returns_bad_request_without_provider_call()
 {
    let content = Arc::new(RecordingContentProvider::default());
    let app = app_with(
        Arc::new(RecordingChatProvider::default()),
        Arc::clone(&content),
        Arc::new(WhitespaceExtractor),
    );

    let response = app
        .oneshot(upload_request("file", "blank.pdf", b"%PDF-"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Empty extracted text");
    assert_eq!(content.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn given_corrupt_document_when_gemini_upload_then_returns_internal_error() {
    let app = app_with(
        Arc::new(RecordingChatProvider::default()),
        Arc::new(RecordingContentProvider::default()),
        Arc::new(CorruptDocumentExtractor),
    );

    // A .pdf filename with non-PDF bytes is a parsing failure, not a 400.
    let response = app
        .oneshot(upload_request("file", "broken.pdf", b"not a pdf"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json(response).await;
    assert!(json["error"].as_str().unwrap().contains("unreadable container"));
}

#[tokio::test]
async fn given_request_without_id_when_any_endpoint_then_response_contains_request_id() {
    let app = default_app();

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert!(response.headers().contains_key("x-request-id"));
}

#[tokio::test]
async fn given_request_with_id_when_any_endpoint_then_response_echoes_request_id() {
    let app = default_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/")
                .header("x-request-id", "test-request-123")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(
        response.headers().get("x-request-id").unwrap(),
        "test-request-123"
    );
}
