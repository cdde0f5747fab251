use axum::http::StatusCode;
use axum::response::IntoResponse;

pub async fn home_handler() -> impl IntoResponse {
    (StatusCode::OK, "Legal Agent API is running!")
}
