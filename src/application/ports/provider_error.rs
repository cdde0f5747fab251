/// Failure of an outbound provider call. `Api` carries the provider's own
/// HTTP status and raw response body so routes can pass them through
/// unchanged; `Transport` is a network-level failure where no response was
/// received at all.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("provider returned {status}: {body}")]
    Api { status: u16, body: String },
    #[error("transport error: {0}")]
    Transport(String),
    #[error("malformed provider response: {0}")]
    MalformedResponse(String),
}
