//! Request rejections and their HTTP mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use webhook::DecodeError;

/// Why an inbound delivery was rejected before reaching the registry.
#[derive(Debug, thiserror::Error)]
pub enum ListenerError {
    #[error("Content-Type must be application/json")]
    UnsupportedContentType,

    #[error("Missing X-GitHub-Event header")]
    MissingEventHeader,

    #[error("Error decoding JSON: {0}")]
    Decode(#[from] DecodeError),
}

impl ListenerError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::UnsupportedContentType => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            Self::MissingEventHeader | Self::Decode(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ListenerError {
    fn into_response(self) -> Response {
        tracing::warn!(status = %self.status(), error = %self, "Rejected webhook delivery");
        (self.status(), self.to_string()).into_response()
    }
}
