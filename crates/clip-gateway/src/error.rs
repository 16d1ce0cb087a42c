use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use clip_core::StoreError;
use clip_shortener::ShortenerError;
use serde_json::json;

pub type Result<T> = std::result::Result<T, ApiError>;

/// HTTP-facing wrapper around [`ShortenerError`].
///
/// Client mistakes map to 4xx and keep their message; store failures other
/// than conflicts map to 500.
#[derive(Debug)]
pub struct ApiError(ShortenerError);

impl From<ShortenerError> for ApiError {
    fn from(err: ShortenerError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            ShortenerError::InvalidFormat(_) => StatusCode::BAD_REQUEST,
            ShortenerError::NotFound(_) => StatusCode::NOT_FOUND,
            // The losing side of a duplicate-write race; a retry takes the
            // read path and succeeds.
            ShortenerError::Store(StoreError::Conflict(_)) => StatusCode::CONFLICT,
            ShortenerError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status.is_server_error() {
            tracing::error!(error = %self.0, "request failed");
        }

        (status, Json(json!({ "error": self.0.to_string() }))).into_response()
    }
}
