use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::{error, warn};

use service::errors::ServiceError;

/// Error envelope at the HTTP boundary:
/// `{"error": <kind>, "message": <human text>, "status": <code>}`.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub error: &'static str,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, error: &'static str, message: impl Into<String>) -> Self {
        Self { status, error, message: message.into() }
    }
}

impl From<ServiceError> for ApiError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::Validation(msg) => Self::new(StatusCode::BAD_REQUEST, "Bad Request", msg),
            ServiceError::NotFound(msg) => Self::new(StatusCode::NOT_FOUND, "Not Found", msg),
            ServiceError::Conflict(msg) => Self::new(StatusCode::CONFLICT, "Conflict", msg),
            ServiceError::Db(msg) => {
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error", msg)
            }
        }
    }
}

/// Malformed or missing JSON bodies surface as 400, not axum's default 422.
impl From<JsonRejection> for ApiError {
    fn from(rej: JsonRejection) -> Self {
        Self::new(StatusCode::BAD_REQUEST, "Bad Request", rej.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            error!(status = %self.status, message = %self.message, "request failed");
        } else {
            warn!(status = %self.status, message = %self.message, "request rejected");
        }
        let body = serde_json::json!({
            "error": self.error,
            "message": self.message,
            "status": self.status.as_u16(),
        });
        (self.status, Json(body)).into_response()
    }
}
