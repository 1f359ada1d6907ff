use chrono::Utc;
use poem::http::StatusCode;
use poem_openapi::{Object, payload::Json};
use serde::Serialize;

/// Error body shared by every endpoint.
#[derive(Object, Serialize, Debug, Clone)]
pub struct ErrorResponse {
    /// HTTP status code
    pub status: u16,
    /// HTTP reason phrase
    pub error: String,
    /// Code-style message describing the failure
    pub message: String,
    /// Time the error was produced, in epoch milliseconds
    pub timestamp: i64,
}

impl ErrorResponse {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status: status.as_u16(),
            error: status.canonical_reason().unwrap_or("Unknown").to_string(),
            message: message.into(),
            timestamp: Utc::now().timestamp_millis(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Json<Self> {
        Json(Self::new(StatusCode::BAD_REQUEST, message))
    }

    /// Wraps a request extraction failure (malformed id, unknown category, bad JSON).
    pub fn from_request_error(err: &poem::Error) -> Json<Self> {
        tracing::debug!(error = %err, "rejected malformed request");
        Self::bad_request(err.to_string())
    }
}

pub trait IntoErrorResponse {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>);
}

/// Body returned when a handler panics, so unexpected failures keep the error shape.
pub fn panic_response(_panic: Box<dyn std::any::Any + Send + 'static>) -> poem::Response {
    use poem::IntoResponse;

    tracing::error!("request handler panicked");
    poem::web::Json(ErrorResponse::new(
        StatusCode::INTERNAL_SERVER_ERROR,
        "internal.unexpected_error",
    ))
    .with_status(StatusCode::INTERNAL_SERVER_ERROR)
    .into_response()
}
