use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use shortlink_shortener::ShortenerError;
use tracing::error;

use crate::model::ErrorResponse;

pub type Result<T> = std::result::Result<T, AppError>;

/// A service error on its way to becoming an HTTP response.
#[derive(Debug)]
pub struct AppError(ShortenerError);

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self.0 {
            ShortenerError::InvalidUrl(_) | ShortenerError::CodeTooShort { .. } => {
                StatusCode::BAD_REQUEST
            }
            ShortenerError::LinkNotFound { .. } => StatusCode::NOT_FOUND,
            ShortenerError::GenerationFailed { .. }
            | ShortenerError::AttemptsExhausted { .. }
            | ShortenerError::Storage { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ShortenerError> for AppError {
    fn from(value: ShortenerError) -> Self {
        Self(value)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = if status.is_server_error() {
            // internals stay in the log
            error!(error = %self.0, source = ?std::error::Error::source(&self.0), "request failed");
            "internal server error".to_string()
        } else {
            self.0.to_string()
        };

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}
