//! API error types with HTTP response mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use status_reader::ReadError;

/// API-level error type that maps to HTTP responses.
#[derive(Debug)]
pub enum ApiError {
    /// An artifact exists but could not be read or parsed.
    Read(ReadError),
}

impl ApiError {
    /// Message returned to clients. Never includes paths or OS errors.
    pub fn public_message(&self) -> String {
        match self {
            ApiError::Read(err) => format!("não foi possível ler {}", err.artifact()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // The reader has already logged the underlying error.
        let status = match self {
            ApiError::Read(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = serde_json::json!({ "erro": self.public_message() });
        (status, axum::Json(body)).into_response()
    }
}

impl From<ReadError> for ApiError {
    fn from(err: ReadError) -> Self {
        ApiError::Read(err)
    }
}
