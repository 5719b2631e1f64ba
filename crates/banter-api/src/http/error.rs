//! Application error type mapping to HTTP status codes and envelope format.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use banter_types::error::ChatError;

/// Application-level error that maps to HTTP responses.
#[derive(Debug)]
pub enum AppError {
    /// Input validation failure (the only error `chat.sendMessage` raises).
    Validation(String),
    /// Request body missing or malformed.
    BadInput(String),
    /// Request named a procedure that does not exist.
    UnknownProcedure(String),
}

impl From<ChatError> for AppError {
    fn from(e: ChatError) -> Self {
        match e {
            ChatError::InvalidText { .. } => AppError::Validation(e.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg),
            AppError::BadInput(msg) => (StatusCode::BAD_REQUEST, "BAD_INPUT", msg),
            AppError::UnknownProcedure(name) => (
                StatusCode::NOT_FOUND,
                "UNKNOWN_PROCEDURE",
                format!("No such procedure: {name}"),
            ),
        };

        let body = json!({
            "errors": [{
                "code": code,
                "message": message,
            }]
        });

        (
            status,
            [(axum::http::header::CONTENT_TYPE, "application/json")],
            body.to_string(),
        )
            .into_response()
    }
}
