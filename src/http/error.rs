//! Maps the crate error taxonomy onto HTTP responses.
//!
//! Authorization failures and validation errors carry their message through
//! to the caller; store and internal failures are logged and surface as an
//! opaque 500.

use crate::errors::Error;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use tracing::error;

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::Unauthorized => (StatusCode::UNAUTHORIZED, "Unauthorized".to_string()),
            Self::Forbidden { message } => (StatusCode::FORBIDDEN, message.clone()),
            Self::NotFound { what } => (StatusCode::NOT_FOUND, format!("{what} not found")),
            Self::Validation { message } => (StatusCode::BAD_REQUEST, message.clone()),
            other => {
                error!(error = %other, "internal error while handling request");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
