use std::path::PathBuf;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

/// File server errors with their HTTP status codes
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Output directory not found: {}", .0.display())]
    OutputDirectoryMissing(PathBuf),

    #[error("Server error: {0}")]
    Io(#[from] std::io::Error),
}

impl ServerError {
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::OutputDirectoryMissing(_) => StatusCode::NOT_FOUND,
            Self::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub const fn error_type(&self) -> &str {
        match self {
            Self::OutputDirectoryMissing(_) => "not_found_error",
            Self::Io(_) => "internal_error",
        }
    }
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: ErrorDetails,
}

#[derive(Debug, Serialize)]
struct ErrorDetails {
    message: String,
    r#type: String,
    code: u16,
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        tracing::error!("request failed: {self}");

        let body = ErrorResponse {
            error: ErrorDetails {
                message: self.to_string(),
                r#type: self.error_type().to_string(),
                code: status.as_u16(),
            },
        };

        (status, Json(body)).into_response()
    }
}
