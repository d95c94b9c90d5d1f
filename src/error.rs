//! Error types and error handling for the application
//!
//! Request-level failures are represented by [`AppError`], which converts into
//! an HTTP response. Failures that abort process start are [`StartupError`].

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::path::PathBuf;
use thiserror::Error;

/// Application-level error types
///
/// Each variant maps to one HTTP status via `IntoResponse`.
#[derive(Error, Debug)]
pub enum AppError {
    /// Requested resource does not exist under the resource directory
    #[error("Resource not found: {0}")]
    ResourceNotFound(String),

    /// Requested path escapes the resource directory
    #[error("Path traversal rejected: {0}")]
    PathTraversal(String),

    /// Filesystem operation failed unexpectedly
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// HTTP status code this error is reported with
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::ResourceNotFound(_) => StatusCode::NOT_FOUND,
            AppError::PathTraversal(_) => StatusCode::FORBIDDEN,
            AppError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        }

        let body = Json(json!({
            "error": self.to_string(),
            "status": status.as_u16(),
        }));

        (status, body).into_response()
    }
}

/// Errors that abort process start
#[derive(Error, Debug)]
pub enum StartupError {
    /// The resource directory could not be created or resolved
    #[error("Failed to prepare resource directory {}: {}", .path.display(), .source)]
    ResourceDirectory {
        /// Directory that was being prepared
        path: PathBuf,
        /// Underlying filesystem error
        #[source]
        source: std::io::Error,
    },

    /// The configured listen address is not a valid socket address
    #[error("Invalid server address: {0}")]
    InvalidAddress(String),

    /// The listener could not be bound
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        /// Address that was being bound
        addr: String,
        /// Underlying socket error
        #[source]
        source: std::io::Error,
    },
}
