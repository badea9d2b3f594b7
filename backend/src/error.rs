//! Error types for the NFT drop server.
//!
//! - [`ConfigError`] - Environment configuration errors
//! - [`ContentError`] - Content-store fetch errors
//! - [`ServerError`] - Page handler errors, rendered as HTML responses
//!
//! Error conversion is automatic via `From` implementations,
//! allowing `?` to work across error boundaries.

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;

use crate::render;

// =============================================================================
// Configuration Errors
// =============================================================================

/// Errors while reading configuration from the environment.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Required variable not set.
    #[error("Missing {0} environment variable")]
    MissingVar(&'static str),

    /// Variable set to something unusable.
    #[error("Invalid value for {name}: {value}")]
    InvalidValue { name: &'static str, value: String },
}

// =============================================================================
// Content Store Errors
// =============================================================================

/// Errors from the content store.
#[derive(Debug, Error)]
pub enum ContentError {
    /// HTTP request failed before a response arrived.
    #[error("HTTP request failed: {0}")]
    Http(String),

    /// Content store answered with a non-success status.
    #[error("Content store returned {status}: {body}")]
    Status { status: u16, body: String },

    /// Response body was not the expected shape.
    #[error("Invalid content store response: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// Fixture file could not be read.
    #[error("Failed to read fixtures: {0}")]
    Io(#[from] std::io::Error),
}

impl From<reqwest::Error> for ContentError {
    fn from(err: reqwest::Error) -> Self {
        ContentError::Http(err.to_string())
    }
}

// =============================================================================
// Server Errors
// =============================================================================

/// Page handler errors.
#[derive(Debug, Error)]
pub enum ServerError {
    /// Content store failure.
    #[error("Content error: {0}")]
    Content(#[from] ContentError),

    /// No collection with this identifier.
    #[error("Collection not found: {0}")]
    NotFound(String),

    /// Server internal error.
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl ServerError {
    pub fn status(&self) -> StatusCode {
        match self {
            ServerError::Content(_) => StatusCode::BAD_GATEWAY,
            ServerError::NotFound(_) => StatusCode::NOT_FOUND,
            ServerError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match &self {
            ServerError::NotFound(_) => render::not_found_page(),
            other => {
                tracing::error!(error = %other, "request failed");
                render::error_page(status)
            }
        };
        (status, Html(body)).into_response()
    }
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for configuration loading.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Result type for content-store operations.
pub type ContentResult<T> = Result<T, ContentError>;

/// Result type for page handlers.
pub type ServerResult<T> = Result<T, ServerError>;
