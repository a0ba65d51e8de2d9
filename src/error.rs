//! Error types for the catalog server
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// == Catalog Error Enum ==
/// Unified error type for the catalog server.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Requested item id does not exist
    #[error("Item not found")]
    NotFound,

    /// Query parameter failed validation
    #[error("{0}")]
    InvalidParameter(String),

    /// Backing document could not be read or written
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// Backing document is not valid JSON
    #[error("{0}")]
    Parse(#[from] serde_json::Error),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        let status = match &self {
            CatalogError::NotFound => StatusCode::NOT_FOUND,
            CatalogError::InvalidParameter(_) => StatusCode::BAD_REQUEST,
            CatalogError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
            CatalogError::Parse(_) => StatusCode::INTERNAL_SERVER_ERROR,
            CatalogError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({
            "error": self.to_string()
        }));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the catalog server.
pub type Result<T> = std::result::Result<T, CatalogError>;
