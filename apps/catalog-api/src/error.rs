//! # API Error Type
//!
//! Errors returned from route handlers.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Catalog API                        │
//! │                                                                         │
//! │  Handler ── Result<Json<Value>, ApiError>                              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  DbError (prepare / write / price / query / decode)                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ApiError::into_response()                                             │
//! │       ├── logs the full error with tracing                              │
//! │       └── returns 500 with a fixed message (no internals leak)         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use catalog_db::DbError;
use serde_json::json;
use thiserror::Error;

/// Body message when a product can't be created.
pub const CREATE_FAILED_MESSAGE: &str = "Error running create action on product";

/// Body message when products can't be listed.
pub const LIST_FAILED_MESSAGE: &str = "Error running statement";

/// Route handler errors.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Storing the submitted product failed.
    #[error("Create product failed: {0}")]
    CreateFailed(#[source] DbError),

    /// The product was stored, but legacy status mode reports it as a
    /// failure.
    #[error("Create product succeeded but is reported as failed (legacy status mode)")]
    CreateReportedAsFailed,

    /// Reading the product list failed.
    #[error("List products failed: {0}")]
    ListFailed(#[source] DbError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = match &self {
            ApiError::CreateFailed(e) => {
                tracing::error!(error = %e, "Failed to store product");
                json!({ "status": CREATE_FAILED_MESSAGE })
            }
            ApiError::CreateReportedAsFailed => {
                tracing::warn!("Product stored; legacy status mode reports failure");
                json!({ "status": CREATE_FAILED_MESSAGE })
            }
            ApiError::ListFailed(e) => {
                tracing::error!(error = %e, "Failed to read products");
                json!({ "message": LIST_FAILED_MESSAGE })
            }
        };

        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}
