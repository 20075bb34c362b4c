//! # Database Error Types
//!
//! Error types for database operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  SQLite Error (sqlx::Error)     ValidationError (catalog-core)         │
//! │       │                                │                                │
//! │       ▼                                ▼                                │
//! │  DbError (this module) ← Adds context and categorization               │
//! │       │                                                                 │
//! │       ├──► startup: ConnectionFailed / SchemaFailed → process exits    │
//! │       │                                                                 │
//! │       └──► request: everything else → ApiError → HTTP 500              │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use catalog_core::ValidationError;
use thiserror::Error;

/// Database operation errors.
///
/// Every storage operation reports failures through this type; none of
/// them panic.
#[derive(Debug, Error)]
pub enum DbError {
    /// Database connection failed.
    ///
    /// ## When This Occurs
    /// - Database file can't be created
    /// - File permissions issue
    /// - Pool closed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// The `products` table could not be created.
    #[error("Schema creation failed: {0}")]
    SchemaFailed(String),

    /// The write statement could not be prepared.
    ///
    /// ## When This Occurs
    /// - Table is missing (dropped after startup)
    /// - Database is locked or corrupt
    #[error("Failed to prepare statement: {0}")]
    PrepareFailed(String),

    /// A single row in a store batch failed to write.
    ///
    /// `written` rows before it are already persisted; they are not
    /// rolled back.
    #[error("Failed to write product '{id}' after {written} row(s): {message}")]
    RowWriteFailed {
        id: String,
        written: usize,
        message: String,
    },

    /// A product's price text could not be converted for storage.
    #[error("Invalid price for product '{id}' after {written} row(s): {source}")]
    InvalidPrice {
        id: String,
        written: usize,
        #[source]
        source: ValidationError,
    },

    /// Query execution failed.
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// A fetched row could not be decoded into a product.
    #[error("Failed to decode row: {0}")]
    DecodeFailed(String),

    /// Pool exhausted (all connections in use).
    #[error("Connection pool exhausted")]
    PoolExhausted,

    /// Internal database error.
    #[error("Internal database error: {0}")]
    Internal(String),
}

/// Convert sqlx errors to DbError.
///
/// ## Error Mapping
/// ```text
/// sqlx::Error::Database       → DbError::QueryFailed
/// sqlx::Error::ColumnDecode   → DbError::DecodeFailed
/// sqlx::Error::Decode         → DbError::DecodeFailed
/// sqlx::Error::PoolTimedOut   → DbError::PoolExhausted
/// sqlx::Error::PoolClosed     → DbError::ConnectionFailed
/// Other                       → DbError::Internal
/// ```
impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Database(db_err) => DbError::QueryFailed(db_err.message().to_string()),

            sqlx::Error::ColumnDecode { .. } | sqlx::Error::Decode(_) => {
                DbError::DecodeFailed(err.to_string())
            }

            sqlx::Error::PoolTimedOut => DbError::PoolExhausted,

            sqlx::Error::PoolClosed => DbError::ConnectionFailed("Pool is closed".to_string()),

            _ => DbError::Internal(err.to_string()),
        }
    }
}

/// Result type for database operations.
pub type DbResult<T> = Result<T, DbError>;
