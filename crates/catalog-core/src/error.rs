//! # Error Types
//!
//! Domain-specific error types for catalog-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  catalog-core errors (this file)                                       │
//! │  └── ValidationError  - Input conversion failures                      │
//! │                                                                         │
//! │  catalog-db errors (separate crate)                                    │
//! │  └── DbError          - Database operation failures                    │
//! │                                                                         │
//! │  catalog-api errors (in app)                                           │
//! │  └── ApiError         - What HTTP clients see                          │
//! │                                                                         │
//! │  Flow: ValidationError → DbError → ApiError → HTTP 500                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when a transport value can't be converted into
/// its storage representation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Invalid format (e.g., a price that is not a number).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    /// Creates an InvalidFormat error.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::invalid_format("price", "must be a decimal number");
        assert_eq!(
            err.to_string(),
            "price has invalid format: must be a decimal number"
        );
    }
}
