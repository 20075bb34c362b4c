//! # Validation Module
//!
//! Conversions between transport text and storage values.
//!
//! ## Price Handling
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Price Round Trip                                 │
//! │                                                                         │
//! │  Form field "9.99" ──► parse_price ──► Some(9.99) ──► REAL column      │
//! │  Form field ""     ──► parse_price ──► None       ──► NULL             │
//! │  Form field "abc"  ──► parse_price ──► ValidationError::InvalidFormat  │
//! │                                                                         │
//! │  REAL 9.99 ──► format_price ──► "9.99"                                 │
//! │  NULL      ──► format_price ──► ""                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! No other field is validated: empty ids, names and descriptions are
//! stored as-is.

use crate::error::ValidationError;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Price
// =============================================================================

/// Parses a price string into its storage value.
///
/// ## Rules
/// - Surrounding whitespace is ignored
/// - Empty input means "no price" and is stored as NULL
/// - Anything else must be a finite decimal number
///
/// ## Example
/// ```rust
/// use catalog_core::validation::parse_price;
///
/// assert_eq!(parse_price("9.99").unwrap(), Some(9.99));
/// assert_eq!(parse_price("").unwrap(), None);
/// assert!(parse_price("nine").is_err());
/// ```
pub fn parse_price(raw: &str) -> ValidationResult<Option<f64>> {
    let raw = raw.trim();

    if raw.is_empty() {
        return Ok(None);
    }

    let value: f64 = raw
        .parse()
        .map_err(|_| ValidationError::invalid_format("price", "must be a decimal number"))?;

    // "inf" and "NaN" parse fine but have no meaning as a price
    if !value.is_finite() {
        return Err(ValidationError::invalid_format(
            "price",
            "must be a finite number",
        ));
    }

    Ok(Some(value))
}

/// Renders a stored price back into its transport text.
///
/// Uses the shortest representation that round-trips, so `10.0` becomes
/// `"10"` and `9.99` stays `"9.99"`.
pub fn format_price(stored: Option<f64>) -> String {
    stored.map(|value| value.to_string()).unwrap_or_default()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_price_accepts_decimals() {
        assert_eq!(parse_price("9.99").unwrap(), Some(9.99));
        assert_eq!(parse_price("0").unwrap(), Some(0.0));
        assert_eq!(parse_price("-2.5").unwrap(), Some(-2.5));
        assert_eq!(parse_price(" 3 ").unwrap(), Some(3.0));
    }

    #[test]
    fn test_parse_price_empty_is_none() {
        assert_eq!(parse_price("").unwrap(), None);
        assert_eq!(parse_price("   ").unwrap(), None);
    }

    #[test]
    fn test_parse_price_rejects_garbage() {
        for raw in ["abc", "9,99", "1.2.3", "NaN", "inf", "-infinity"] {
            let err = parse_price(raw).unwrap_err();
            assert!(
                matches!(&err, ValidationError::InvalidFormat { field, .. } if field == "price"),
                "expected InvalidFormat for {raw:?}, got {err:?}"
            );
        }
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(Some(9.99)), "9.99");
        assert_eq!(format_price(Some(10.0)), "10");
        assert_eq!(format_price(Some(0.5)), "0.5");
        assert_eq!(format_price(None), "");
    }
}
