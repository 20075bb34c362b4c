//! # catalog-core: Domain Types for the Product Catalog
//!
//! This crate holds the product entity and the rules for turning transport
//! values into storable ones. It has zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Product Catalog Architecture                        │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  catalog-api (axum HTTP server)                 │   │
//! │  │        GET /    POST /products    GET /products                 │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ catalog-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌─────────────┐   ┌──────────────┐   ┌─────────────────┐      │   │
//! │  │   │   types     │   │  validation  │   │     error       │      │   │
//! │  │   │ ProductItem │   │ parse_price  │   │ ValidationError │      │   │
//! │  │   └─────────────┘   └──────────────┘   └─────────────────┘      │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 catalog-db (Database Layer)                     │   │
//! │  │           SQLite pool, schema, ProductRepository                │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - The [`ProductItem`] entity
//! - [`validation`] - Price parsing between text and storage
//! - [`error`] - Validation error types
//!
//! ## Example Usage
//!
//! ```rust
//! use catalog_core::validation::{format_price, parse_price};
//!
//! // Prices arrive as text and are stored as REAL
//! let stored = parse_price("9.99").unwrap();
//! assert_eq!(stored, Some(9.99));
//!
//! // ...and are rendered back as text on the way out
//! assert_eq!(format_price(stored), "9.99");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::ValidationError;
pub use types::ProductItem;
