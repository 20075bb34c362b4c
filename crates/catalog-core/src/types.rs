//! # Domain Types
//!
//! The catalog has exactly one entity.
//!
//! ```text
//! ┌─────────────────────┐        ┌──────────────────────────────┐
//! │    ProductItem      │        │   products (SQLite table)    │
//! │  ─────────────────  │        │  ──────────────────────────  │
//! │  id          String │ ─────► │  id          TEXT PK         │
//! │  name        String │        │  name        TEXT            │
//! │  description String │        │  description TEXT            │
//! │  price       String │ parse  │  price       REAL            │
//! │                     │        │  insertedAt  DATETIME        │
//! └─────────────────────┘        └──────────────────────────────┘
//! ```
//!
//! `insertedAt` is owned by the storage layer and never appears here.

use serde::{Deserialize, Serialize};

// =============================================================================
// Product
// =============================================================================

/// A product record as seen by API clients.
///
/// The `id` is supplied by the caller and acts as the primary key; writing
/// an item whose `id` already exists replaces the stored row.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ProductItem {
    /// Caller-supplied identifier.
    pub id: String,

    /// Free-text display name.
    pub name: String,

    /// Free-text description.
    pub description: String,

    /// Price as text. Converted with [`crate::validation::parse_price`]
    /// before it reaches the database.
    pub price: String,
}

impl ProductItem {
    /// Creates a new product item.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        price: impl Into<String>,
    ) -> Self {
        ProductItem {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            price: price.into(),
        }
    }
}
