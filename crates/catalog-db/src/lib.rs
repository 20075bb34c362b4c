//! # catalog-db: Database Layer for the Product Catalog
//!
//! This crate provides database access for the catalog service.
//! It uses SQLite for local storage with sqlx for async operations.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Product Catalog Data Flow                         │
//! │                                                                         │
//! │  HTTP handler (POST /products)        Startup export                   │
//! │       │                                    │                            │
//! │       ▼                                    ▼                            │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    catalog-db (THIS CRATE)                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────────┐   ┌────────────┐  │   │
//! │  │   │   Database    │    │ ProductRepository │   │   schema   │  │   │
//! │  │   │   (pool.rs)   │    │   (product.rs)    │   │            │  │   │
//! │  │   │               │    │                   │   │ CREATE     │  │   │
//! │  │   │ SqlitePool    │◄───│ store()           │   │ TABLE IF   │  │   │
//! │  │   │               │    │ read_all()        │   │ NOT EXISTS │  │   │
//! │  │   └───────────────┘    └───────────────────┘   └────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  database.db (SQLite file)                                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`pool`] - Connection pool and the [`Database`] handle
//! - [`schema`] - Idempotent table creation
//! - [`error`] - Database error types
//! - [`repository`] - Repository implementations
//!
//! ## Usage
//!
//! ```rust,ignore
//! use catalog_db::{Database, DbConfig};
//!
//! let db = Database::new(DbConfig::new("database.db")).await?;
//!
//! db.products().store(&[item]).await?;
//! let products = db.products().read_all().await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod pool;
pub mod repository;
pub mod schema;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{DbError, DbResult};
pub use pool::{Database, DbConfig};
pub use repository::product::ProductRepository;
