//! # Repository Module
//!
//! Database repository implementations for the catalog.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern                                   │
//! │                                                                         │
//! │  HTTP handler / exporter                                               │
//! │       │                                                                 │
//! │       │  db.products().read_all()                                      │
//! │       ▼                                                                 │
//! │  ProductRepository                                                     │
//! │  ├── store(&self, products)                                            │
//! │  ├── read_all(&self)                                                   │
//! │  └── count(&self)                                                      │
//! │       │                                                                 │
//! │       │  SQL Query                                                      │
//! │       ▼                                                                 │
//! │  SQLite Database                                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`product::ProductRepository`] - Product writes and ordered reads

pub mod product;
