//! # Schema Creation
//!
//! The catalog has a single table and no versioned migrations. The DDL is
//! written with `IF NOT EXISTS` and runs on every startup.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Startup Schema Check                               │
//! │                                                                         │
//! │  Database::new()                                                       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  CREATE TABLE IF NOT EXISTS products(...)                              │
//! │       │                                                                 │
//! │       ├── table missing?  → created                                    │
//! │       ├── table present?  → no-op                                      │
//! │       └── error?          → DbError::SchemaFailed (fatal at startup)   │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use sqlx::SqlitePool;
use tracing::info;

use crate::error::{DbError, DbResult};

/// DDL for the `products` table.
pub const CREATE_PRODUCTS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS products(
        id TEXT NOT NULL PRIMARY KEY,
        name TEXT,
        description TEXT,
        price REAL,
        insertedAt DATETIME
    )
"#;

/// Ensures the `products` table exists.
///
/// Safe to call any number of times.
pub async fn ensure_schema(pool: &SqlitePool) -> DbResult<()> {
    info!("Ensuring products table exists");

    sqlx::query(CREATE_PRODUCTS_TABLE)
        .execute(pool)
        .await
        .map_err(|e| DbError::SchemaFailed(e.to_string()))?;

    Ok(())
}

/// Checks whether the `products` table is present.
///
/// Used by diagnostics and tests.
pub async fn products_table_exists(pool: &SqlitePool) -> DbResult<bool> {
    let count: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = 'products'",
    )
    .fetch_one(pool)
    .await?;

    Ok(count > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};

    #[tokio::test]
    async fn test_schema_is_idempotent() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        assert!(products_table_exists(db.pool()).await.unwrap());

        // A second (and third) run must be a no-op
        ensure_schema(db.pool()).await.unwrap();
        ensure_schema(db.pool()).await.unwrap();
        assert!(products_table_exists(db.pool()).await.unwrap());
    }

    #[tokio::test]
    async fn test_schema_skipped_when_disabled() {
        let config = DbConfig::in_memory().ensure_schema(false);
        let db = Database::new(config).await.unwrap();

        assert!(!products_table_exists(db.pool()).await.unwrap());
    }

    #[tokio::test]
    async fn test_schema_keeps_existing_rows() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        sqlx::query("INSERT INTO products (id, name) VALUES ('1', 'Widget')")
            .execute(db.pool())
            .await
            .unwrap();

        ensure_schema(db.pool()).await.unwrap();

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
            .fetch_one(db.pool())
            .await
            .unwrap();
        assert_eq!(count, 1);
    }
}
