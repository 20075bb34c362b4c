//! # Product Repository
//!
//! Database operations for products.
//!
//! ## Key Operations
//! - `store`: insert-or-replace a batch, stamping `insertedAt`
//! - `read_all`: every product, most recently written first
//!
//! ## Write Path
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      store([a, b, c])                                   │
//! │                                                                         │
//! │  acquire connection                                                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  prepare INSERT OR REPLACE ──── error? ──► DbError::PrepareFailed      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  for each product (no transaction):                                    │
//! │     parse price ─────────────── error? ──► DbError::InvalidPrice       │
//! │     execute     ─────────────── error? ──► DbError::RowWriteFailed     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Ok(rows written)                                                      │
//! │                                                                         │
//! │  Rows written before a failure stay written.                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::Utc;
use sqlx::{Executor, FromRow, SqlitePool, Statement};
use tracing::debug;

use crate::error::{DbError, DbResult};
use catalog_core::validation::{format_price, parse_price};
use catalog_core::ProductItem;

/// Timestamp layout for `insertedAt`.
///
/// Fixed-width with microseconds so text ordering matches time ordering
/// and SQLite's `datetime()` still understands it.
pub const INSERTED_AT_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

const INSERT_OR_REPLACE_PRODUCT: &str = r#"
    INSERT OR REPLACE INTO products (id, name, description, price, insertedAt)
    VALUES (?1, ?2, ?3, ?4, ?5)
"#;

// rowid breaks ties between writes that share a timestamp; a replaced row
// always gets a fresh, larger rowid.
const SELECT_ALL_PRODUCTS: &str = r#"
    SELECT id, name, description, price
    FROM products
    ORDER BY insertedAt DESC, rowid DESC
"#;

/// Raw row shape of the `products` table.
#[derive(Debug, FromRow)]
struct ProductRow {
    id: String,
    name: Option<String>,
    description: Option<String>,
    price: Option<f64>,
}

impl From<ProductRow> for ProductItem {
    fn from(row: ProductRow) -> Self {
        ProductItem {
            id: row.id,
            name: row.name.unwrap_or_default(),
            description: row.description.unwrap_or_default(),
            price: format_price(row.price),
        }
    }
}

/// Repository for product database operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = ProductRepository::new(pool);
///
/// repo.store(&[ProductItem::new("1", "Widget", "A widget", "9.99")]).await?;
/// let products = repo.read_all().await?;
/// ```
#[derive(Debug, Clone)]
pub struct ProductRepository {
    pool: SqlitePool,
}

impl ProductRepository {
    /// Creates a new ProductRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ProductRepository { pool }
    }

    /// Inserts or replaces each product, in order.
    ///
    /// Every row gets `insertedAt` set to the current UTC time at the moment
    /// it is written. An existing row with the same `id` is replaced
    /// entirely.
    ///
    /// ## Returns
    /// * `Ok(n)` - All `n` products written
    /// * `Err(DbError::PrepareFailed)` - Nothing was written
    /// * `Err(DbError::InvalidPrice)` / `Err(DbError::RowWriteFailed)` -
    ///   writing stopped at the named product; earlier rows are kept
    pub async fn store(&self, products: &[ProductItem]) -> DbResult<usize> {
        debug!(count = products.len(), "Storing products");

        let mut conn = self.pool.acquire().await?;

        let statement = (&mut *conn)
            .prepare(INSERT_OR_REPLACE_PRODUCT)
            .await
            .map_err(|e| DbError::PrepareFailed(e.to_string()))?;

        let mut written = 0;

        for product in products {
            let price = parse_price(&product.price).map_err(|source| DbError::InvalidPrice {
                id: product.id.clone(),
                written,
                source,
            })?;

            let inserted_at = Utc::now().format(INSERTED_AT_FORMAT).to_string();

            statement
                .query()
                .bind(product.id.as_str())
                .bind(product.name.as_str())
                .bind(product.description.as_str())
                .bind(price)
                .bind(inserted_at)
                .execute(&mut *conn)
                .await
                .map_err(|e| DbError::RowWriteFailed {
                    id: product.id.clone(),
                    written,
                    message: e.to_string(),
                })?;

            written += 1;
        }

        debug!(written, "Products stored");
        Ok(written)
    }

    /// Reads every product, most recently written first.
    ///
    /// ## Returns
    /// * `Ok(products)` - Possibly empty
    /// * `Err(DbError::QueryFailed)` - The SELECT itself failed
    /// * `Err(DbError::DecodeFailed)` - Some row could not be decoded; no
    ///   partial result is returned
    pub async fn read_all(&self) -> DbResult<Vec<ProductItem>> {
        let rows = sqlx::query(SELECT_ALL_PRODUCTS)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DbError::QueryFailed(e.to_string()))?;

        let products = rows
            .iter()
            .map(|row| {
                ProductRow::from_row(row)
                    .map(ProductItem::from)
                    .map_err(|e| DbError::DecodeFailed(e.to_string()))
            })
            .collect::<DbResult<Vec<_>>>()?;

        debug!(count = products.len(), "Read products");
        Ok(products)
    }

    /// Counts stored products (for diagnostics).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};

    async fn repo() -> (Database, ProductRepository) {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let repo = db.products();
        (db, repo)
    }

    fn widget() -> ProductItem {
        ProductItem::new("1", "Widget", "A widget", "9.99")
    }

    #[tokio::test]
    async fn test_read_all_empty() {
        let (_db, repo) = repo().await;

        let products = repo.read_all().await.unwrap();
        assert!(products.is_empty());
    }

    #[tokio::test]
    async fn test_store_then_read_round_trip() {
        let (_db, repo) = repo().await;

        let written = repo.store(&[widget()]).await.unwrap();
        assert_eq!(written, 1);

        let products = repo.read_all().await.unwrap();
        assert_eq!(products, vec![widget()]);
    }

    #[tokio::test]
    async fn test_batch_reads_back_newest_first() {
        let (_db, repo) = repo().await;

        let batch = vec![
            ProductItem::new("a", "Apple", "Red", "1.5"),
            ProductItem::new("b", "Banana", "Yellow", "0.25"),
            ProductItem::new("c", "Cherry", "Dark", "12"),
        ];
        assert_eq!(repo.store(&batch).await.unwrap(), 3);

        let products = repo.read_all().await.unwrap();
        let expected: Vec<_> = batch.into_iter().rev().collect();
        assert_eq!(products, expected);
    }

    #[tokio::test]
    async fn test_separate_writes_newest_first() {
        let (_db, repo) = repo().await;

        for id in ["first", "second", "third"] {
            repo.store(&[ProductItem::new(id, id, "", "1")]).await.unwrap();
        }

        let ids: Vec<_> = repo
            .read_all()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(ids, vec!["third", "second", "first"]);
    }

    #[tokio::test]
    async fn test_same_id_replaces_row() {
        let (_db, repo) = repo().await;

        repo.store(&[widget()]).await.unwrap();
        repo.store(&[ProductItem::new("2", "Gadget", "Other", "3")])
            .await
            .unwrap();
        repo.store(&[ProductItem::new("1", "Sprocket", "Replaced", "4.5")])
            .await
            .unwrap();

        let products = repo.read_all().await.unwrap();
        assert_eq!(products.len(), 2);
        // The replaced row counts as the most recent write
        assert_eq!(
            products[0],
            ProductItem::new("1", "Sprocket", "Replaced", "4.5")
        );
        assert_eq!(products[1].id, "2");
        assert_eq!(repo.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_empty_fields_are_accepted() {
        let (_db, repo) = repo().await;

        repo.store(&[ProductItem::default()]).await.unwrap();

        let products = repo.read_all().await.unwrap();
        assert_eq!(products, vec![ProductItem::default()]);

        let null_prices: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM products WHERE price IS NULL")
                .fetch_one(&repo.pool)
                .await
                .unwrap();
        assert_eq!(null_prices, 1);
    }

    #[tokio::test]
    async fn test_price_is_stored_as_real() {
        let (_db, repo) = repo().await;
        repo.store(&[widget()]).await.unwrap();

        let kind: String = sqlx::query_scalar("SELECT typeof(price) FROM products")
            .fetch_one(&repo.pool)
            .await
            .unwrap();
        assert_eq!(kind, "real");
    }

    #[tokio::test]
    async fn test_inserted_at_is_set() {
        let (_db, repo) = repo().await;
        let before = Utc::now().format(INSERTED_AT_FORMAT).to_string();

        repo.store(&[widget()]).await.unwrap();

        let inserted_at: String = sqlx::query_scalar("SELECT insertedAt FROM products")
            .fetch_one(&repo.pool)
            .await
            .unwrap();
        assert!(inserted_at >= before);

        // SQLite can still interpret the stored value as a date
        let parsed: Option<String> = sqlx::query_scalar("SELECT datetime(insertedAt) FROM products")
            .fetch_one(&repo.pool)
            .await
            .unwrap();
        assert!(parsed.is_some());
    }

    #[tokio::test]
    async fn test_invalid_price_stops_batch_without_rollback() {
        let (_db, repo) = repo().await;

        let batch = vec![
            ProductItem::new("1", "Good", "", "1.00"),
            ProductItem::new("2", "Bad", "", "one dollar"),
            ProductItem::new("3", "Never", "", "3.00"),
        ];

        let err = repo.store(&batch).await.unwrap_err();
        match err {
            DbError::InvalidPrice { id, written, .. } => {
                assert_eq!(id, "2");
                assert_eq!(written, 1);
            }
            other => panic!("expected InvalidPrice, got {other:?}"),
        }

        let products = repo.read_all().await.unwrap();
        assert_eq!(products, vec![ProductItem::new("1", "Good", "", "1")]);
    }

    #[tokio::test]
    async fn test_row_write_failure_stops_batch_without_rollback() {
        let (db, repo) = repo().await;
        sqlx::query(
            "CREATE TRIGGER reject_two BEFORE INSERT ON products \
             WHEN NEW.id = '2' BEGIN SELECT RAISE(ABORT, 'boom'); END",
        )
        .execute(db.pool())
        .await
        .unwrap();

        let batch = vec![
            ProductItem::new("1", "Good", "", "1"),
            ProductItem::new("2", "Rejected", "", "2"),
            ProductItem::new("3", "Never", "", "3"),
        ];

        let err = repo.store(&batch).await.unwrap_err();
        match err {
            DbError::RowWriteFailed {
                id,
                written,
                message,
            } => {
                assert_eq!(id, "2");
                assert_eq!(written, 1);
                assert!(message.contains("boom"), "message: {message}");
            }
            other => panic!("expected RowWriteFailed, got {other:?}"),
        }

        let products = repo.read_all().await.unwrap();
        assert_eq!(products, vec![ProductItem::new("1", "Good", "", "1")]);

        // The repository stays usable after the failure
        assert_eq!(
            repo.store(&[ProductItem::new("4", "Later", "", "4")])
                .await
                .unwrap(),
            1
        );
        assert_eq!(repo.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_empty_batch_writes_nothing() {
        let (_db, repo) = repo().await;

        assert_eq!(repo.store(&[]).await.unwrap(), 0);
        assert_eq!(repo.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_missing_table_fails_prepare_and_query() {
        let (db, repo) = repo().await;
        sqlx::query("DROP TABLE products")
            .execute(db.pool())
            .await
            .unwrap();

        let err = repo.store(&[widget()]).await.unwrap_err();
        assert!(matches!(err, DbError::PrepareFailed(_)), "got {err:?}");

        let err = repo.read_all().await.unwrap_err();
        assert!(matches!(err, DbError::QueryFailed(_)), "got {err:?}");
    }

    #[tokio::test]
    async fn test_undecodable_row_fails_whole_read() {
        let (db, repo) = repo().await;
        repo.store(&[widget()]).await.unwrap();

        // Text that isn't numeric keeps TEXT storage class in a REAL column
        sqlx::query(
            "INSERT INTO products (id, name, description, price, insertedAt) \
             VALUES ('legacy', 'Old', '', 'n/a', '2000-01-01 00:00:00.000000')",
        )
        .execute(db.pool())
        .await
        .unwrap();

        let err = repo.read_all().await.unwrap_err();
        assert!(matches!(err, DbError::DecodeFailed(_)), "got {err:?}");
    }
}
