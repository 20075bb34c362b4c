//! # catalog-export: Startup Workbook Export
//!
//! Produces the product workbook once per process start.
//!
//! ## Export Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        export_products()                                │
//! │                                                                         │
//! │  ProductRepository::read_all()                                         │
//! │       │                                                                 │
//! │       ├── error? → logged at WARN, export continues                    │
//! │       ▼                                                                 │
//! │  New workbook, default sheet "Sheet1"                                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌──────────────┐                                                       │
//! │  │ A1 Id        │   Labels go down column A.                           │
//! │  │ A2 Name      │   Product rows are not written.                      │
//! │  │ A3 Descr...  │                                                       │
//! │  │ A4 Price     │                                                       │
//! │  └──────────────┘                                                       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  save(path) ── overwrites ── error? → ExportError::Save                │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The binary treats every [`ExportError`] as a warning: the HTTP server
//! starts regardless.

use std::path::{Path, PathBuf};

use catalog_db::ProductRepository;
use rust_xlsxwriter::{Workbook, XlsxError};
use thiserror::Error;
use tracing::{info, warn};

/// Default output file name.
pub const DEFAULT_WORKBOOK_PATH: &str = "Book1.xlsx";

/// Labels written to A1..A4, top to bottom.
pub const HEADER_LABELS: [&str; 4] = ["Id", "Name", "Description", "Price"];

// =============================================================================
// Errors
// =============================================================================

/// Workbook export errors.
#[derive(Debug, Error)]
pub enum ExportError {
    /// A cell could not be written to the in-memory worksheet.
    #[error("Failed to write worksheet: {0}")]
    Worksheet(#[source] XlsxError),

    /// The workbook could not be saved to disk.
    #[error("Failed to save workbook to {}: {source}", path.display())]
    Save {
        path: PathBuf,
        #[source]
        source: XlsxError,
    },
}

/// Result type for export operations.
pub type ExportResult<T> = Result<T, ExportError>;

// =============================================================================
// Export
// =============================================================================

/// What an export run did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    /// Where the workbook was written.
    pub path: PathBuf,

    /// Products returned by the repository, or `None` if the read failed.
    pub products_read: Option<usize>,
}

/// Reads all products and writes the workbook to `path`.
///
/// A repository read error is logged and otherwise ignored; the workbook
/// is still produced. Any existing file at `path` is overwritten.
pub async fn export_products(
    products: &ProductRepository,
    path: impl AsRef<Path>,
) -> ExportResult<ExportSummary> {
    let path = path.as_ref();

    let products_read = match products.read_all().await {
        Ok(items) => Some(items.len()),
        Err(e) => {
            warn!(error = %e, "Could not read products for export, writing labels only");
            None
        }
    };

    let mut workbook = build_workbook()?;

    workbook.save(path).map_err(|source| ExportError::Save {
        path: path.to_path_buf(),
        source,
    })?;

    info!(path = %path.display(), ?products_read, "Workbook exported");

    Ok(ExportSummary {
        path: path.to_path_buf(),
        products_read,
    })
}

/// Builds the in-memory workbook with the column labels.
fn build_workbook() -> ExportResult<Workbook> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    for (row, label) in (0u32..).zip(HEADER_LABELS) {
        worksheet
            .write_string(row, 0, label)
            .map_err(ExportError::Worksheet)?;
    }

    Ok(workbook)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use calamine::{open_workbook, Data, Reader, Xlsx};
    use catalog_core::ProductItem;
    use catalog_db::{Database, DbConfig};

    /// Every populated cell of Sheet1 as (row, col, text).
    fn populated_cells(path: &Path) -> Vec<(usize, usize, String)> {
        let mut workbook: Xlsx<_> = open_workbook(path).unwrap();
        let range = workbook.worksheet_range("Sheet1").unwrap();

        range
            .used_cells()
            .map(|(row, col, value)| {
                let text = match value {
                    Data::String(s) => s.clone(),
                    other => panic!("unexpected cell value {other:?}"),
                };
                (row, col, text)
            })
            .collect()
    }

    fn expected_labels() -> Vec<(usize, usize, String)> {
        vec![
            (0, 0, "Id".to_string()),
            (1, 0, "Name".to_string()),
            (2, 0, "Description".to_string()),
            (3, 0, "Price".to_string()),
        ]
    }

    #[tokio::test]
    async fn test_empty_table_exports_labels_only() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_WORKBOOK_PATH);
        let db = Database::new(DbConfig::in_memory()).await.unwrap();

        let summary = export_products(&db.products(), &path).await.unwrap();

        assert_eq!(summary.products_read, Some(0));
        assert_eq!(summary.path, path);
        assert_eq!(populated_cells(&path), expected_labels());
    }

    #[tokio::test]
    async fn test_products_are_read_but_not_written() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_WORKBOOK_PATH);
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        db.products()
            .store(&[
                ProductItem::new("1", "Widget", "A widget", "9.99"),
                ProductItem::new("2", "Gadget", "A gadget", "5"),
            ])
            .await
            .unwrap();

        let summary = export_products(&db.products(), &path).await.unwrap();

        assert_eq!(summary.products_read, Some(2));
        assert_eq!(populated_cells(&path), expected_labels());
    }

    #[tokio::test]
    async fn test_read_failure_still_exports() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_WORKBOOK_PATH);
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        sqlx::query("DROP TABLE products")
            .execute(db.pool())
            .await
            .unwrap();

        let summary = export_products(&db.products(), &path).await.unwrap();

        assert_eq!(summary.products_read, None);
        assert_eq!(populated_cells(&path), expected_labels());
    }

    #[tokio::test]
    async fn test_existing_file_is_overwritten() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_WORKBOOK_PATH);
        std::fs::write(&path, b"not a workbook").unwrap();
        let db = Database::new(DbConfig::in_memory()).await.unwrap();

        export_products(&db.products(), &path).await.unwrap();

        assert_eq!(populated_cells(&path), expected_labels());
    }

    #[tokio::test]
    async fn test_save_failure_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join(DEFAULT_WORKBOOK_PATH);
        let db = Database::new(DbConfig::in_memory()).await.unwrap();

        let err = export_products(&db.products(), &path).await.unwrap_err();
        assert!(matches!(err, ExportError::Save { .. }), "got {err:?}");
    }
}
