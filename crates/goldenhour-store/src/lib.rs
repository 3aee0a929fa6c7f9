//! # goldenhour-store: Flat-File Persistence for the Store Console
//!
//! The durability layer: every table is a comma-delimited text file in one
//! data directory, rewritten in full on mutation (last-writer-wins, single
//! process). The formats are legacy and preserved byte-compatibly so the
//! files interoperate with the spreadsheets the store already uses.
//!
//! ## Tables
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  data_dir/                                                              │
//! │  ├── outlet.csv                 code,displayName                        │
//! │  ├── employee.csv               id,name,role,password                   │
//! │  ├── attendance.csv             employeeId,date,in,out_or_empty,outlet  │
//! │  ├── model.csv                  model,price,<code1>,<code2>,...         │
//! │  ├── sales_receipt_<date>.txt   human-readable, append mode             │
//! │  └── daily_report_<date>.txt    manager summary, overwritten            │
//! │                                                                         │
//! │  The stock save path MUST round-trip every outlet column, including    │
//! │  the ones the saving session never read. That is the single highest-   │
//! │  value correctness property of the whole system.                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Known Limitation
//! Two processes sharing a data directory race each other; nothing here
//! arbitrates cross-process access. One console per store.

pub mod attendance;
pub mod employee;
pub mod error;
pub mod outlet;
pub mod receipt;
pub mod stock;

pub use error::{StoreError, StoreResult};

use std::path::{Path, PathBuf};

use attendance::AttendanceTable;
use employee::EmployeeTable;
use outlet::OutletTable;
use receipt::ReceiptBook;
use stock::StockTable;

// =============================================================================
// File Names (legacy, do not rename)
// =============================================================================

pub const OUTLET_FILE: &str = "outlet.csv";
pub const EMPLOYEE_FILE: &str = "employee.csv";
pub const ATTENDANCE_FILE: &str = "attendance.csv";
pub const STOCK_FILE: &str = "model.csv";

// =============================================================================
// Store
// =============================================================================

/// Handle to one data directory, exposing a per-table accessor.
///
/// ## Usage
/// ```rust,no_run
/// use goldenhour_store::Store;
///
/// let store = Store::new("./data");
/// let directory = store.outlets().load()?;
/// let employees = store.employees().load()?;
/// # Ok::<(), goldenhour_store::StoreError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Store {
    data_dir: PathBuf,
}

impl Store {
    /// Creates a store rooted at `data_dir`. The directory is not created
    /// here; startup fails loudly on a missing directory instead of
    /// silently working against an empty one.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Store {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// The outlet directory table (read-only).
    pub fn outlets(&self) -> OutletTable {
        OutletTable::new(self.data_dir.join(OUTLET_FILE))
    }

    /// The employee table.
    pub fn employees(&self) -> EmployeeTable {
        EmployeeTable::new(self.data_dir.join(EMPLOYEE_FILE))
    }

    /// The attendance table.
    pub fn attendance(&self) -> AttendanceTable {
        AttendanceTable::new(self.data_dir.join(ATTENDANCE_FILE))
    }

    /// The stock table (per-outlet quantity columns).
    pub fn stock(&self) -> StockTable {
        StockTable::new(self.data_dir.join(STOCK_FILE))
    }

    /// Receipt and report artifacts (one file per calendar date).
    pub fn receipts(&self) -> ReceiptBook {
        ReceiptBook::new(self.data_dir.clone())
    }
}

// =============================================================================
// Shared Row Helpers
// =============================================================================

/// Reads a table file into (1-based line number, line) pairs, skipping
/// blank lines. A missing file maps to [`StoreError::TableMissing`].
pub(crate) fn read_rows(table: &'static str, path: &Path) -> StoreResult<Vec<(usize, String)>> {
    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Err(StoreError::TableMissing {
                table,
                path: path.to_path_buf(),
            });
        }
        Err(err) => return Err(err.into()),
    };

    Ok(text
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.to_string()))
        .filter(|(_, line)| !line.trim().is_empty())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_paths() {
        let store = Store::new("/tmp/gh-data");
        assert_eq!(store.data_dir(), Path::new("/tmp/gh-data"));
    }

    #[test]
    fn test_read_rows_missing_file() {
        let err = read_rows("outlet", Path::new("/definitely/not/here.csv")).unwrap_err();
        assert!(matches!(err, StoreError::TableMissing { table: "outlet", .. }));
    }
}
