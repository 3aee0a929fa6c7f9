//! # Outlet Table
//!
//! `outlet.csv`: rows of `code,displayName`. Loaded once at startup into the
//! read-only [`OutletDirectory`]; there is no write path (outlet
//! registration is out of scope for the console).

use std::path::PathBuf;

use tracing::debug;

use goldenhour_core::types::{OutletCode, OutletDirectory};

use crate::error::{StoreError, StoreResult};
use crate::read_rows;

const TABLE: &str = "outlet";

/// Accessor for the outlet table file.
#[derive(Debug, Clone)]
pub struct OutletTable {
    path: PathBuf,
}

impl OutletTable {
    pub(crate) fn new(path: PathBuf) -> Self {
        OutletTable { path }
    }

    /// Loads the full directory in file order.
    pub fn load(&self) -> StoreResult<OutletDirectory> {
        let mut entries = Vec::new();

        for (line, row) in read_rows(TABLE, &self.path)? {
            let mut cols = row.splitn(2, ',');
            let code_text = cols.next().unwrap_or_default();
            let name = cols.next().ok_or(StoreError::Malformed {
                table: TABLE,
                line,
                reason: "expected code,displayName".to_string(),
            })?;

            let code = OutletCode::parse(code_text).map_err(|e| StoreError::Malformed {
                table: TABLE,
                line,
                reason: e.to_string(),
            })?;

            entries.push((code, name.trim().to_string()));
        }

        debug!(outlets = entries.len(), "Outlet directory loaded");
        Ok(OutletDirectory::new(entries))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn table_with(content: &str) -> (tempfile::TempDir, OutletTable) {
        let dir = tempdir().unwrap();
        let path = dir.path().join("outlet.csv");
        fs::write(&path, content).unwrap();
        (dir, OutletTable::new(path))
    }

    #[test]
    fn test_load_directory() {
        let (_dir, table) = table_with("C60,Central\nKLG,Kuala Lumpur\n");
        let directory = table.load().unwrap();

        let c60 = OutletCode::parse("C60").unwrap();
        assert_eq!(directory.resolve(&c60), Some("Central"));
        assert_eq!(directory.iter().count(), 2);
    }

    #[test]
    fn test_blank_lines_skipped() {
        let (_dir, table) = table_with("C60,Central\n\n\nKLG,Kuala Lumpur\n");
        assert_eq!(table.load().unwrap().iter().count(), 2);
    }

    #[test]
    fn test_malformed_row_reports_line() {
        let (_dir, table) = table_with("C60,Central\njust-a-code\n");
        let err = table.load().unwrap_err();
        assert!(matches!(err, StoreError::Malformed { line: 2, .. }));
    }

    #[test]
    fn test_bad_code_rejected() {
        let (_dir, table) = table_with("TOOLONG,Somewhere\n");
        assert!(matches!(
            table.load().unwrap_err(),
            StoreError::Malformed { line: 1, .. }
        ));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempdir().unwrap();
        let table = OutletTable::new(dir.path().join("outlet.csv"));
        assert!(matches!(
            table.load().unwrap_err(),
            StoreError::TableMissing { .. }
        ));
    }
}
