//! # Store Error Types
//!
//! Error types for flat-file persistence.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  std::io::Error (file unreadable/unwritable)                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreError (this module) ← Adds table name and line context           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  AppError (console app) ← Rendered for the operator                    │
//! │                                                                         │
//! │  A StoreError AFTER an in-memory commit means memory and disk have     │
//! │  diverged; the app surfaces that explicitly instead of swallowing it.  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Flat-file persistence errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Backing table file does not exist.
    ///
    /// ## When This Occurs
    /// - Fresh data directory with no seed files
    /// - Wrong `--data-dir` argument
    #[error("{table} table missing at {path}")]
    TableMissing { table: &'static str, path: PathBuf },

    /// A row (or the header) could not be parsed.
    ///
    /// Line numbers are 1-based file lines, so the operator can open the
    /// file and look.
    #[error("{table} table malformed at line {line}: {reason}")]
    Malformed {
        table: &'static str,
        line: usize,
        reason: String,
    },

    /// The stock table has no column for the session's outlet.
    ///
    /// The session continues with an empty scoped ledger; stock operations
    /// then report not-found instead of crashing.
    #[error("stock table has no column for outlet {outlet}")]
    OutletColumnMissing { outlet: String },

    /// Underlying filesystem failure (permissions, disk full, ...).
    #[error("file access failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_carry_context() {
        let err = StoreError::Malformed {
            table: "stock",
            line: 3,
            reason: "quantity is not a number".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "stock table malformed at line 3: quantity is not a number"
        );

        let err = StoreError::OutletColumnMissing {
            outlet: "ZZZ".to_string(),
        };
        assert_eq!(err.to_string(), "stock table has no column for outlet ZZZ");
    }
}
