//! # Stock Table
//!
//! `model.csv`: header `model,price,<code1>,<code2>,...`, data rows aligned
//! positionally to the header's outlet columns.
//!
//! ## The One Property That Matters
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ROUND-TRIP ALL COLUMNS                                                 │
//! │                                                                         │
//! │  A session scoped to C60 reads only the C60 column, but the ledger     │
//! │  it holds carries EVERY column, and save() writes EVERY column back.   │
//! │                                                                         │
//! │  load(C60):  model,price,C60,KLG     save():  model,price,C60,KLG      │
//! │              Widget,10.00,5,12  ───►          Widget,10.00,2,12        │
//! │                          ▲  ▲                             ▲  ▲          │
//! │                     sold 3  never read              updated  preserved  │
//! │                                                                         │
//! │  A save that dropped the KLG column would silently destroy another     │
//! │  outlet's inventory records.                                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fs;
use std::path::PathBuf;

use tracing::{debug, warn};

use goldenhour_core::error::CoreError;
use goldenhour_core::money::Money;
use goldenhour_core::stock::{StockLedger, StockModel};
use goldenhour_core::types::OutletCode;

use crate::error::{StoreError, StoreResult};
use crate::read_rows;

const TABLE: &str = "stock";

/// Accessor for the stock table file.
#[derive(Debug, Clone)]
pub struct StockTable {
    path: PathBuf,
}

impl StockTable {
    pub(crate) fn new(path: PathBuf) -> Self {
        StockTable { path }
    }

    /// Loads the table into a ledger scoped to `active`.
    ///
    /// ## Errors
    /// - `TableMissing` / `Malformed` - the backing table is unusable
    /// - `OutletColumnMissing` - the header has no column for `active`
    ///
    /// On any of these the caller substitutes an empty ledger so the
    /// session degrades to not-found answers instead of crashing.
    pub fn load(&self, active: &OutletCode) -> StoreResult<StockLedger> {
        let rows = read_rows(TABLE, &self.path)?;
        let mut rows = rows.into_iter();

        let (header_line, header) = rows.next().ok_or(StoreError::Malformed {
            table: TABLE,
            line: 1,
            reason: "empty table (missing header row)".to_string(),
        })?;

        // Header: model,price,<code>... - the first two labels are not
        // validated, only the outlet codes are.
        let header_cols: Vec<&str> = header.split(',').collect();
        if header_cols.len() < 3 {
            return Err(StoreError::Malformed {
                table: TABLE,
                line: header_line,
                reason: "header needs model, price, and at least one outlet column".to_string(),
            });
        }

        let mut outlets = Vec::new();
        for code_text in &header_cols[2..] {
            let code = OutletCode::parse(code_text).map_err(|e| StoreError::Malformed {
                table: TABLE,
                line: header_line,
                reason: format!("bad outlet column: {e}"),
            })?;
            outlets.push(code);
        }

        let mut ledger = match StockLedger::new(outlets, active) {
            Ok(ledger) => ledger,
            Err(CoreError::OutletNotFound(outlet)) => {
                return Err(StoreError::OutletColumnMissing { outlet });
            }
            // StockLedger::new only fails with OutletNotFound.
            Err(err) => {
                return Err(StoreError::Malformed {
                    table: TABLE,
                    line: header_line,
                    reason: err.to_string(),
                });
            }
        };

        for (line, row) in rows {
            let cols: Vec<&str> = row.split(',').collect();
            if cols.len() != header_cols.len() {
                return Err(StoreError::Malformed {
                    table: TABLE,
                    line,
                    reason: format!(
                        "{} columns, header has {}",
                        cols.len(),
                        header_cols.len()
                    ),
                });
            }

            let malformed = |reason: String| StoreError::Malformed {
                table: TABLE,
                line,
                reason,
            };

            let model_name = cols[0].trim().to_string();
            let price = Money::parse(cols[1]).map_err(|e| malformed(format!("bad price: {e}")))?;

            let mut quantities = Vec::with_capacity(cols.len() - 2);
            for qty_text in &cols[2..] {
                let qty: i64 = qty_text
                    .trim()
                    .parse()
                    .map_err(|_| malformed(format!("quantity '{}' is not a number", qty_text.trim())))?;
                quantities.push(qty);
            }

            // Accepted-if-discouraged: duplicates load, first match wins on
            // scans. Flag them so someone cleans the table up.
            if ledger.find_by_model(&model_name).is_some() {
                warn!(model = %model_name, line, "Duplicate model name in stock table");
            }

            ledger
                .push(StockModel {
                    model_name,
                    price_cents: price.cents(),
                    quantities,
                })
                .map_err(|e| malformed(e.to_string()))?;
        }

        debug!(
            models = ledger.len(),
            outlet = %active,
            "Stock ledger loaded"
        );
        Ok(ledger)
    }

    /// Rewrites the full table: every model row, every outlet column,
    /// including columns the saving session never read.
    pub fn save(&self, ledger: &StockLedger) -> StoreResult<()> {
        let mut out = String::from("model,price");
        for code in ledger.outlets() {
            out.push(',');
            out.push_str(code.as_str());
        }
        out.push('\n');

        for row in ledger.rows() {
            out.push_str(&row.model_name);
            out.push(',');
            out.push_str(&row.price().to_string());
            for qty in &row.quantities {
                out.push_str(&format!(",{qty}"));
            }
            out.push('\n');
        }

        fs::write(&self.path, out)?;
        debug!(models = ledger.len(), "Stock table saved");
        Ok(())
    }
}
