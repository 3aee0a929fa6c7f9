//! # Sale Commands
//!
//! The menu-facing half of the checkout flow.
//!
//! ## Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Sale Command Flow                                 │
//! │                                                                         │
//! │  menu: customer + model  ──► begin_sale ──► ResolvedSale                │
//! │                                               (price + available        │
//! │  menu: shows availability,                     shown to operator)       │
//! │        asks quantity     ──► .with_quantity(n) ──► ValidatedSale        │
//! │                                                                         │
//! │  menu: shows total,                                                     │
//! │        asks payment      ──► commit_sale ──► SaleOutcome                │
//! │                               │                 record                  │
//! │                               │                 receipt_path            │
//! │                               │                 warnings                │
//! │                               ├── stock table saved (all columns)       │
//! │                               └── receipt block appended                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `commit_sale` reads no clock: the menu captures the timestamp once and
//! passes it in, so the record and the receipt carry the same instant.

use std::path::PathBuf;

use chrono::NaiveDateTime;
use tracing::{error, info};

use goldenhour_core::checkout::{ResolvedSale, SaleDraft, ValidatedSale};
use goldenhour_core::types::SaleRecord;

use crate::error::AppResult;
use crate::state::{AppState, Session};

/// What the operator gets back from a committed sale.
#[derive(Debug)]
pub struct SaleOutcome {
    /// The committed record (already appended to the sales history).
    pub record: SaleRecord,

    /// Where the receipt block was appended, when that write succeeded.
    pub receipt_path: Option<PathBuf>,

    /// Persistence problems the operator must be told about.
    pub warnings: Vec<String>,
}

/// Resolves customer and model against the session's stock ledger.
///
/// Fails fast on an unknown model or zero stock, before the operator is
/// asked for a quantity.
pub fn begin_sale(session: &Session, customer: &str, model: &str) -> AppResult<ResolvedSale> {
    Ok(SaleDraft::new(customer, model)?.resolve(&session.stock)?)
}

/// Commits a validated sale and persists its side effects.
///
/// In-memory commit first (stock decrement + history append, atomic as one
/// call; the history lives on `AppState` and outlives the login). The two
/// file writes that follow are each reported as warnings on failure, never
/// rolled back - the units already left the shelf.
pub fn commit_sale(
    state: &mut AppState,
    session: &mut Session,
    sale: ValidatedSale,
    payment_method: &str,
    committed_at: NaiveDateTime,
) -> AppResult<SaleOutcome> {
    let employee_name = session.employee().name.clone();
    let record = sale.commit(
        &mut session.stock,
        &mut state.sales,
        payment_method,
        &employee_name,
        committed_at,
    )?;

    let mut warnings = Vec::new();
    if let Some(warning) = super::persist_stock(state, &session.stock) {
        warnings.push(warning);
    }

    let receipt_path = match state
        .store
        .receipts()
        .append_receipt(&record, &state.config.currency_symbol)
    {
        Ok(path) => Some(path),
        Err(err) => {
            error!(error = %err, "Receipt append failed after committed sale");
            warnings.push(format!("WARNING: receipt not written ({err})"));
            None
        }
    };

    info!(
        model = %record.model_name,
        quantity = record.quantity,
        total = %record.total(),
        "Sale committed"
    );

    Ok(SaleOutcome {
        record,
        receipt_path,
        warnings,
    })
}
