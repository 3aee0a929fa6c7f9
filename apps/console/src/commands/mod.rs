//! # Command Handlers
//!
//! Every menu action goes through exactly one function here.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs         ◄─── You are here (exports, shared persistence helper)
//! ├── attendance.rs  ◄─── Clock in / clock out
//! ├── employee.rs    ◄─── Employee registration
//! ├── sale.rs        ◄─── The sale flow (resolve, commit, receipt)
//! ├── stock.rs       ◄─── Stock movements, counts, search
//! ├── report.rs      ◄─── Daily totals, sales search, summaries, report file
//! └── edit.rs        ◄─── Manager-only record overwrites
//! ```
//!
//! ## Handler Shape
//! Handlers take the state they need explicitly (`&AppState`, `&mut Session`,
//! validated-ish raw inputs, and the timestamp where one is recorded) and
//! return `AppResult`. No prompting, no printing - the menu layer owns the
//! terminal, which keeps every handler testable with a temp data directory.
//!
//! ## Persistence Divergence
//! A handler that has already mutated an in-memory ledger never rolls it
//! back when the follow-up file write fails; the sale (or movement) has
//! already happened against physical stock. The failure comes back as a
//! warning string for the operator, and is logged at error level.

pub mod attendance;
pub mod edit;
pub mod employee;
pub mod report;
pub mod sale;
pub mod stock;

use goldenhour_core::StockLedger;

use crate::state::AppState;

/// Flushes the stock ledger, converting a failure into an operator warning.
///
/// Used after every in-memory stock mutation. See the module docs for why
/// this never rolls back.
pub(crate) fn persist_stock(state: &AppState, stock: &StockLedger) -> Option<String> {
    match state.store.stock().save(stock) {
        Ok(()) => None,
        Err(err) => {
            tracing::error!(error = %err, "Stock table save failed after in-memory commit");
            Some(format!(
                "WARNING: stock table not saved ({err}); records in memory are ahead of disk"
            ))
        }
    }
}

#[cfg(test)]
pub(crate) mod testutil {
    //! Seeded temp data directories shared by the command tests.

    use std::fs;
    use std::path::Path;

    use goldenhour_store::Store;
    use tempfile::{tempdir, TempDir};

    use crate::state::{AppState, ConfigState, Session};

    pub fn seed(dir: &Path) {
        fs::write(dir.join("outlet.csv"), "C60,Central\nKLG,Kuala Lumpur\n").unwrap();
        fs::write(
            dir.join("employee.csv"),
            "C6013,Jane,Manager,secret\nC6014,Ken,Part-time,pw\n",
        )
        .unwrap();
        fs::write(
            dir.join("model.csv"),
            "model,price,C60,KLG\nWidget,10.00,5,12\nGadget,25.50,2,0\n",
        )
        .unwrap();
    }

    pub fn seeded_app() -> (TempDir, AppState) {
        let dir = tempdir().unwrap();
        seed(dir.path());

        let store = Store::new(dir.path());
        let outlets = store.outlets().load().unwrap();
        let employees = store.employees().load().unwrap();
        let attendance = store.attendance().load().unwrap();
        let state = AppState::new(
            store,
            ConfigState::default(),
            outlets,
            employees,
            attendance,
        );
        (dir, state)
    }

    pub fn login(state: &AppState, id: &str, password: &str) -> Session {
        Session::open(state, id, password).unwrap()
    }
}
