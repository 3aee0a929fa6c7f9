//! # Session
//!
//! One login: the authenticated employee plus the outlet-scoped stock
//! snapshot. The sales history deliberately does NOT live here; it belongs
//! to [`AppState`] so a logout mid-day never erases it.
//!
//! ## Stock Cache Contract
//! The stock ledger is loaded ONCE at login, scoped to the employee's home
//! outlet, and held for the whole session. Mutations are applied in memory
//! and flushed to the table by the command layer; the file is never re-read
//! mid-session. One console per store, so nobody else is writing.
//!
//! ## Degraded Login
//! A missing, malformed, or outlet-less stock table does NOT block login:
//! the session opens with an empty ledger and every stock operation answers
//! not-found. Attendance and reporting still work, which is what matters
//! when someone fat-fingers the data directory at 9am.

use tracing::{info, warn};

use goldenhour_core::types::{Capability, Employee};
use goldenhour_core::StockLedger;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// State for one authenticated login.
#[derive(Debug)]
pub struct Session {
    employee: Employee,

    /// Stock snapshot scoped to the employee's outlet.
    pub stock: StockLedger,
}

impl Session {
    /// Authenticates and opens a session.
    ///
    /// ## Errors
    /// `BadCredentials` on an unknown id or a wrong password, without
    /// distinguishing the two.
    pub fn open(state: &AppState, employee_id: &str, password: &str) -> AppResult<Self> {
        let employee = state
            .find_employee(employee_id.trim())
            .ok_or(AppError::BadCredentials)?;

        if !employee.password_matches(password) {
            return Err(AppError::BadCredentials);
        }

        let stock = match state.store.stock().load(&employee.outlet) {
            Ok(ledger) => ledger,
            Err(err) => {
                warn!(
                    outlet = %employee.outlet,
                    error = %err,
                    "Stock table unavailable, session opens with an empty ledger"
                );
                StockLedger::empty()
            }
        };

        info!(
            employee = %employee.id,
            outlet = %employee.outlet,
            role = employee.role.as_table_str(),
            "Session opened"
        );

        Ok(Session {
            employee: employee.clone(),
            stock,
        })
    }

    pub fn employee(&self) -> &Employee {
        &self.employee
    }

    /// Gate for manager-only actions.
    ///
    /// `action` is the verb phrase shown in the refusal message.
    pub fn require(&self, capability: Capability, action: &'static str) -> AppResult<()> {
        if self.employee.role.can(capability) {
            Ok(())
        } else {
            Err(AppError::Unauthorized { action })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    use goldenhour_core::types::Role;
    use goldenhour_store::Store;
    use tempfile::tempdir;

    use crate::state::ConfigState;

    fn seeded_state(dir: &std::path::Path) -> AppState {
        fs::write(dir.join("outlet.csv"), "C60,Central\n").unwrap();
        fs::write(
            dir.join("employee.csv"),
            "C6013,Jane,Manager,secret\nC6014,Ken,Part-time,pw\n",
        )
        .unwrap();
        fs::write(dir.join("model.csv"), "model,price,C60\nWidget,10.00,5\n").unwrap();

        let store = Store::new(dir);
        let outlets = store.outlets().load().unwrap();
        let employees = store.employees().load().unwrap();
        let attendance = store.attendance().load().unwrap();
        AppState::new(store, ConfigState::default(), outlets, employees, attendance)
    }

    #[test]
    fn test_open_loads_scoped_stock() {
        let dir = tempdir().unwrap();
        let state = seeded_state(dir.path());

        let session = Session::open(&state, "c6013", "secret").unwrap();
        assert_eq!(session.employee().role, Role::Manager);
        assert_eq!(session.stock.len(), 1);
        assert_eq!(session.stock.active_outlet().unwrap().as_str(), "C60");
        assert!(state.sales.is_empty());
    }

    #[test]
    fn test_bad_credentials_do_not_say_which_half() {
        let dir = tempdir().unwrap();
        let state = seeded_state(dir.path());

        let unknown = Session::open(&state, "ZZZ99", "secret").unwrap_err();
        let wrong_pw = Session::open(&state, "C6013", "nope").unwrap_err();
        assert_eq!(unknown.to_string(), wrong_pw.to_string());
    }

    #[test]
    fn test_missing_stock_table_degrades_to_empty_ledger() {
        let dir = tempdir().unwrap();
        let state = seeded_state(dir.path());
        fs::remove_file(dir.path().join("model.csv")).unwrap();

        let session = Session::open(&state, "C6013", "secret").unwrap();
        assert!(session.stock.is_empty());
        assert!(session.stock.active_outlet().is_none());
    }

    #[test]
    fn test_capability_gate() {
        let dir = tempdir().unwrap();
        let state = seeded_state(dir.path());

        let manager = Session::open(&state, "C6013", "secret").unwrap();
        assert!(manager
            .require(Capability::RegisterEmployee, "register employees")
            .is_ok());

        let part_time = Session::open(&state, "C6014", "pw").unwrap();
        let err = part_time
            .require(Capability::DailyReport, "generate the daily report")
            .unwrap_err();
        assert!(matches!(err, AppError::Unauthorized { .. }));
    }
}
