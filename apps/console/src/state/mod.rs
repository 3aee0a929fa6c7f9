//! # State Module
//!
//! Application and session state for the console.
//!
//! ## Two Lifetimes
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       State Lifetimes                                   │
//! │                                                                         │
//! │  AppState (process lifetime)          Session (login → logout)         │
//! │  ┌──────────────────────────┐         ┌──────────────────────────┐     │
//! │  │  Store (data dir handle) │         │  employee (who is here)  │     │
//! │  │  ConfigState             │  login  │  StockLedger (scoped to  │     │
//! │  │  OutletDirectory         │ ──────► │    the employee outlet)  │     │
//! │  │  employees               │         │                          │     │
//! │  │  AttendanceLog           │  logout │                          │     │
//! │  │  SalesLedger (the whole  │ ◄────── └──────────────────────────┘     │
//! │  │    day, across logins)   │           (dropped)                       │
//! │  └──────────────────────────┘                                           │
//! │                                                                         │
//! │  NO GLOBALS. Everything is owned here and passed to the command        │
//! │  handlers explicitly, so every handler is testable in isolation.       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod session;

pub use config::ConfigState;
pub use session::Session;

use goldenhour_core::attendance::AttendanceLog;
use goldenhour_core::types::{Employee, OutletDirectory};
use goldenhour_core::SalesLedger;
use goldenhour_store::Store;

/// Process-lifetime state, loaded once at startup.
#[derive(Debug)]
pub struct AppState {
    /// Handle to the data directory.
    pub store: Store,

    /// Store-wide configuration.
    pub config: ConfigState,

    /// Outlet code → display name, read-only after startup.
    pub outlets: OutletDirectory,

    /// All registered employees; mutated only by employee registration.
    pub employees: Vec<Employee>,

    /// Full shift history; mutated by clock in/out.
    pub attendance: AttendanceLog,

    /// Sales committed since the process started. Lives here, not on the
    /// session, so the day's history survives a logout and re-login.
    pub sales: SalesLedger,
}

impl AppState {
    pub fn new(
        store: Store,
        config: ConfigState,
        outlets: OutletDirectory,
        employees: Vec<Employee>,
        attendance: AttendanceLog,
    ) -> Self {
        AppState {
            store,
            config,
            outlets,
            employees,
            attendance,
            sales: SalesLedger::new(),
        }
    }

    /// Looks up an employee by id, case-insensitively; ids are stored
    /// uppercased but operators type them however.
    pub fn find_employee(&self, id: &str) -> Option<&Employee> {
        self.employees.iter().find(|e| e.id.eq_ignore_ascii_case(id))
    }
}
