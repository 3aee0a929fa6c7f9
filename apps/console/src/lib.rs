//! # Goldenhour Store Console
//!
//! Library crate behind the `goldenhour` binary.
//!
//! ## Startup Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Startup Sequence                                   │
//! │                                                                         │
//! │  1. Parse CLI args (data dir, store name, currency, cutoff)            │
//! │  2. Init tracing (RUST_LOG, default "info")                            │
//! │  3. Load outlet.csv      ── FATAL if missing or malformed              │
//! │  4. Load employee.csv    ── FATAL if missing or malformed              │
//! │  5. Load attendance.csv  ── missing file = empty log, fine             │
//! │  6. Enter the login loop (stock loads happen per session)              │
//! │                                                                         │
//! │  Outlets and employees are the ground truth for login and scoping;    │
//! │  starting without them would let anyone in and nothing work. Stock is  │
//! │  per-session state and degrades gracefully instead.                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod commands;
pub mod error;
pub mod menu;
pub mod state;

pub use error::{AppError, AppResult};

use std::path::PathBuf;

use chrono::NaiveTime;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use goldenhour_store::Store;

use crate::state::{AppState, ConfigState};

/// Command line arguments for the store console.
#[derive(Debug, Parser)]
#[command(name = "goldenhour", about = "Goldenhour single-store management console", version)]
pub struct Cli {
    /// Directory holding the store's data tables
    #[arg(long, default_value = "./data")]
    pub data_dir: PathBuf,

    /// Store name shown in the menu banner
    #[arg(long, default_value = "GOLDENHOUR STORE")]
    pub store_name: String,

    /// Currency symbol printed on receipts and reports
    #[arg(long, default_value = "RM")]
    pub currency: String,

    /// Closing time; daily reports generated later carry a warning
    #[arg(long, default_value = "22:00:00")]
    pub closing_time: NaiveTime,
}

impl Cli {
    fn config(&self) -> ConfigState {
        ConfigState {
            store_name: self.store_name.clone(),
            currency_symbol: self.currency.clone(),
            report_cutoff: self.closing_time,
        }
    }
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();
}

/// Loads startup state and runs the console until the operator exits.
pub fn run(cli: Cli) -> AppResult<()> {
    init_tracing();

    let store = Store::new(&cli.data_dir);
    info!(data_dir = %store.data_dir().display(), "Starting store console");

    let outlets = store.outlets().load()?;
    let employees = store.employees().load()?;
    let attendance = store.attendance().load()?;
    info!(
        outlets = outlets.iter().count(),
        employees = employees.len(),
        "Startup tables loaded"
    );

    let mut state = AppState::new(store, cli.config(), outlets, employees, attendance);
    menu::login_loop(&mut state)?;

    info!("Console exiting");
    Ok(())
}
