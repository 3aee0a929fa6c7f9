//! # Reporting Commands
//!
//! Read-only projections of the process-wide sales history, plus the
//! manager-only daily report artifact.
//!
//! The history lives on [`AppState`], so every projection here sees the
//! whole day regardless of who is logged in or how many times the console
//! has been handed over.

use std::path::PathBuf;

use chrono::{NaiveDate, NaiveDateTime};
use tracing::info;

use goldenhour_core::sales::EmployeeSales;
use goldenhour_core::types::{Capability, SaleRecord};
use goldenhour_core::{validation, Money};

use crate::error::AppResult;
use crate::state::{AppState, Session};

/// Total and transaction count for one calendar date (exact match).
pub fn daily_sales(state: &AppState, date: NaiveDate) -> (Money, usize) {
    let total = state.sales.daily_total(date);
    let transactions = state
        .sales
        .records()
        .iter()
        .filter(|r| r.date == date)
        .count();
    (total, transactions)
}

/// Per-employee totals over the day's sales.
pub fn employee_summary(state: &AppState) -> Vec<EmployeeSales> {
    state.sales.employee_summary()
}

/// Substring search over the sales history: matches the date, customer
/// name, or model name of each record (any of them).
pub fn search_sales<'a>(state: &'a AppState, query: &str) -> AppResult<Vec<&'a SaleRecord>> {
    let query = validation::validate_search_query(query)?;
    Ok(state.sales.search(&query))
}

/// Writes the daily report artifact. Manager only.
///
/// `generated_at` is the single clock read for the whole operation: it is
/// stamped into the file and compared against the closing cutoff.
pub fn write_daily_report(
    state: &AppState,
    session: &Session,
    date: NaiveDate,
    generated_at: NaiveDateTime,
) -> AppResult<PathBuf> {
    session.require(Capability::DailyReport, "generate the daily report")?;

    let (total, transactions) = daily_sales(state, date);
    let path = state.store.receipts().write_daily_report(
        date,
        total,
        transactions,
        &state.config.currency_symbol,
        generated_at,
        state.config.report_cutoff,
    )?;

    info!(%date, transactions, total = %total, "Daily report written");
    Ok(path)
}
