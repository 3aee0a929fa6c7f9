//! # Attendance Commands
//!
//! Clock in and clock out against the shift log, then rewrite the table.
//!
//! A failed table save after the in-memory change is reported as a warning,
//! not rolled back, consistent with every other mutating command: the shift
//! did start (or end) in the real world.

use chrono::{Duration, NaiveDateTime};
use tracing::{error, info};

use crate::error::AppResult;
use crate::state::{AppState, Session};

fn persist_attendance(state: &AppState) -> Option<String> {
    match state.store.attendance().save(&state.attendance) {
        Ok(()) => None,
        Err(err) => {
            error!(error = %err, "Attendance table save failed after in-memory commit");
            Some(format!("WARNING: attendance table not saved ({err})"))
        }
    }
}

/// Opens a shift for the logged-in employee at the current instant.
///
/// Returns a save warning when the table write failed.
pub fn clock_in(
    state: &mut AppState,
    session: &Session,
    now: NaiveDateTime,
) -> AppResult<Option<String>> {
    let employee = session.employee();
    state.attendance.clock_in(
        &employee.id,
        employee.outlet.clone(),
        now.date(),
        now.time(),
    )?;

    info!(employee = %employee.id, "Clocked in");
    Ok(persist_attendance(state))
}

/// Closes today's open shift; returns the worked duration and any save
/// warning.
pub fn clock_out(
    state: &mut AppState,
    session: &Session,
    now: NaiveDateTime,
) -> AppResult<(Duration, Option<String>)> {
    let employee = session.employee();
    let worked = state
        .attendance
        .clock_out(&employee.id, now.date(), now.time())?;

    info!(
        employee = %employee.id,
        minutes = worked.num_minutes(),
        "Clocked out"
    );
    Ok((worked, persist_attendance(state)))
}
