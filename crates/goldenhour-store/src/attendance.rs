//! # Attendance Table
//!
//! `attendance.csv`: rows of `employeeId,date,clockIn,clockOut_or_empty,outlet`.
//!
//! Unlike the other tables, a missing file is NOT an error: a fresh store
//! simply has no shifts yet, and the first clock-in creates the file.
//! Clock-out updates the open row in place, so saves rewrite the whole file
//! rather than appending (appending would duplicate every closed row).

use std::fs;
use std::path::PathBuf;

use chrono::{NaiveDate, NaiveTime};
use tracing::debug;

use goldenhour_core::attendance::{AttendanceEntry, AttendanceLog};
use goldenhour_core::types::OutletCode;

use crate::error::{StoreError, StoreResult};
use crate::read_rows;

const TABLE: &str = "attendance";

const DATE_FMT: &str = "%Y-%m-%d";
const TIME_FMT: &str = "%H:%M:%S";

/// Accessor for the attendance table file.
#[derive(Debug, Clone)]
pub struct AttendanceTable {
    path: PathBuf,
}

impl AttendanceTable {
    pub(crate) fn new(path: PathBuf) -> Self {
        AttendanceTable { path }
    }

    /// Loads the full shift history; missing file yields an empty log.
    pub fn load(&self) -> StoreResult<AttendanceLog> {
        let rows = match read_rows(TABLE, &self.path) {
            Ok(rows) => rows,
            Err(StoreError::TableMissing { .. }) => return Ok(AttendanceLog::default()),
            Err(err) => return Err(err),
        };

        let mut entries = Vec::new();
        for (line, row) in rows {
            let cols: Vec<&str> = row.split(',').collect();
            if cols.len() != 5 {
                return Err(StoreError::Malformed {
                    table: TABLE,
                    line,
                    reason: format!(
                        "expected employeeId,date,clockIn,clockOut,outlet ({} columns)",
                        cols.len()
                    ),
                });
            }

            let malformed = |reason: String| StoreError::Malformed {
                table: TABLE,
                line,
                reason,
            };

            let date = NaiveDate::parse_from_str(cols[1].trim(), DATE_FMT)
                .map_err(|e| malformed(format!("bad date: {e}")))?;
            let clock_in = NaiveTime::parse_from_str(cols[2].trim(), TIME_FMT)
                .map_err(|e| malformed(format!("bad clock-in time: {e}")))?;
            let clock_out = match cols[3].trim() {
                "" => None,
                text => Some(
                    NaiveTime::parse_from_str(text, TIME_FMT)
                        .map_err(|e| malformed(format!("bad clock-out time: {e}")))?,
                ),
            };
            let outlet = OutletCode::parse(cols[4]).map_err(|e| malformed(e.to_string()))?;

            entries.push(AttendanceEntry {
                employee_id: cols[0].trim().to_string(),
                date,
                clock_in,
                clock_out,
                outlet,
            });
        }

        debug!(shifts = entries.len(), "Attendance table loaded");
        Ok(AttendanceLog::new(entries))
    }

    /// Rewrites the full table.
    pub fn save(&self, log: &AttendanceLog) -> StoreResult<()> {
        let mut out = String::new();
        for e in log.entries() {
            let clock_out = match e.clock_out {
                Some(t) => t.format(TIME_FMT).to_string(),
                None => String::new(),
            };
            out.push_str(&format!(
                "{},{},{},{},{}\n",
                e.employee_id,
                e.date.format(DATE_FMT),
                e.clock_in.format(TIME_FMT),
                clock_out,
                e.outlet
            ));
        }

        fs::write(&self.path, out)?;
        debug!(shifts = log.entries().len(), "Attendance table saved");
        Ok(())
    }
}
