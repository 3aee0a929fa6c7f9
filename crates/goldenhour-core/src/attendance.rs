//! # Attendance Log
//!
//! Clock-in / clock-out rules for the working-hours table.
//!
//! The log is append-heavy and tiny (one row per shift); every rule is a
//! linear scan, which is deliberate and plenty.
//!
//! ## Rules
//! - At most one OPEN entry (no clock-out yet) per employee per calendar day
//! - Clock-out closes the open entry and reports the worked duration
//! - Closed entries are never reopened

use chrono::{Duration, NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::types::OutletCode;

// =============================================================================
// Attendance Entry
// =============================================================================

/// One shift row in the attendance table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceEntry {
    pub employee_id: String,
    pub date: NaiveDate,
    pub clock_in: NaiveTime,
    /// Empty while the shift is open.
    pub clock_out: Option<NaiveTime>,
    /// Outlet the shift was worked at.
    pub outlet: OutletCode,
}

impl AttendanceEntry {
    /// Whether the shift is still open.
    pub fn is_open(&self) -> bool {
        self.clock_out.is_none()
    }
}

// =============================================================================
// Attendance Log
// =============================================================================

/// In-memory attendance history, loaded at startup and appended to as
/// operators clock in and out.
#[derive(Debug, Clone, Default)]
pub struct AttendanceLog {
    entries: Vec<AttendanceEntry>,
}

impl AttendanceLog {
    pub fn new(entries: Vec<AttendanceEntry>) -> Self {
        AttendanceLog { entries }
    }

    pub fn entries(&self) -> &[AttendanceEntry] {
        &self.entries
    }

    fn open_entry_mut(&mut self, employee_id: &str, date: NaiveDate) -> Option<&mut AttendanceEntry> {
        self.entries
            .iter_mut()
            .find(|e| e.employee_id == employee_id && e.date == date && e.is_open())
    }

    /// Opens a shift for the employee.
    ///
    /// ## Errors
    /// `AlreadyClockedIn` when an open entry exists for the same employee
    /// and day; the log is unchanged.
    pub fn clock_in(
        &mut self,
        employee_id: &str,
        outlet: OutletCode,
        date: NaiveDate,
        time: NaiveTime,
    ) -> CoreResult<()> {
        if self.open_entry_mut(employee_id, date).is_some() {
            return Err(CoreError::AlreadyClockedIn);
        }

        self.entries.push(AttendanceEntry {
            employee_id: employee_id.to_string(),
            date,
            clock_in: time,
            clock_out: None,
            outlet,
        });
        Ok(())
    }

    /// Closes today's open shift and returns the worked duration.
    ///
    /// ## Errors
    /// `NoActiveClockIn` when the employee has no open entry for the day.
    pub fn clock_out(
        &mut self,
        employee_id: &str,
        date: NaiveDate,
        time: NaiveTime,
    ) -> CoreResult<Duration> {
        let entry = self
            .open_entry_mut(employee_id, date)
            .ok_or(CoreError::NoActiveClockIn)?;

        entry.clock_out = Some(time);
        Ok(time - entry.clock_in)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn c60() -> OutletCode {
        OutletCode::parse("C60").unwrap()
    }

    fn day() -> NaiveDate {
        "2026-08-31".parse().unwrap()
    }

    fn at(text: &str) -> NaiveTime {
        text.parse().unwrap()
    }

    #[test]
    fn test_clock_in_then_out_reports_duration() {
        let mut log = AttendanceLog::default();

        log.clock_in("C6013", c60(), day(), at("09:00:00")).unwrap();
        let worked = log.clock_out("C6013", day(), at("17:30:00")).unwrap();

        assert_eq!(worked.num_minutes(), 8 * 60 + 30);
        assert!(!log.entries()[0].is_open());
    }

    #[test]
    fn test_double_clock_in_rejected() {
        let mut log = AttendanceLog::default();

        log.clock_in("C6013", c60(), day(), at("09:00:00")).unwrap();
        let err = log
            .clock_in("C6013", c60(), day(), at("09:05:00"))
            .unwrap_err();

        assert!(matches!(err, CoreError::AlreadyClockedIn));
        assert_eq!(log.entries().len(), 1);
    }

    #[test]
    fn test_clock_out_without_open_entry_rejected() {
        let mut log = AttendanceLog::default();
        assert!(matches!(
            log.clock_out("C6013", day(), at("17:00:00")),
            Err(CoreError::NoActiveClockIn)
        ));
    }

    #[test]
    fn test_new_shift_allowed_after_closing_previous() {
        let mut log = AttendanceLog::default();

        log.clock_in("C6013", c60(), day(), at("09:00:00")).unwrap();
        log.clock_out("C6013", day(), at("13:00:00")).unwrap();
        log.clock_in("C6013", c60(), day(), at("14:00:00")).unwrap();

        assert_eq!(log.entries().len(), 2);
    }

    #[test]
    fn test_entries_are_scoped_per_employee() {
        let mut log = AttendanceLog::default();

        log.clock_in("C6013", c60(), day(), at("09:00:00")).unwrap();
        // A different employee may clock in on the same day.
        log.clock_in("C6014", c60(), day(), at("09:00:00")).unwrap();

        assert!(matches!(
            log.clock_out("C6099", day(), at("17:00:00")),
            Err(CoreError::NoActiveClockIn)
        ));
    }
}
