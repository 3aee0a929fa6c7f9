//! # Employee Table
//!
//! `employee.csv`: rows of `id,name,role,password`. The outlet is not a
//! column; it is derived from the id's three-character prefix at load time,
//! exactly like the legacy files expect.
//!
//! Passwords are stored in plain text for table compatibility.
//! TODO: hash with argon2 once the employee table format is versioned.

use std::fs;
use std::path::PathBuf;

use tracing::debug;

use goldenhour_core::types::{Employee, OutletCode, Role};

use crate::error::{StoreError, StoreResult};
use crate::read_rows;

const TABLE: &str = "employee";

/// Accessor for the employee table file.
#[derive(Debug, Clone)]
pub struct EmployeeTable {
    path: PathBuf,
}

impl EmployeeTable {
    pub(crate) fn new(path: PathBuf) -> Self {
        EmployeeTable { path }
    }

    /// Loads all employees in file order.
    pub fn load(&self) -> StoreResult<Vec<Employee>> {
        let mut employees = Vec::new();

        for (line, row) in read_rows(TABLE, &self.path)? {
            let cols: Vec<&str> = row.split(',').collect();
            if cols.len() != 4 {
                return Err(StoreError::Malformed {
                    table: TABLE,
                    line,
                    reason: format!("expected id,name,role,password ({} columns)", cols.len()),
                });
            }

            let malformed = |reason: String| StoreError::Malformed {
                table: TABLE,
                line,
                reason,
            };

            let id = cols[0].trim().to_string();
            let outlet =
                OutletCode::from_employee_id(&id).map_err(|e| malformed(e.to_string()))?;
            let role = Role::parse(cols[2]).map_err(|e| malformed(e.to_string()))?;

            employees.push(Employee {
                id,
                name: cols[1].trim().to_string(),
                role,
                password: cols[3].trim().to_string(),
                outlet,
            });
        }

        debug!(employees = employees.len(), "Employee table loaded");
        Ok(employees)
    }

    /// Rewrites the full table.
    pub fn save(&self, employees: &[Employee]) -> StoreResult<()> {
        let mut out = String::new();
        for e in employees {
            out.push_str(&format!(
                "{},{},{},{}\n",
                e.id,
                e.name,
                e.role.as_table_str(),
                e.password
            ));
        }

        fs::write(&self.path, out)?;
        debug!(employees = employees.len(), "Employee table saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_load_save_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("employee.csv");
        fs::write(&path, "C6013,Jane,Manager,secret\nKLG01,Ken,Part-time,pw\n").unwrap();

        let table = EmployeeTable::new(path);
        let employees = table.load().unwrap();

        assert_eq!(employees.len(), 2);
        assert_eq!(employees[0].name, "Jane");
        assert_eq!(employees[0].role, Role::Manager);
        assert_eq!(employees[0].outlet.as_str(), "C60");
        assert_eq!(employees[1].outlet.as_str(), "KLG");

        table.save(&employees).unwrap();
        let reloaded = table.load().unwrap();
        assert_eq!(reloaded.len(), 2);
        assert_eq!(reloaded[1].name, "Ken");
        assert_eq!(reloaded[1].role, Role::PartTime);
    }

    #[test]
    fn test_wrong_column_count_reports_line() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("employee.csv");
        fs::write(&path, "C6013,Jane,Manager,secret\nC6014,Bob\n").unwrap();

        let err = EmployeeTable::new(path).load().unwrap_err();
        assert!(matches!(err, StoreError::Malformed { line: 2, .. }));
    }

    #[test]
    fn test_unknown_role_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("employee.csv");
        fs::write(&path, "C6013,Jane,Wizard,secret\n").unwrap();

        assert!(matches!(
            EmployeeTable::new(path).load().unwrap_err(),
            StoreError::Malformed { line: 1, .. }
        ));
    }
}
