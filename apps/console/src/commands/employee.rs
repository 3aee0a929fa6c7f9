//! # Employee Commands
//!
//! Manager-only registration of new employees.
//!
//! The id's three-character prefix must name a registered outlet: that
//! prefix is where the new employee's sessions will be scoped, and an
//! unregistered prefix would produce logins that can never see stock.

use tracing::info;

use goldenhour_core::types::{Capability, Employee, OutletCode, Role};
use goldenhour_core::{validation, ValidationError};

use crate::error::AppResult;
use crate::state::{AppState, Session};

/// Registers a new employee and rewrites the employee table.
///
/// Unlike stock movements, a failed table save here rolls the in-memory
/// entry back and fails the command: nothing physical has happened yet, and
/// a registration that vanishes on restart is worse than one that never
/// reported success.
pub fn register_employee(
    state: &mut AppState,
    session: &Session,
    id: &str,
    name: &str,
    role: &str,
    password: &str,
) -> AppResult<Employee> {
    session.require(Capability::RegisterEmployee, "register employees")?;

    let id = validation::validate_employee_id(id)?;
    let name = validation::validate_employee_name(name)?;
    let role = Role::parse(role)?;
    let password = validation::validate_password(password)?;

    if state.find_employee(&id).is_some() {
        return Err(ValidationError::Duplicate {
            field: "employee id".to_string(),
            value: id,
        }
        .into());
    }

    let outlet = OutletCode::from_employee_id(&id)?;
    if !state.outlets.contains(&outlet) {
        return Err(goldenhour_core::CoreError::OutletNotFound(outlet.to_string()).into());
    }

    let employee = Employee {
        id,
        name,
        role,
        password,
        outlet,
    };

    state.employees.push(employee.clone());
    if let Err(err) = state.store.employees().save(&state.employees) {
        state.employees.pop();
        return Err(err.into());
    }

    info!(
        employee = %employee.id,
        role = employee.role.as_table_str(),
        "Employee registered"
    );
    Ok(employee)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    use crate::commands::testutil::{login, seeded_app};
    use crate::error::AppError;
    use crate::state::Session;

    #[test]
    fn test_register_and_login_as_new_employee() {
        let (dir, mut state) = seeded_app();
        let manager = login(&state, "C6013", "secret");

        let employee = register_employee(
            &mut state,
            &manager,
            "klg77",
            "Mei",
            "Full-time",
            "hunter2",
        )
        .unwrap();
        assert_eq!(employee.id, "KLG77"); // uppercased
        assert_eq!(employee.outlet.as_str(), "KLG");

        let table = fs::read_to_string(dir.path().join("employee.csv")).unwrap();
        assert!(table.contains("KLG77,Mei,Full-time,hunter2"));

        // The new account works immediately, scoped to its outlet.
        let session = Session::open(&state, "KLG77", "hunter2").unwrap();
        assert_eq!(session.stock.active_outlet().unwrap().as_str(), "KLG");
    }

    #[test]
    fn test_non_manager_cannot_register() {
        let (_dir, mut state) = seeded_app();
        let part_time = login(&state, "C6014", "pw");

        let err = register_employee(&mut state, &part_time, "C6099", "Eve", "Manager", "pw")
            .unwrap_err();
        assert!(matches!(err, AppError::Unauthorized { .. }));
        assert_eq!(state.employees.len(), 2);
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let (_dir, mut state) = seeded_app();
        let manager = login(&state, "C6013", "secret");

        let err = register_employee(&mut state, &manager, "C6013", "Other", "Manager", "pw")
            .unwrap_err();
        assert!(err.to_string().contains("already exists"));
    }

    #[test]
    fn test_unregistered_outlet_prefix_rejected() {
        let (_dir, mut state) = seeded_app();
        let manager = login(&state, "C6013", "secret");

        let err = register_employee(&mut state, &manager, "ZZZ01", "Eve", "Manager", "pw")
            .unwrap_err();
        assert_eq!(err.to_string(), "Unknown outlet code: ZZZ");
        assert_eq!(state.employees.len(), 2);
    }

    #[test]
    fn test_invalid_inputs_rejected() {
        let (_dir, mut state) = seeded_app();
        let manager = login(&state, "C6013", "secret");

        assert!(register_employee(&mut state, &manager, "C60", "Eve", "Manager", "pw").is_err());
        assert!(
            register_employee(&mut state, &manager, "C6099", "Eve", "Wizard", "pw").is_err()
        );
        assert!(
            register_employee(&mut state, &manager, "C6099", "Eve, Jr", "Manager", "pw")
                .is_err()
        );
        assert!(register_employee(&mut state, &manager, "C6099", "Eve", "Manager", "").is_err());
    }
}
