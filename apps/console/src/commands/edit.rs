//! # Record Edit Commands
//!
//! Manager-only administrative overwrites, bypassing the normal stock and
//! sale flows on purpose. Both are presented at the menu as a distinct
//! "edit records" area, never mixed into day-to-day operation.
//!
//! Editing a sale record does NOT rewrite receipt files: the receipt is the
//! paper trail of what was printed at the counter, mistake included.

use tracing::info;

use goldenhour_core::types::{Capability, SaleRecord};
use goldenhour_core::{validation, Money};

use crate::error::AppResult;
use crate::state::{AppState, Session};

/// Overwrites fields of a stock row in place. `None` leaves a field as is.
///
/// Returns a save warning when the table write failed after the in-memory
/// change.
pub fn edit_stock_row(
    state: &AppState,
    session: &mut Session,
    model: &str,
    new_name: Option<&str>,
    new_price: Option<Money>,
    new_quantity: Option<i64>,
) -> AppResult<Option<String>> {
    session.require(Capability::EditRecords, "edit stock records")?;

    let model = validation::validate_model_name(model)?;
    let new_name = match new_name {
        Some(name) => Some(validation::validate_model_name(name)?),
        None => None,
    };

    session.stock.overwrite(
        &model,
        new_name,
        new_price.map(|p| p.cents()),
        new_quantity,
    )?;

    info!(model = %model, "Stock row edited");
    Ok(super::persist_stock(state, &session.stock))
}

/// Replaces a sale record by its position in the day's history.
pub fn edit_sale_record(
    state: &mut AppState,
    session: &Session,
    index: usize,
    record: SaleRecord,
) -> AppResult<()> {
    session.require(Capability::EditRecords, "edit sale records")?;
    state.sales.overwrite(index, record)?;

    info!(index, "Sale record edited");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    use goldenhour_core::CoreError;

    use crate::commands::sale::{begin_sale, commit_sale};
    use crate::commands::testutil::{login, seeded_app};
    use crate::error::AppError;

    #[test]
    fn test_edit_stock_row_persists() {
        let (dir, state) = seeded_app();
        let mut session = login(&state, "C6013", "secret");

        let warning = edit_stock_row(
            &state,
            &mut session,
            "Widget",
            Some("Widget Pro"),
            Some(Money::from_cents(1200)),
            Some(9),
        )
        .unwrap();
        assert!(warning.is_none());

        let table = fs::read_to_string(dir.path().join("model.csv")).unwrap();
        assert!(table.contains("Widget Pro,12.00,9,12"));
    }

    #[test]
    fn test_edits_are_manager_only() {
        let (_dir, state) = seeded_app();
        let mut session = login(&state, "C6014", "pw");

        let err = edit_stock_row(&state, &mut session, "Widget", None, None, Some(0))
            .unwrap_err();
        assert!(matches!(err, AppError::Unauthorized { .. }));
    }

    #[test]
    fn test_edit_sale_record_bounds_checked() {
        let (_dir, mut state) = seeded_app();
        let mut session = login(&state, "C6013", "secret");

        let validated = begin_sale(&session, "Alice", "Widget")
            .unwrap()
            .with_quantity(1)
            .unwrap();
        let outcome = commit_sale(
            &mut state,
            &mut session,
            validated,
            "Cash",
            "2026-08-31T10:00:00".parse().unwrap(),
        )
        .unwrap();

        let mut corrected = outcome.record.clone();
        corrected.customer_name = "Alicia".to_string();

        edit_sale_record(&mut state, &session, 0, corrected.clone()).unwrap();
        assert_eq!(state.sales.records()[0].customer_name, "Alicia");

        let err = edit_sale_record(&mut state, &session, 5, corrected).unwrap_err();
        assert!(matches!(err, AppError::Core(CoreError::SaleNotFound(5))));
    }
}
