//! # Stock Commands
//!
//! Movements (stock in / stock out), physical counts, and search.
//!
//! Counts come in two flavors at the menu (morning count before opening,
//! night count after closing) but they are the same operation: compare the
//! shelf against the records and report. Neither ever mutates the ledger;
//! a discrepancy is investigated by a human and corrected through a
//! movement or a manager edit.

use tracing::info;

use goldenhour_core::stock::StockModel;
use goldenhour_core::types::CountStatus;
use goldenhour_core::{validation, CoreError};

use crate::error::AppResult;
use crate::state::{AppState, Session};

/// Result of a committed stock movement.
#[derive(Debug)]
pub struct StockMovement {
    /// Canonical model name as stored in the ledger.
    pub model_name: String,

    /// Quantity at the active outlet after the movement.
    pub new_quantity: i64,

    /// Set when the table save failed after the in-memory commit.
    pub warning: Option<String>,
}

fn apply_movement(
    state: &AppState,
    session: &mut Session,
    model: &str,
    quantity: i64,
    inbound: bool,
) -> AppResult<StockMovement> {
    let model = validation::validate_model_name(model)?;
    // Validate BEFORE applying the sign, so a negative entry cannot flip a
    // stock-in into a silent stock-out.
    validation::validate_quantity(quantity)?;
    let delta = if inbound { quantity } else { -quantity };

    // An empty (degraded) ledger has no active outlet; report the model as
    // not found, same as every other lookup against it.
    let outlet = session
        .stock
        .active_outlet()
        .cloned()
        .ok_or_else(|| CoreError::ModelNotFound(model.clone()))?;

    let new_quantity = session.stock.adjust_quantity(&model, &outlet, delta)?;
    let canonical = match session.stock.find_by_model(&model) {
        Some(row) => row.model_name.clone(),
        None => model,
    };

    let warning = super::persist_stock(state, &session.stock);
    info!(model = %canonical, delta, new_quantity, "Stock movement committed");

    Ok(StockMovement {
        model_name: canonical,
        new_quantity,
        warning,
    })
}

/// Receives units into the active outlet (delivery, return to shelf).
pub fn stock_in(
    state: &AppState,
    session: &mut Session,
    model: &str,
    quantity: i64,
) -> AppResult<StockMovement> {
    apply_movement(state, session, model, quantity, true)
}

/// Removes units from the active outlet outside a sale (damage, shrinkage,
/// transfer out). Rejected if it would take the quantity below zero.
pub fn stock_out(
    state: &AppState,
    session: &mut Session,
    model: &str,
    quantity: i64,
) -> AppResult<StockMovement> {
    apply_movement(state, session, model, quantity, false)
}

/// Compares a physical count against the records. Read-only.
pub fn count_stock(session: &Session, model: &str, counted: i64) -> AppResult<CountStatus> {
    let model = validation::validate_model_name(model)?;
    Ok(session.stock.reconcile_count(&model, counted)?)
}

/// Substring search over model names at the active outlet.
pub fn search_stock<'a>(session: &'a Session, query: &str) -> AppResult<Vec<&'a StockModel>> {
    let query = validation::validate_search_query(query)?;
    Ok(session.stock.search(&query))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    use crate::commands::testutil::{login, seeded_app};
    use crate::error::AppError;

    #[test]
    fn test_stock_in_persists_all_columns() {
        let (dir, state) = seeded_app();
        let mut session = login(&state, "C6013", "secret");

        let movement = stock_in(&state, &mut session, "widget", 10).unwrap();
        assert_eq!(movement.model_name, "Widget");
        assert_eq!(movement.new_quantity, 15);
        assert!(movement.warning.is_none());

        let table = fs::read_to_string(dir.path().join("model.csv")).unwrap();
        assert!(table.contains("Widget,10.00,15,12"));
        assert!(table.contains("Gadget,25.50,2,0"));
    }

    #[test]
    fn test_stock_out_cannot_go_negative() {
        let (dir, state) = seeded_app();
        let mut session = login(&state, "C6013", "secret");

        let err = stock_out(&state, &mut session, "Widget", 6).unwrap_err();
        assert!(matches!(
            err,
            AppError::Core(CoreError::InsufficientStock {
                available: 5,
                requested: 6,
                ..
            })
        ));

        // Neither memory nor disk moved.
        let widget = session.stock.find_by_model("Widget").unwrap();
        assert_eq!(session.stock.active_quantity(widget), 5);
        let table = fs::read_to_string(dir.path().join("model.csv")).unwrap();
        assert!(table.contains("Widget,10.00,5,12"));
    }

    #[test]
    fn test_movement_quantity_limits() {
        let (_dir, state) = seeded_app();
        let mut session = login(&state, "C6013", "secret");

        assert!(stock_in(&state, &mut session, "Widget", 0).is_err());
        assert!(stock_in(&state, &mut session, "Widget", 1000).is_err());
        assert!(stock_out(&state, &mut session, "Widget", 0).is_err());
        // A negative entry must not flip the direction of the movement.
        assert!(stock_in(&state, &mut session, "Widget", -3).is_err());
        assert!(stock_out(&state, &mut session, "Widget", -3).is_err());
    }

    #[test]
    fn test_count_reports_without_mutating() {
        let (_dir, state) = seeded_app();
        let session = login(&state, "C6013", "secret");

        assert_eq!(count_stock(&session, "Widget", 5).unwrap(), CountStatus::Match);
        assert_eq!(
            count_stock(&session, "Widget", 3).unwrap(),
            CountStatus::Mismatch {
                recorded: 5,
                counted: 3
            }
        );

        let widget = session.stock.find_by_model("Widget").unwrap();
        assert_eq!(session.stock.active_quantity(widget), 5);
    }

    #[test]
    fn test_search_stock() {
        let (_dir, state) = seeded_app();
        let session = login(&state, "C6013", "secret");

        assert_eq!(search_stock(&session, "dge").unwrap().len(), 2);
        assert!(search_stock(&session, "   ").is_err());
    }

    #[test]
    fn test_degraded_session_reports_not_found() {
        let (dir, state) = seeded_app();
        fs::remove_file(dir.path().join("model.csv")).unwrap();
        let mut session = login(&state, "C6013", "secret");

        assert!(matches!(
            stock_in(&state, &mut session, "Widget", 1).unwrap_err(),
            AppError::Core(CoreError::ModelNotFound(_))
        ));
        assert!(matches!(
            count_stock(&session, "Widget", 0).unwrap_err(),
            AppError::Core(CoreError::ModelNotFound(_))
        ));
        assert!(search_stock(&session, "Widget").unwrap().is_empty());
    }
}
