//! # Stock Ledger
//!
//! The per-outlet quantity table: one row per product model, one quantity
//! column per outlet, scoped to the "home" outlet of the current session.
//!
//! ## Scoping Model
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      StockLedger Scoping                                │
//! │                                                                         │
//! │  model.csv          model,price,C60,KLG,PNG                            │
//! │                     Widget,10.00,  5, 12,  0                           │
//! │                     Gadget,25.50,  2,  0,  7                           │
//! │                              │    ▲                                     │
//! │                              │    │ active column (session outlet C60)  │
//! │                              │    │                                     │
//! │   Mutations touch ONLY the active column.                              │
//! │   The other columns are retained untouched so that a save              │
//! │   round-trips every outlet, not just this session's.                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariant
//! Every quantity in every column is >= 0 after every committed mutation.
//! [`StockLedger::adjust_quantity`] rejects a movement that would break this
//! and leaves the ledger untouched - no partial application.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{CountStatus, OutletCode};
use crate::validation;

// =============================================================================
// Stock Model Row
// =============================================================================

/// One row of the stock ledger: a product model with its price and the full
/// cross-outlet quantity snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockModel {
    /// Unique key (case-insensitive) within a ledger snapshot.
    pub model_name: String,

    /// Unit price in cents (non-negative).
    pub price_cents: i64,

    /// Quantities aligned positionally to the ledger's outlet columns.
    /// Mutate only through [`StockLedger`] methods; direct edits can break
    /// the non-negative invariant and the column alignment.
    pub quantities: Vec<i64>,
}

impl StockModel {
    /// Returns the unit price as Money.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }
}

// =============================================================================
// Stock Ledger
// =============================================================================

/// In-memory stock snapshot for one session, scoped to an active outlet.
///
/// ## Lifecycle
/// Materialized from the persisted table at session start (the store layer
/// parses the file), mutated in memory by sales and stock movements, and
/// flushed back in full by the store layer after every mutating commit.
///
/// ## Empty Ledger
/// When the backing table is missing, malformed, or lacks the session's
/// outlet column, the app substitutes [`StockLedger::empty`]: every lookup
/// then reports not-found instead of crashing, which is the contract the
/// menus rely on.
#[derive(Debug, Clone, Default)]
pub struct StockLedger {
    outlets: Vec<OutletCode>,
    /// Index into `outlets` for the session's home outlet.
    /// `None` only for the empty ledger.
    active: Option<usize>,
    rows: Vec<StockModel>,
}

impl StockLedger {
    /// Creates a ledger with the given outlet columns, scoped to `active`.
    ///
    /// ## Errors
    /// `OutletNotFound` if `active` is not one of the columns. Callers that
    /// want the degraded-but-alive behavior catch this and substitute
    /// [`StockLedger::empty`].
    pub fn new(outlets: Vec<OutletCode>, active: &OutletCode) -> CoreResult<Self> {
        let active_idx = outlets
            .iter()
            .position(|c| c == active)
            .ok_or_else(|| CoreError::OutletNotFound(active.to_string()))?;

        Ok(StockLedger {
            outlets,
            active: Some(active_idx),
            rows: Vec::new(),
        })
    }

    /// Creates the degraded empty ledger (no columns, no rows).
    pub fn empty() -> Self {
        StockLedger::default()
    }

    /// Appends a row. The quantity vector must align with the outlet columns
    /// and hold no negative values.
    pub fn push(&mut self, row: StockModel) -> CoreResult<()> {
        validation::validate_price_cents(row.price_cents)?;

        if row.quantities.len() != self.outlets.len() {
            return Err(crate::error::ValidationError::InvalidFormat {
                field: "stock row".to_string(),
                reason: format!(
                    "{} quantity columns, expected {}",
                    row.quantities.len(),
                    self.outlets.len()
                ),
            }
            .into());
        }

        if row.quantities.iter().any(|&q| q < 0) {
            return Err(crate::error::ValidationError::OutOfRange {
                field: format!("quantity for {}", row.model_name),
                min: 0,
                max: i64::MAX,
            }
            .into());
        }

        self.rows.push(row);
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    /// The outlet columns, in table order.
    pub fn outlets(&self) -> &[OutletCode] {
        &self.outlets
    }

    /// The session's home outlet (None for the empty ledger).
    pub fn active_outlet(&self) -> Option<&OutletCode> {
        self.active.map(|i| &self.outlets[i])
    }

    /// All rows in table order.
    pub fn rows(&self) -> &[StockModel] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    // -------------------------------------------------------------------------
    // Lookups
    // -------------------------------------------------------------------------

    /// Case-insensitive exact match on model name; first match wins.
    ///
    /// Duplicates are not deduplicated: the scan order is the deterministic
    /// table order, so "first match" is stable across sessions.
    pub fn find_by_model(&self, name: &str) -> Option<&StockModel> {
        let name = name.trim();
        self.rows
            .iter()
            .find(|row| row.model_name.eq_ignore_ascii_case(name))
    }

    /// Quantity on hand at the active outlet for a row of this ledger.
    ///
    /// Returns 0 for the empty ledger, which has no active column.
    pub fn active_quantity(&self, row: &StockModel) -> i64 {
        match self.active {
            Some(idx) => row.quantities.get(idx).copied().unwrap_or(0),
            None => 0,
        }
    }

    /// Quantity at an arbitrary outlet column (cross-outlet visibility,
    /// read-only).
    pub fn quantity_at(&self, row: &StockModel, outlet: &OutletCode) -> Option<i64> {
        let idx = self.outlets.iter().position(|c| c == outlet)?;
        row.quantities.get(idx).copied()
    }

    /// Case-insensitive substring search over model names (reporting).
    pub fn search(&self, query: &str) -> Vec<&StockModel> {
        let query = query.trim().to_ascii_lowercase();
        self.rows
            .iter()
            .filter(|row| row.model_name.to_ascii_lowercase().contains(&query))
            .collect()
    }

    // -------------------------------------------------------------------------
    // Mutations
    // -------------------------------------------------------------------------

    /// Applies a signed quantity movement to one model at one outlet.
    ///
    /// `delta` may be positive (restock) or negative (sale, shrinkage).
    ///
    /// ## Errors
    /// - `ModelNotFound` - no row matches `name`
    /// - `OutletNotFound` - `outlet` is not a column of this ledger
    /// - `InsufficientStock` - the result would be negative; the ledger is
    ///   left exactly as it was
    ///
    /// ## Returns
    /// The new quantity at that outlet.
    pub fn adjust_quantity(
        &mut self,
        name: &str,
        outlet: &OutletCode,
        delta: i64,
    ) -> CoreResult<i64> {
        let outlet_idx = self
            .outlets
            .iter()
            .position(|c| c == outlet)
            .ok_or_else(|| CoreError::OutletNotFound(outlet.to_string()))?;

        let name = name.trim();
        let row = self
            .rows
            .iter_mut()
            .find(|row| row.model_name.eq_ignore_ascii_case(name))
            .ok_or_else(|| CoreError::ModelNotFound(name.to_string()))?;

        let current = row.quantities[outlet_idx];
        let updated = current + delta;
        if updated < 0 {
            return Err(CoreError::InsufficientStock {
                model: row.model_name.clone(),
                available: current,
                requested: -delta,
            });
        }

        row.quantities[outlet_idx] = updated;
        Ok(updated)
    }

    /// Compares a physical count against the recorded quantity at the
    /// active outlet. Never mutates: a mismatch is a report for a human to
    /// investigate, not a correction.
    pub fn reconcile_count(&self, name: &str, counted: i64) -> CoreResult<CountStatus> {
        validation::validate_counted_quantity(counted)?;

        let row = self
            .find_by_model(name)
            .ok_or_else(|| CoreError::ModelNotFound(name.trim().to_string()))?;
        let recorded = self.active_quantity(row);

        if recorded == counted {
            Ok(CountStatus::Match)
        } else {
            Ok(CountStatus::Mismatch { recorded, counted })
        }
    }

    /// Administrative override: directly rewrites a row's name, price, or
    /// active-outlet quantity, bypassing the checkout validation path.
    ///
    /// Manager-only at the menu layer. The non-negative quantity invariant
    /// still holds - even an override cannot record stock that isn't there.
    pub fn overwrite(
        &mut self,
        name: &str,
        new_name: Option<String>,
        new_price_cents: Option<i64>,
        new_active_quantity: Option<i64>,
    ) -> CoreResult<()> {
        let active_idx = self.active;

        if let Some(price) = new_price_cents {
            validation::validate_price_cents(price)?;
        }
        if let Some(qty) = new_active_quantity {
            validation::validate_counted_quantity(qty)?;
        }

        let name = name.trim();
        let row = self
            .rows
            .iter_mut()
            .find(|row| row.model_name.eq_ignore_ascii_case(name))
            .ok_or_else(|| CoreError::ModelNotFound(name.to_string()))?;

        if let Some(new_name) = new_name {
            row.model_name = new_name;
        }
        if let Some(price) = new_price_cents {
            row.price_cents = price;
        }
        if let (Some(qty), Some(idx)) = (new_active_quantity, active_idx) {
            row.quantities[idx] = qty;
        }

        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
