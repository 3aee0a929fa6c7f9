//! # Checkout - the Transaction Coordinator
//!
//! Ties the Stock Ledger and the Sales Ledger together for a single sale.
//!
//! ## State Machine
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        One Sale, Four States                            │
//! │                                                                         │
//! │   SaleDraft ────► ResolvedSale ────► ValidatedSale ────► committed      │
//! │   (customer,      (model found,      (quantity fits,     (stock -qty,  │
//! │    model query)    price frozen)      total computed)     record        │
//! │        │                │                  │              appended)     │
//! │        └── abort ───────┴── abort ─────────┴── abort                    │
//! │            (ModelNotFound / OutOfStock / InsufficientStock /            │
//! │             ValidationError - state is consumed, nothing applied)       │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Why Typestate?
//! Each step consumes the previous state, so a caller cannot commit a sale
//! whose quantity was never validated, and an abort at any step simply drops
//! the state - there is nothing to roll back until `commit`, and `commit`
//! applies the decrement and the append together.
//!
//! ## Timestamp Contract
//! The sale's date and time are captured exactly ONCE, at commit, and passed
//! in by the caller. No hidden clock reads; tests stay deterministic.
//!
//! ## Persistence
//! `commit` mutates only the in-memory ledgers. The app layer then persists
//! the stock table and appends the receipt artifact; a failure there is
//! surfaced distinctly (the in-memory sale stands - it already happened
//! against physical stock).

use chrono::NaiveDateTime;
use uuid::Uuid;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::sales::SalesLedger;
use crate::stock::StockLedger;
use crate::types::{OutletCode, SaleRecord};
use crate::validation;

// =============================================================================
// State 1: Draft
// =============================================================================

/// A sale that has captured customer and requested model, nothing more.
#[derive(Debug)]
pub struct SaleDraft {
    customer_name: String,
    model_query: String,
}

impl SaleDraft {
    /// Captures and validates the form inputs.
    pub fn new(customer_name: &str, model_query: &str) -> CoreResult<Self> {
        Ok(SaleDraft {
            customer_name: validation::validate_customer_name(customer_name)?,
            model_query: validation::validate_model_name(model_query)?,
        })
    }

    /// Resolves the requested model against the scoped stock ledger.
    ///
    /// ## Errors
    /// - `ModelNotFound` - "product not in this outlet"
    /// - `OutOfStock` - the model exists but holds zero units, so there is
    ///   no point asking for a quantity
    ///
    /// The model name and unit price are frozen here: a later price edit
    /// does not change this sale.
    pub fn resolve(self, stock: &StockLedger) -> CoreResult<ResolvedSale> {
        let outlet = stock
            .active_outlet()
            .cloned()
            .ok_or_else(|| CoreError::ModelNotFound(self.model_query.clone()))?;

        let row = stock
            .find_by_model(&self.model_query)
            .ok_or_else(|| CoreError::ModelNotFound(self.model_query.clone()))?;

        let available = stock.active_quantity(row);
        if available == 0 {
            return Err(CoreError::OutOfStock {
                model: row.model_name.clone(),
            });
        }

        Ok(ResolvedSale {
            customer_name: self.customer_name,
            model_name: row.model_name.clone(),
            unit_price_cents: row.price_cents,
            available,
            outlet,
        })
    }
}

// =============================================================================
// State 2: Resolved
// =============================================================================

/// A sale whose model has been found in the active outlet, with price and
/// available quantity frozen.
#[derive(Debug)]
pub struct ResolvedSale {
    customer_name: String,
    model_name: String,
    unit_price_cents: i64,
    available: i64,
    outlet: OutletCode,
}

impl ResolvedSale {
    /// Canonical model name as stored in the ledger.
    pub fn model_name(&self) -> &str {
        &self.model_name
    }

    /// Units on hand at resolution time.
    pub fn available(&self) -> i64 {
        self.available
    }

    /// Unit price frozen at resolution time.
    pub fn unit_price(&self) -> Money {
        Money::from_cents(self.unit_price_cents)
    }

    /// Validates the requested quantity against business rules and the
    /// frozen availability.
    ///
    /// ## Errors
    /// - `ValidationError` - non-positive or absurdly large quantity
    /// - `InsufficientStock` - requested exceeds available; no partial
    ///   fulfillment is ever offered
    pub fn with_quantity(self, quantity: i64) -> CoreResult<ValidatedSale> {
        validation::validate_quantity(quantity)?;

        if quantity > self.available {
            return Err(CoreError::InsufficientStock {
                model: self.model_name,
                available: self.available,
                requested: quantity,
            });
        }

        let total_cents = self.unit_price_cents * quantity;
        Ok(ValidatedSale {
            customer_name: self.customer_name,
            model_name: self.model_name,
            unit_price_cents: self.unit_price_cents,
            quantity,
            total_cents,
            outlet: self.outlet,
        })
    }
}

// =============================================================================
// State 3: Validated
// =============================================================================

/// A sale with a validated quantity and a computed total, ready to commit.
#[derive(Debug)]
pub struct ValidatedSale {
    customer_name: String,
    model_name: String,
    unit_price_cents: i64,
    quantity: i64,
    total_cents: i64,
    outlet: OutletCode,
}

impl ValidatedSale {
    /// The computed total (unit price × quantity), shown to the operator
    /// before the payment method is captured.
    pub fn total(&self) -> Money {
        Money::from_cents(self.total_cents)
    }

    pub fn model_name(&self) -> &str {
        &self.model_name
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    /// Commits the sale: decrements the stock ledger and appends the record
    /// to the sales ledger, both in memory, as one operation.
    ///
    /// ## Ordering
    /// The decrement runs first; if it fails (the ledger changed since
    /// resolution, e.g. an administrative edit) nothing is appended - no
    /// orphan records, no partial application.
    ///
    /// ## Returns
    /// A clone of the appended record, for the receipt artifact.
    pub fn commit(
        self,
        stock: &mut StockLedger,
        sales: &mut SalesLedger,
        payment_method: &str,
        employee_name: &str,
        committed_at: NaiveDateTime,
    ) -> CoreResult<SaleRecord> {
        let payment_method = validation::validate_payment_method(payment_method)?;

        stock.adjust_quantity(&self.model_name, &self.outlet, -self.quantity)?;

        let record = SaleRecord {
            id: Uuid::new_v4().to_string(),
            date: committed_at.date(),
            time: committed_at.time(),
            customer_name: self.customer_name,
            model_name: self.model_name,
            quantity: self.quantity,
            unit_price_cents: self.unit_price_cents,
            total_cents: self.total_cents,
            payment_method,
            employee_name: employee_name.to_string(),
        };

        sales.append(record.clone());
        Ok(record)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
