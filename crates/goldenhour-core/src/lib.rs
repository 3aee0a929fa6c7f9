//! # goldenhour-core: Pure Business Logic for the Goldenhour Store Console
//!
//! This crate is the **heart** of the store system. It contains all business
//! logic as pure functions and in-memory structures with zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Goldenhour Store Architecture                        │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  Console Menus (apps/console)                   │   │
//! │  │   Login ──► Main Menu ──► Stock / Sales / Reports / Edit        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ command handlers                       │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ goldenhour-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │   stock   │  │   sales   │  │   │
//! │  │   │  Outlet   │  │   Money   │  │StockLedger│  │SalesLedger│  │   │
//! │  │   │   Role    │  │  (cents)  │  │ invariants│  │  history  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐                 │   │
//! │  │   │ checkout  │  │attendance │  │ validation│                 │   │
//! │  │   │ sale flow │  │ clock i/o │  │   rules   │                 │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘                 │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO FILES • NO CLOCK READS • PURE FUNCTIONS          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              goldenhour-store (Persistence Layer)               │   │
//! │  │         Delimited text tables, receipts, daily reports          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (OutletCode, Role, Employee, SaleRecord, ...)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`error`] - Domain error types
//! - [`validation`] - Business rule validation
//! - [`stock`] - The Stock Ledger (per-outlet quantity table)
//! - [`sales`] - The Sales Ledger (append-only transaction history)
//! - [`checkout`] - The transaction coordinator for a single sale
//! - [`attendance`] - Clock-in / clock-out rules
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: File, terminal, and clock access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in cents (i64) to avoid float errors
//! 4. **Explicit Errors**: All errors are typed, never strings or panics

// =============================================================================
// Module Declarations
// =============================================================================

pub mod attendance;
pub mod checkout;
pub mod error;
pub mod money;
pub mod sales;
pub mod stock;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use goldenhour_core::Money` instead of
// `use goldenhour_core::money::Money`

pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use sales::SalesLedger;
pub use stock::StockLedger;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum quantity accepted for a single sale or stock movement.
///
/// ## Business Reason
/// Prevents accidental over-entry (e.g., typing 1000 instead of 10) at a
/// single-store counter. Can be made configurable in a later version.
pub const MAX_MOVEMENT_QUANTITY: i64 = 999;

/// Maximum length accepted for free-text fields (customer names, payment
/// methods) before the record layout becomes unreadable on receipts.
pub const MAX_FREE_TEXT_LEN: usize = 100;
