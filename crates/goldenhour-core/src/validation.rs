//! # Validation Module
//!
//! Input validation utilities for the store console.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Menu prompts (apps/console)                                  │
//! │  ├── Numeric parse of raw operator input                               │
//! │  └── Immediate re-prompt on format errors                              │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE - business rule validation                       │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Ledger invariants (stock never below zero, etc.)             │
//! │                                                                         │
//! │  Defense in depth: each layer catches different errors                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;
use crate::{MAX_FREE_TEXT_LEN, MAX_MOVEMENT_QUANTITY};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a model name as entered at a prompt.
///
/// ## Rules
/// - Must not be empty after trimming
/// - Must be at most 100 characters
///
/// ## Returns
/// The trimmed name.
pub fn validate_model_name(name: &str) -> ValidationResult<String> {
    validate_free_text("model name", name)
}

/// Validates a customer name.
pub fn validate_customer_name(name: &str) -> ValidationResult<String> {
    validate_free_text("customer name", name)
}

/// Validates a payment method ("Cash", "Card", "QR", ...).
///
/// Free text by design: the original receipts carry whatever the operator
/// typed, and downstream search treats it as opaque.
pub fn validate_payment_method(method: &str) -> ValidationResult<String> {
    validate_free_text("payment method", method)
}

/// Validates a search query.
///
/// ## Rules
/// - Must not be empty (an empty substring matches everything, which is
///   never what the operator meant)
/// - Maximum 100 characters
///
/// ## Returns
/// The trimmed query string.
pub fn validate_search_query(query: &str) -> ValidationResult<String> {
    validate_free_text("search query", query)
}

/// Validates an employee id ("C6013": outlet prefix plus digits).
///
/// Only the shape is checked here; whether the outlet prefix is registered
/// is decided against the outlet directory by the caller.
pub fn validate_employee_id(id: &str) -> ValidationResult<String> {
    let id = id.trim();

    if id.is_empty() {
        return Err(ValidationError::Required {
            field: "employee id".to_string(),
        });
    }

    if id.len() < 4 || !id.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(ValidationError::InvalidFormat {
            field: "employee id".to_string(),
            reason: "must be a 3-character outlet code followed by digits".to_string(),
        });
    }

    Ok(id.to_ascii_uppercase())
}

/// Validates an employee display name (shown in menus and on receipts).
pub fn validate_employee_name(name: &str) -> ValidationResult<String> {
    validate_free_text("employee name", name)
}

/// Validates a password as entered at registration.
///
/// Shape only: it lands in a comma-delimited row, so the same free-text
/// rules apply.
pub fn validate_password(password: &str) -> ValidationResult<String> {
    validate_free_text("password", password)
}

fn validate_free_text(field: &str, text: &str) -> ValidationResult<String> {
    let text = text.trim();

    if text.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if text.len() > MAX_FREE_TEXT_LEN {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max: MAX_FREE_TEXT_LEN,
        });
    }

    // The comma is the table delimiter; letting one through would shear the
    // row on the next load.
    if text.contains(',') {
        return Err(ValidationError::InvalidFormat {
            field: field.to_string(),
            reason: "must not contain commas".to_string(),
        });
    }

    Ok(text.to_string())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a quantity for a sale or stock movement.
///
/// ## Rules
/// - Must be positive (> 0)
/// - Must not exceed MAX_MOVEMENT_QUANTITY (999)
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    if qty > MAX_MOVEMENT_QUANTITY {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 1,
            max: MAX_MOVEMENT_QUANTITY,
        });
    }

    Ok(())
}

/// Validates a counted quantity from a physical stock count.
///
/// Zero is legal here (an empty shelf is a valid count); negatives are not.
pub fn validate_counted_quantity(qty: i64) -> ValidationResult<()> {
    if qty < 0 {
        return Err(ValidationError::OutOfRange {
            field: "counted quantity".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

/// Validates a price in cents.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (promotional giveaways)
pub fn validate_price_cents(cents: i64) -> ValidationResult<()> {
    if cents < 0 {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
