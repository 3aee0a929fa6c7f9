//! # Error Types
//!
//! Domain-specific error types for goldenhour-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  goldenhour-core errors (this file)                                    │
//! │  ├── CoreError        - Business rule violations                       │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  goldenhour-store errors (separate crate)                              │
//! │  └── StoreError       - Backing file unreadable/unwritable             │
//! │                                                                         │
//! │  Console app errors                                                    │
//! │  └── AppError         - What the operator sees                         │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → AppError → operator message       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (model name, quantities, etc.)
//! 3. Errors are enum variants, never String
//! 4. Each error variant maps to a user-facing message

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// These errors represent business rule violations or domain logic failures.
/// They are caught at the command layer and shown to the operator.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Model cannot be found in the scoped stock ledger.
    ///
    /// ## When This Occurs
    /// - The name matches no row (case-insensitive exact match)
    /// - The ledger is empty because the outlet column failed to load
    #[error("Product not found in this outlet: {0}")]
    ModelNotFound(String),

    /// The model exists but has zero units on hand.
    ///
    /// Kept distinct from [`CoreError::InsufficientStock`] because the sale
    /// flow aborts before even asking for a quantity.
    #[error("{model} is out of stock")]
    OutOfStock { model: String },

    /// Insufficient stock to complete the movement.
    ///
    /// ## When This Occurs
    /// - A sale requests more units than the outlet holds
    /// - A stock-out (shrinkage) would take the quantity below zero
    ///
    /// The ledger is left unchanged: no partial decrement ever happens.
    #[error("Insufficient stock for {model}: available {available}, requested {requested}")]
    InsufficientStock {
        model: String,
        available: i64,
        requested: i64,
    },

    /// Outlet code does not match any column of the stock ledger or any
    /// entry of the outlet directory.
    #[error("Unknown outlet code: {0}")]
    OutletNotFound(String),

    /// Employee id did not match any registered employee.
    #[error("Employee not found: {0}")]
    EmployeeNotFound(String),

    /// Sale index out of range for an administrative edit.
    #[error("No sale record at position {0}")]
    SaleNotFound(usize),

    /// Operator already has an open attendance entry today.
    #[error("Already clocked in today")]
    AlreadyClockedIn,

    /// Clock-out requested with no open attendance entry.
    #[error("No active clock-in found")]
    NoActiveClockIn,

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when operator input doesn't meet requirements.
/// Used for early validation before business logic runs.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Invalid format (e.g., non-numeric quantity, malformed outlet code).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Duplicate value (e.g., duplicate employee id).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::InsufficientStock {
            model: "Widget".to_string(),
            available: 3,
            requested: 5,
        };
        assert_eq!(
            err.to_string(),
            "Insufficient stock for Widget: available 3, requested 5"
        );
    }

    #[test]
    fn test_not_found_message_names_the_outlet_scope() {
        let err = CoreError::ModelNotFound("Gadget".to_string());
        assert_eq!(err.to_string(), "Product not found in this outlet: Gadget");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "customer name".to_string(),
        };
        assert_eq!(err.to_string(), "customer name is required");

        let err = ValidationError::MustBePositive {
            field: "quantity".to_string(),
        };
        assert_eq!(err.to_string(), "quantity must be positive");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "model".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
