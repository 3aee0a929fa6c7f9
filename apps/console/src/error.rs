//! # Console Error Type
//!
//! Unified error type for the command layer.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Console                            │
//! │                                                                         │
//! │  CoreError (business rule)  ──┐                                         │
//! │  StoreError (file access)   ──┼──► AppError ──► menu prints one line    │
//! │  Gating (role / login)      ──┘                 and re-prompts          │
//! │                                                                         │
//! │  Business errors are NORMAL here ("out of stock" is an answer, not a   │
//! │  crash). The menu shows the message and carries on; only startup       │
//! │  failures terminate the process.                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

use goldenhour_core::{CoreError, ValidationError};
use goldenhour_store::StoreError;

/// Error shown to the operator by the menu layer.
#[derive(Debug, Error)]
pub enum AppError {
    /// An action that needs a session was attempted without one.
    #[error("Please log in first")]
    NotLoggedIn,

    /// Employee id / password pair did not match.
    ///
    /// Deliberately does not say which half was wrong.
    #[error("Invalid employee id or password")]
    BadCredentials,

    /// The operator's role does not grant the capability.
    #[error("Only managers may {action}")]
    Unauthorized { action: &'static str },

    /// Business rule violation from the core crate.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Persistence failure from the store crate.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Terminal I/O failure (stdin closed, broken pipe).
    #[error("terminal i/o failed: {0}")]
    Io(#[from] std::io::Error),
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        AppError::Core(err.into())
    }
}

/// Result type for command handlers.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = AppError::Unauthorized {
            action: "register employees",
        };
        assert_eq!(err.to_string(), "Only managers may register employees");
    }

    #[test]
    fn test_core_errors_pass_through_verbatim() {
        let err: AppError = CoreError::ModelNotFound("Widget".to_string()).into();
        assert_eq!(err.to_string(), "Product not found in this outlet: Widget");
    }

    #[test]
    fn test_validation_errors_chain_through_core() {
        let err: AppError = ValidationError::Required {
            field: "customer name".to_string(),
        }
        .into();
        assert!(matches!(err, AppError::Core(CoreError::Validation(_))));
    }
}
