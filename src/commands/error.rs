use ledger_core::{ErrorCategory, LedgerError};
use serde::Serialize;
use thiserror::Error;

/// Error returned by every command: a category the presentation can branch on
/// and a message for the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Error)]
#[error("{message}")]
pub struct CommandError {
    pub category: ErrorCategory,
    pub message: String,
}

/// Centralized error mapping for commands.
pub fn map_err(err: LedgerError) -> CommandError {
    CommandError {
        category: err.category(),
        message: err.to_string(),
    }
}
