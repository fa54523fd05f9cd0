use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::catalog::EntryId;
use crate::expression::InvalidExpressionError;
use crate::ports::CatalogStoreError;

/// Errors surfaced by ledger operations.
///
/// Validation and expression errors are raised before anything is written.
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("invalid time expression: {0}")]
    InvalidExpression(#[from] InvalidExpressionError),

    #[error("{0}")]
    Validation(String),

    #[error("entry {0} not found")]
    NotFound(EntryId),

    #[error("catalog storage failed: {0}")]
    Collaborator(#[from] CatalogStoreError),
}

impl LedgerError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            LedgerError::InvalidExpression(_) => ErrorCategory::InvalidExpression,
            LedgerError::Validation(_) => ErrorCategory::Validation,
            LedgerError::NotFound(_) => ErrorCategory::NotFound,
            LedgerError::Collaborator(_) => ErrorCategory::Collaborator,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    InvalidExpression,
    Validation,
    NotFound,
    Collaborator,
}
