//! # ledger-core
//!
//! Core domain models and business rules for Product Ledger.
//!
//! This crate contains pure business logic without any infrastructure dependencies.

// Public module exports
pub mod catalog;
pub mod config;
pub mod error;
pub mod expression;
pub mod ports;
pub mod selection;
pub mod view;

// Re-export commonly used types at the crate root
pub use catalog::{Entry, EntryId, EntryRecord};
pub use config::AppConfig;
pub use error::{ErrorCategory, LedgerError};
pub use expression::{evaluate, InvalidExpressionError};
pub use selection::SelectionSet;
pub use view::{Notice, NoticeLevel, SortDirection};
