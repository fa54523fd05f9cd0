//! Storage adapters for the ledger ports.
//!
//! - [`catalog`]: catalog backends (in-memory, JSON file)
//! - [`ui_state`]: persisted client-side view state (in-memory, one file per key)

pub mod catalog;
pub mod ui_state;

pub use catalog::{FileCatalogRepository, InMemoryCatalogStore};
pub use ui_state::{FileUiStateRepository, InMemoryUiStateRepository};
