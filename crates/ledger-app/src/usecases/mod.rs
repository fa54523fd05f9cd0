//! Business logic use cases
//!
//! CatalogStore        → typed catalog operations, expression evaluation before writes
//!         ↓
//! SelectionManager    → marked entries, persisted on every change
//!         ↓
//! QueryCoordinator    → search query + filter mode → visible entries, bulk delete

mod internal;

pub mod catalog_store;
pub mod query_coordinator;
pub mod selection_manager;

#[cfg(test)]
mod tests;

pub use catalog_store::CatalogStore;
pub use query_coordinator::{DeleteSelectedOutcome, QueryCoordinator, VisibleEntries};
pub use selection_manager::SelectionManager;
