//! Product Ledger Application Orchestration Layer
//!
//! This crate contains the use cases the presentation layer calls: the catalog
//! store facade, the selection manager and the query coordinator on top of both.

pub mod deps;
pub mod usecases;

pub use deps::AppDeps;
pub use usecases::{
    CatalogStore, DeleteSelectedOutcome, QueryCoordinator, SelectionManager, VisibleEntries,
};
