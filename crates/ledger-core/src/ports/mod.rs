//! Port interfaces for the application layer
//!
//! Ports define the contract between the ledger use cases and the outside
//! world: the catalog storage backend and the client-side state store. The use
//! cases only ever see these traits, so the backends can be swapped (in-memory
//! for tests, files for the shell) without touching business rules.

pub mod catalog_store;
pub mod errors;
pub mod ui_state;

pub use catalog_store::CatalogStorePort;
pub use errors::CatalogStoreError;
pub use ui_state::{UiStateKey, UiStatePort};
