//! # Application Dependencies
//!
//! This module defines the dependency grouping for use case construction.
//!
//! **Note**: This is NOT a Builder pattern.
//! - No build steps
//! - No default values
//! - Just parameter grouping

use std::sync::Arc;
use ledger_core::ports::{CatalogStorePort, UiStatePort};

/// Application dependency grouping (non-Builder, just parameter grouping)
///
/// All dependencies are required - no defaults, no optional fields.
#[derive(Clone)]
pub struct AppDeps {
    // Catalog storage backend
    pub catalog_store: Arc<dyn CatalogStorePort>,

    // Persisted client-side state (search query, filter flag, selection, sort)
    pub ui_state: Arc<dyn UiStatePort>,
}
