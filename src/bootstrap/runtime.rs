//! # Application Runtime
//!
//! Wires the storage adapters named by [`AppConfig`] into [`AppDeps`] and builds
//! the query coordinator the command layer talks to.
//!
//! Commands take `&AppRuntime` and call `runtime.coordinator()`.

use std::sync::Arc;

use ledger_app::{AppDeps, QueryCoordinator};
use ledger_core::config::AppConfig;
use ledger_infra::{FileCatalogRepository, FileUiStateRepository};
use tracing::info;

/// Application runtime with dependencies.
pub struct AppRuntime {
    pub deps: AppDeps,
    coordinator: QueryCoordinator,
}

impl AppRuntime {
    pub fn new(deps: AppDeps) -> Self {
        let coordinator = QueryCoordinator::from_deps(&deps);
        Self { deps, coordinator }
    }

    /// File-backed runtime: catalog document and per-key UI state files.
    pub fn from_config(config: &AppConfig) -> Self {
        info!(
            catalog = %config.catalog_path.display(),
            state_dir = %config.state_dir.display(),
            "Wiring file storage"
        );
        Self::new(AppDeps {
            catalog_store: Arc::new(FileCatalogRepository::new(config.catalog_path.clone())),
            ui_state: Arc::new(FileUiStateRepository::new(config.state_dir.clone())),
        })
    }

    /// Loads the persisted view state. Call once before the first command.
    pub async fn restore(&self) {
        self.coordinator.restore().await;
    }

    pub fn coordinator(&self) -> &QueryCoordinator {
        &self.coordinator
    }
}
