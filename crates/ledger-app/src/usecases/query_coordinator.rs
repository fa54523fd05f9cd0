use std::collections::BTreeSet;
use std::sync::Arc;

use ledger_core::ports::{CatalogStorePort, UiStateKey, UiStatePort};
use ledger_core::view::normalize_query;
use ledger_core::{Entry, EntryId, LedgerError, Notice, SortDirection};
use tokio::sync::Mutex;
use tracing::{error, info, warn};

use super::internal::UiStateStore;
use super::{CatalogStore, SelectionManager};
use crate::AppDeps;

/// What the presentation should show after a reload.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VisibleEntries {
    pub entries: Vec<Entry>,
    /// Problems the reload recovered from, for the user to see.
    pub notices: Vec<Notice>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DeleteSelectedOutcome {
    /// The selection was empty. Nothing was sent to the backend.
    NothingSelected,
    Deleted {
        requested: usize,
        removed: usize,
        view: VisibleEntries,
    },
}

#[derive(Debug, Clone, Default)]
struct ViewState {
    search_query: String,
    filter_mode: bool,
    sort_direction: SortDirection,
}

/// Combines the search query, filter mode and selection into the visible entry list.
/// 将搜索词、过滤模式和选择集合并为可见条目列表。
///
/// Owns the client-side view state. Every transition is persisted through the UI
/// state port as it happens, and [`QueryCoordinator::restore`] loads it back on
/// startup.
///
/// Locks are only held while state is read or changed, never across a backend
/// call. Overlapping reloads are not serialized: each completes on its own and the
/// caller keeps whichever answer arrives last.
pub struct QueryCoordinator {
    catalog: CatalogStore,
    selection: SelectionManager,
    state: UiStateStore,
    view: Mutex<ViewState>,
}

impl QueryCoordinator {
    pub fn from_ports(
        catalog_store: Arc<dyn CatalogStorePort>,
        ui_state: Arc<dyn UiStatePort>,
    ) -> Self {
        Self {
            catalog: CatalogStore::from_port(catalog_store),
            selection: SelectionManager::from_port(ui_state.clone()),
            state: UiStateStore::new(ui_state),
            view: Mutex::new(ViewState::default()),
        }
    }

    pub fn from_deps(deps: &AppDeps) -> Self {
        Self::from_ports(deps.catalog_store.clone(), deps.ui_state.clone())
    }

    /// Loads the persisted search query, filter flag, sort direction and selection.
    ///
    /// Values that are missing or unreadable fall back to their defaults.
    #[tracing::instrument(name = "usecase.query_coordinator.restore", skip(self))]
    pub async fn restore(&self) {
        let search_query = self
            .state
            .read(UiStateKey::SearchQuery)
            .await
            .map(|raw| normalize_query(&raw))
            .unwrap_or_default();
        let filter_mode = self
            .state
            .read_parsed::<bool>(UiStateKey::FilterBySelected)
            .await
            .unwrap_or(false);
        let sort_direction = self
            .state
            .read_parsed::<SortDirection>(UiStateKey::SortDirection)
            .await
            .unwrap_or_default();

        info!(
            search_active = !search_query.is_empty(),
            filter_mode,
            sort_direction = %sort_direction,
            "Restored view state"
        );

        *self.view.lock().await = ViewState {
            search_query,
            filter_mode,
            sort_direction,
        };
        self.selection.restore().await;
    }

    /// Reloads the catalog and derives the visible entries.
    ///
    /// 1. A non-empty query searches. If the search fails the query is reset,
    ///    an error notice is added and the full list is loaded instead.
    /// 2. An empty query lists. If listing fails the result is empty, with a notice.
    /// 3. The selection is reconciled, but only against a full listing. A search
    ///    result is a partial view, so selected entries it hides are kept.
    /// 4. With filter mode on and something selected, only selected entries remain.
    ///
    /// Never fails: read errors end up in [`VisibleEntries::notices`].
    #[tracing::instrument(name = "usecase.query_coordinator.visible_entries", skip(self))]
    pub async fn visible_entries(&self) -> VisibleEntries {
        let (query, filter_mode) = {
            let view = self.view.lock().await;
            (view.search_query.clone(), view.filter_mode)
        };
        let mut notices = Vec::new();

        let (loaded, full_listing) = if query.is_empty() {
            (self.catalog.list().await, true)
        } else {
            match self.catalog.search(&query).await {
                Ok(entries) => (Ok(entries), false),
                Err(err) => {
                    warn!(error = %err, "Search failed, falling back to the full list");
                    self.reset_search_query(&query).await;
                    notices.push(Notice::error(format!(
                        "Search failed, showing all entries: {err}"
                    )));
                    (self.catalog.list().await, true)
                }
            }
        };

        let mut entries = match loaded {
            Ok(entries) => {
                if full_listing {
                    let current: BTreeSet<EntryId> = entries.iter().map(Entry::id).collect();
                    self.selection.reconcile(&current).await;
                }
                entries
            }
            Err(err) => {
                error!(error = %err, "Failed to load the catalog");
                notices.push(Notice::error(format!("Could not load entries: {err}")));
                Vec::new()
            }
        };

        if filter_mode {
            let selected = self.selection.selected_ids().await;
            if !selected.is_empty() {
                entries.retain(|entry| selected.contains(&entry.id()));
            }
        }

        VisibleEntries { entries, notices }
    }

    /// Stores a new search query (trimmed) and reloads.
    pub async fn set_search_query(&self, raw: &str) -> VisibleEntries {
        let query = normalize_query(raw);
        self.view.lock().await.search_query = query.clone();
        self.persist_search_query(&query).await;
        self.visible_entries().await
    }

    /// Flips filter mode and returns the new value.
    pub async fn toggle_filter_mode(&self) -> bool {
        let enabled = {
            let mut view = self.view.lock().await;
            view.filter_mode = !view.filter_mode;
            view.filter_mode
        };
        self.state
            .write(UiStateKey::FilterBySelected, &enabled.to_string())
            .await;
        enabled
    }

    /// Flips the table order and returns the new direction.
    pub async fn toggle_sort_direction(&self) -> SortDirection {
        let direction = {
            let mut view = self.view.lock().await;
            view.sort_direction = view.sort_direction.toggled();
            view.sort_direction
        };
        self.state
            .write(UiStateKey::SortDirection, direction.as_str())
            .await;
        direction
    }

    pub async fn toggle_selection(&self, id: EntryId) -> bool {
        self.selection.toggle(id).await
    }

    pub async fn set_selected(&self, id: EntryId, is_selected: bool) {
        self.selection.select(id, is_selected).await;
    }

    pub async fn clear_selection(&self) {
        self.selection.clear().await;
    }

    pub async fn create_entry(
        &self,
        name: &str,
        time_expression: &str,
    ) -> Result<Entry, LedgerError> {
        self.catalog.create(name, time_expression).await
    }

    pub async fn update_entry(
        &self,
        id: EntryId,
        name: &str,
        time_expression: &str,
    ) -> Result<Entry, LedgerError> {
        self.catalog.update(id, name, time_expression).await
    }

    /// Deletes every selected entry, then reloads.
    ///
    /// The selection is first reconciled against a fresh listing so ids that are
    /// already gone are not sent. A delete failure is returned as-is and leaves the
    /// selection untouched.
    #[tracing::instrument(name = "usecase.query_coordinator.delete_selected", skip(self))]
    pub async fn delete_selected(&self) -> Result<DeleteSelectedOutcome, LedgerError> {
        match self.catalog.list().await {
            Ok(entries) => {
                let current: BTreeSet<EntryId> = entries.iter().map(Entry::id).collect();
                self.selection.reconcile(&current).await;
            }
            Err(err) => {
                warn!(error = %err, "Could not refresh the catalog before deleting");
            }
        }

        let target = self.selection.selected_ids().await;
        if target.is_empty() {
            info!("Nothing selected, skipping delete");
            return Ok(DeleteSelectedOutcome::NothingSelected);
        }

        let removed = self.catalog.delete_many(&target).await?;
        self.selection.forget(&target).await;

        info!(requested = target.len(), removed, "Deleted selected entries");
        let view = self.visible_entries().await;
        Ok(DeleteSelectedOutcome::Deleted {
            requested: target.len(),
            removed,
            view,
        })
    }

    pub async fn search_query(&self) -> String {
        self.view.lock().await.search_query.clone()
    }

    pub async fn filter_mode(&self) -> bool {
        self.view.lock().await.filter_mode
    }

    pub async fn sort_direction(&self) -> SortDirection {
        self.view.lock().await.sort_direction
    }

    pub async fn selected_ids(&self) -> BTreeSet<EntryId> {
        self.selection.selected_ids().await
    }

    /// Clears the query after a failed search, unless it changed in the meantime.
    async fn reset_search_query(&self, failed_query: &str) {
        {
            let mut view = self.view.lock().await;
            if view.search_query != failed_query {
                return;
            }
            view.search_query.clear();
        }
        self.persist_search_query("").await;
    }

    async fn persist_search_query(&self, query: &str) {
        if query.is_empty() {
            self.state.erase(UiStateKey::SearchQuery).await;
        } else {
            self.state.write(UiStateKey::SearchQuery, query).await;
        }
    }
}
