use std::collections::BTreeSet;
use std::sync::Arc;

use ledger_core::ports::{UiStateKey, UiStatePort};
use ledger_core::{EntryId, SelectionSet};
use tokio::sync::Mutex;
use tracing::{debug, warn};

use super::internal::UiStateStore;

/// Tracks which catalog entries the user has marked.
/// 跟踪用户标记的目录条目。
///
/// Every change is written through to the UI state store right away. The write
/// is fire-and-forget: a failure is logged and the in-memory set stays as it is.
pub struct SelectionManager {
    selection: Mutex<SelectionSet>,
    state: UiStateStore,
}

impl SelectionManager {
    pub fn from_port(ui_state: Arc<dyn UiStatePort>) -> Self {
        Self {
            selection: Mutex::new(SelectionSet::new()),
            state: UiStateStore::new(ui_state),
        }
    }

    /// Loads the persisted selection, replacing whatever is in memory.
    ///
    /// A missing or unreadable value restores an empty selection.
    pub async fn restore(&self) {
        let restored = match self.state.read(UiStateKey::SelectedIds).await {
            Some(raw) => match serde_json::from_str::<SelectionSet>(&raw) {
                Ok(set) => set,
                Err(err) => {
                    warn!(error = %err, "Ignoring unreadable persisted selection");
                    SelectionSet::new()
                }
            },
            None => SelectionSet::new(),
        };

        debug!(selected = restored.len(), "Restored selection");
        *self.selection.lock().await = restored;
    }

    /// Marks or unmarks `id`.
    #[tracing::instrument(name = "usecase.selection.select", skip(self), fields(entry_id = %id))]
    pub async fn select(&self, id: EntryId, is_selected: bool) {
        let snapshot = {
            let mut selection = self.selection.lock().await;
            selection.set(id, is_selected);
            selection.clone()
        };
        self.persist(&snapshot).await;
    }

    /// Flips `id` and returns whether it is selected now.
    #[tracing::instrument(name = "usecase.selection.toggle", skip(self), fields(entry_id = %id))]
    pub async fn toggle(&self, id: EntryId) -> bool {
        let (now_selected, snapshot) = {
            let mut selection = self.selection.lock().await;
            let now_selected = selection.toggle(id);
            (now_selected, selection.clone())
        };
        self.persist(&snapshot).await;
        now_selected
    }

    pub async fn clear(&self) {
        self.selection.lock().await.clear();
        self.state.erase(UiStateKey::SelectedIds).await;
    }

    /// Drops selected ids that are not in `current` and returns them.
    ///
    /// Persists only when something was dropped.
    pub async fn reconcile(&self, current: &BTreeSet<EntryId>) -> Vec<EntryId> {
        let (dropped, snapshot) = {
            let mut selection = self.selection.lock().await;
            let dropped = selection.reconcile(current);
            (dropped, selection.clone())
        };
        if !dropped.is_empty() {
            self.persist(&snapshot).await;
        }
        dropped
    }

    /// Unselects `ids` after they were deleted. Returns how many were selected.
    pub async fn forget(&self, ids: &BTreeSet<EntryId>) -> usize {
        let (forgotten, snapshot) = {
            let mut selection = self.selection.lock().await;
            let forgotten = selection.forget(ids);
            (forgotten, selection.clone())
        };
        if forgotten > 0 {
            self.persist(&snapshot).await;
        }
        forgotten
    }

    pub async fn selected_ids(&self) -> BTreeSet<EntryId> {
        self.selection.lock().await.ids().clone()
    }

    async fn persist(&self, snapshot: &SelectionSet) {
        if snapshot.is_empty() {
            self.state.erase(UiStateKey::SelectedIds).await;
            return;
        }
        match serde_json::to_string(snapshot) {
            Ok(raw) => self.state.write(UiStateKey::SelectedIds, &raw).await,
            Err(err) => warn!(error = %err, "Failed to encode selection"),
        }
    }
}
