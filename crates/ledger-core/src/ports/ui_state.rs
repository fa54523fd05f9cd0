use async_trait::async_trait;

/// Keys of the client-side state that survives a restart.
///
/// Each key is stored on its own, the way a browser's local storage keeps
/// independent items, so one corrupt value never takes the others down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UiStateKey {
    SearchQuery,
    FilterBySelected,
    SelectedIds,
    SortDirection,
}

impl UiStateKey {
    pub const ALL: [UiStateKey; 4] = [
        UiStateKey::SearchQuery,
        UiStateKey::FilterBySelected,
        UiStateKey::SelectedIds,
        UiStateKey::SortDirection,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            UiStateKey::SearchQuery => "search_query",
            UiStateKey::FilterBySelected => "filter_by_selected",
            UiStateKey::SelectedIds => "selected_ids",
            UiStateKey::SortDirection => "sort_direction",
        }
    }
}

#[async_trait]
pub trait UiStatePort: Send + Sync {
    async fn get(&self, key: UiStateKey) -> anyhow::Result<Option<String>>;
    async fn set(&self, key: UiStateKey, value: &str) -> anyhow::Result<()>;
    async fn remove(&self, key: UiStateKey) -> anyhow::Result<()>;
}
