use ledger_app::VisibleEntries;
use ledger_core::{Entry, EntryId, Notice, SortDirection};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Entry row DTO for the presentation.
///
/// Separates the presentation from the domain model so either can evolve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntryDto {
    pub id: i64,
    pub name: String,
    pub time_expression: String,
    pub duration: f64,
    pub selected: bool,
}

impl EntryDto {
    pub fn from_entry(entry: &Entry, selected: &BTreeSet<EntryId>) -> Self {
        Self {
            id: entry.id().value(),
            name: entry.name().to_string(),
            time_expression: entry.time_expression().to_string(),
            duration: entry.duration(),
            selected: selected.contains(&entry.id()),
        }
    }
}

/// Everything a command hands back: the rows to show plus the view state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerViewDto {
    /// Rows ordered by `sort_direction`.
    pub entries: Vec<EntryDto>,
    pub notices: Vec<Notice>,
    pub search_query: String,
    pub filter_mode: bool,
    pub sort_direction: SortDirection,
    pub selected_count: usize,
}

impl LedgerViewDto {
    pub fn build(
        visible: VisibleEntries,
        selected: &BTreeSet<EntryId>,
        search_query: String,
        filter_mode: bool,
        sort_direction: SortDirection,
    ) -> Self {
        let VisibleEntries {
            mut entries,
            notices,
        } = visible;
        sort_direction.apply(&mut entries);

        Self {
            entries: entries
                .iter()
                .map(|entry| EntryDto::from_entry(entry, selected))
                .collect(),
            notices,
            search_query,
            filter_mode,
            sort_direction,
            selected_count: selected.len(),
        }
    }
}
