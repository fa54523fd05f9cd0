//! Record-list operations shared by the catalog adapters.

use ledger_core::ports::CatalogStoreError;
use ledger_core::view::name_matches;
use ledger_core::{EntryId, EntryRecord};

pub(crate) fn search(records: &[EntryRecord], substring: &str) -> Vec<EntryRecord> {
    records
        .iter()
        .filter(|record| name_matches(&record.name, substring))
        .cloned()
        .collect()
}

/// Appends a record with the next free id (`max + 1`, starting at 1).
///
/// Fails with `Storage` once the largest id is `i64::MAX`.
pub(crate) fn insert(
    records: &mut Vec<EntryRecord>,
    name: &str,
    time_expression: &str,
    duration: f64,
) -> Result<EntryId, CatalogStoreError> {
    let id = EntryId::next_after(records.iter().map(|record| &record.id))
        .ok_or_else(|| CatalogStoreError::Storage("entry ids exhausted".to_string()))?;
    records.push(EntryRecord {
        id,
        name: name.to_string(),
        duration,
        time_expression: time_expression.to_string(),
    });
    Ok(id)
}

pub(crate) fn update(
    records: &mut [EntryRecord],
    id: EntryId,
    name: &str,
    time_expression: &str,
    duration: f64,
) -> bool {
    let Some(record) = records.iter_mut().find(|record| record.id == id) else {
        return false;
    };
    record.name = name.to_string();
    record.time_expression = time_expression.to_string();
    record.duration = duration;
    true
}

pub(crate) fn delete(records: &mut Vec<EntryRecord>, ids: &[EntryId]) -> usize {
    let before = records.len();
    records.retain(|record| !ids.contains(&record.id));
    before - records.len()
}
