use std::collections::BTreeSet;
use std::sync::Arc;

use ledger_core::ports::CatalogStorePort;
use ledger_core::view::normalize_query;
use ledger_core::{evaluate, Entry, EntryId, EntryRecord, LedgerError};
use tracing::{debug, info, warn};

/// Typed facade over the catalog storage backend.
/// 目录存储后端的类型化门面。
///
/// Every write goes through here, which is what keeps `duration` equal to the
/// evaluated `time_expression`: the expression is evaluated before the backend is
/// called, and an invalid one never reaches it.
#[derive(Clone)]
pub struct CatalogStore {
    store: Arc<dyn CatalogStorePort>,
}

struct PreparedEntry {
    name: String,
    time_expression: String,
    duration: f64,
}

impl CatalogStore {
    pub fn from_port(store: Arc<dyn CatalogStorePort>) -> Self {
        Self { store }
    }

    /// Returns every entry in the backend's order.
    ///
    /// A backend answer without a record list is an empty catalog, not an error.
    #[tracing::instrument(name = "usecase.catalog_store.list", skip(self))]
    pub async fn list(&self) -> Result<Vec<Entry>, LedgerError> {
        let records = self.store.list_all().await?;
        Ok(into_entries(records))
    }

    /// Case-insensitive name search. A blank query is the same as [`Self::list`].
    #[tracing::instrument(name = "usecase.catalog_store.search", skip(self))]
    pub async fn search(&self, query: &str) -> Result<Vec<Entry>, LedgerError> {
        let query = normalize_query(query);
        if query.is_empty() {
            return self.list().await;
        }

        let records = self.store.search_by_name(&query).await?;
        let entries = into_entries(records);
        debug!(matches = entries.len(), "Catalog search finished");
        Ok(entries)
    }

    /// Evaluates `time_expression` and stores a new entry.
    ///
    /// # Errors
    /// - [`LedgerError::Validation`] for a blank name
    /// - [`LedgerError::InvalidExpression`] when the expression does not evaluate;
    ///   the backend is not called
    /// - [`LedgerError::Collaborator`] when the backend fails
    #[tracing::instrument(name = "usecase.catalog_store.create", skip(self))]
    pub async fn create(&self, name: &str, time_expression: &str) -> Result<Entry, LedgerError> {
        let prepared = prepare(name, time_expression)?;

        let id = self
            .store
            .insert(&prepared.name, &prepared.time_expression, prepared.duration)
            .await?;

        info!(entry_id = %id, duration = prepared.duration, "Created catalog entry");
        Ok(Entry::new(
            id,
            prepared.name,
            prepared.time_expression,
            prepared.duration,
        ))
    }

    /// Re-evaluates `time_expression` and overwrites entry `id`.
    ///
    /// Fails with [`LedgerError::NotFound`] when the backend has no such entry.
    #[tracing::instrument(
        name = "usecase.catalog_store.update",
        skip(self, name, time_expression),
        fields(entry_id = %id)
    )]
    pub async fn update(
        &self,
        id: EntryId,
        name: &str,
        time_expression: &str,
    ) -> Result<Entry, LedgerError> {
        let prepared = prepare(name, time_expression)?;

        let found = self
            .store
            .update_by_id(
                id,
                &prepared.name,
                &prepared.time_expression,
                prepared.duration,
            )
            .await?;
        if !found {
            return Err(LedgerError::NotFound(id));
        }

        info!(entry_id = %id, duration = prepared.duration, "Updated catalog entry");
        Ok(Entry::new(
            id,
            prepared.name,
            prepared.time_expression,
            prepared.duration,
        ))
    }

    /// Deletes `ids` and returns how many entries the backend removed.
    ///
    /// An empty set is a no-op that never reaches the backend.
    #[tracing::instrument(
        name = "usecase.catalog_store.delete_many",
        skip(self, ids),
        fields(requested = ids.len())
    )]
    pub async fn delete_many(&self, ids: &BTreeSet<EntryId>) -> Result<usize, LedgerError> {
        if ids.is_empty() {
            return Ok(0);
        }

        let ids: Vec<EntryId> = ids.iter().copied().collect();
        let removed = self.store.delete_by_ids(&ids).await?;

        info!(removed, "Deleted catalog entries");
        Ok(removed)
    }
}

fn into_entries(records: Option<Vec<EntryRecord>>) -> Vec<Entry> {
    let Some(records) = records else {
        warn!("Catalog backend answered without a record list, treating it as empty");
        return Vec::new();
    };
    records.into_iter().map(Entry::from).collect()
}

fn prepare(name: &str, time_expression: &str) -> Result<PreparedEntry, LedgerError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(LedgerError::Validation("name must not be empty".to_string()));
    }

    let time_expression = time_expression.trim();
    let duration = evaluate(time_expression)?;

    Ok(PreparedEntry {
        name: name.to_string(),
        time_expression: time_expression.to_string(),
        duration,
    })
}
