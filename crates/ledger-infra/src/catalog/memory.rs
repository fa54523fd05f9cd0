use async_trait::async_trait;
use ledger_core::ports::{CatalogStoreError, CatalogStorePort};
use ledger_core::{EntryId, EntryRecord};
use tokio::sync::RwLock;

use super::records;

/// Catalog kept in process memory, in insertion order.
#[derive(Default)]
pub struct InMemoryCatalogStore {
    records: RwLock<Vec<EntryRecord>>,
}

impl InMemoryCatalogStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: Vec<EntryRecord>) -> Self {
        Self {
            records: RwLock::new(records),
        }
    }

    pub async fn snapshot(&self) -> Vec<EntryRecord> {
        self.records.read().await.clone()
    }
}

#[async_trait]
impl CatalogStorePort for InMemoryCatalogStore {
    async fn list_all(&self) -> Result<Option<Vec<EntryRecord>>, CatalogStoreError> {
        Ok(Some(self.snapshot().await))
    }

    async fn search_by_name(
        &self,
        substring: &str,
    ) -> Result<Option<Vec<EntryRecord>>, CatalogStoreError> {
        let records = self.records.read().await;
        Ok(Some(records::search(&records, substring)))
    }

    async fn insert(
        &self,
        name: &str,
        time_expression: &str,
        duration: f64,
    ) -> Result<EntryId, CatalogStoreError> {
        let mut records = self.records.write().await;
        records::insert(&mut records, name, time_expression, duration)
    }

    async fn update_by_id(
        &self,
        id: EntryId,
        name: &str,
        time_expression: &str,
        duration: f64,
    ) -> Result<bool, CatalogStoreError> {
        let mut records = self.records.write().await;
        Ok(records::update(&mut records, id, name, time_expression, duration))
    }

    async fn delete_by_ids(&self, ids: &[EntryId]) -> Result<usize, CatalogStoreError> {
        let mut records = self.records.write().await;
        Ok(records::delete(&mut records, ids))
    }
}
