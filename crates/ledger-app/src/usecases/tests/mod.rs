//! Shared test doubles for the use case tests.


use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

use anyhow::Result;
use async_trait::async_trait;
use ledger_core::ports::{CatalogStoreError, CatalogStorePort, UiStateKey, UiStatePort};
use ledger_core::{EntryId, EntryRecord};
use ledger_infra::InMemoryCatalogStore;
use tokio::sync::Notify;

/// UI state store that keeps values in a map the test can inspect synchronously.
#[derive(Default)]
pub struct RecordingUiState {
    values: Mutex<HashMap<UiStateKey, String>>,
}

impl RecordingUiState {
    pub fn value(&self, key: UiStateKey) -> Option<String> {
        self.values.lock().unwrap().get(&key).cloned()
    }

    pub fn put(&self, key: UiStateKey, value: &str) {
        self.values.lock().unwrap().insert(key, value.to_string());
    }
}

#[async_trait]
impl UiStatePort for RecordingUiState {
    async fn get(&self, key: UiStateKey) -> Result<Option<String>> {
        Ok(self.value(key))
    }

    async fn set(&self, key: UiStateKey, value: &str) -> Result<()> {
        self.put(key, value);
        Ok(())
    }

    async fn remove(&self, key: UiStateKey) -> Result<()> {
        self.values.lock().unwrap().remove(&key);
        Ok(())
    }
}

/// In-memory catalog whose reads and deletes can be switched to fail.
pub struct FlakyCatalogStore {
    inner: InMemoryCatalogStore,
    fail_search: AtomicBool,
    fail_list: AtomicBool,
    fail_delete: AtomicBool,
    search_calls: AtomicUsize,
    delete_calls: AtomicUsize,
}

impl FlakyCatalogStore {
    pub fn new(inner: InMemoryCatalogStore) -> Self {
        Self {
            inner,
            fail_search: AtomicBool::new(false),
            fail_list: AtomicBool::new(false),
            fail_delete: AtomicBool::new(false),
            search_calls: AtomicUsize::new(0),
            delete_calls: AtomicUsize::new(0),
        }
    }

    pub fn inner(&self) -> &InMemoryCatalogStore {
        &self.inner
    }

    pub fn fail_search(&self, fail: bool) {
        self.fail_search.store(fail, Ordering::SeqCst);
    }

    pub fn fail_list(&self, fail: bool) {
        self.fail_list.store(fail, Ordering::SeqCst);
    }

    pub fn fail_delete(&self, fail: bool) {
        self.fail_delete.store(fail, Ordering::SeqCst);
    }

    pub fn search_calls(&self) -> usize {
        self.search_calls.load(Ordering::SeqCst)
    }

    pub fn delete_calls(&self) -> usize {
        self.delete_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CatalogStorePort for FlakyCatalogStore {
    async fn list_all(&self) -> Result<Option<Vec<EntryRecord>>, CatalogStoreError> {
        if self.fail_list.load(Ordering::SeqCst) {
            return Err(CatalogStoreError::Unavailable("mock list failure".into()));
        }
        self.inner.list_all().await
    }

    async fn search_by_name(
        &self,
        substring: &str,
    ) -> Result<Option<Vec<EntryRecord>>, CatalogStoreError> {
        self.search_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_search.load(Ordering::SeqCst) {
            return Err(CatalogStoreError::Unavailable("mock search failure".into()));
        }
        self.inner.search_by_name(substring).await
    }

    async fn insert(
        &self,
        name: &str,
        time_expression: &str,
        duration: f64,
    ) -> Result<EntryId, CatalogStoreError> {
        self.inner.insert(name, time_expression, duration).await
    }

    async fn update_by_id(
        &self,
        id: EntryId,
        name: &str,
        time_expression: &str,
        duration: f64,
    ) -> Result<bool, CatalogStoreError> {
        self.inner
            .update_by_id(id, name, time_expression, duration)
            .await
    }

    async fn delete_by_ids(&self, ids: &[EntryId]) -> Result<usize, CatalogStoreError> {
        self.delete_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_delete.load(Ordering::SeqCst) {
            return Err(CatalogStoreError::Storage("mock delete failure".into()));
        }
        self.inner.delete_by_ids(ids).await
    }
}

/// Catalog whose first search stalls until released, then fails.
///
/// `entered` fires once that search is waiting. Later searches go straight to
/// the inner store.
pub struct GatedSearchStore {
    inner: InMemoryCatalogStore,
    gated: AtomicBool,
    pub entered: Notify,
    pub release: Notify,
}

impl GatedSearchStore {
    pub fn new(records: Vec<EntryRecord>) -> Self {
        Self {
            inner: InMemoryCatalogStore::with_records(records),
            gated: AtomicBool::new(true),
            entered: Notify::new(),
            release: Notify::new(),
        }
    }
}

#[async_trait]
impl CatalogStorePort for GatedSearchStore {
    async fn list_all(&self) -> Result<Option<Vec<EntryRecord>>, CatalogStoreError> {
        self.inner.list_all().await
    }

    async fn search_by_name(
        &self,
        substring: &str,
    ) -> Result<Option<Vec<EntryRecord>>, CatalogStoreError> {
        if self.gated.swap(false, Ordering::SeqCst) {
            self.entered.notify_one();
            self.release.notified().await;
            return Err(CatalogStoreError::Unavailable("mock stalled search".into()));
        }
        self.inner.search_by_name(substring).await
    }

    async fn insert(
        &self,
        name: &str,
        time_expression: &str,
        duration: f64,
    ) -> Result<EntryId, CatalogStoreError> {
        self.inner.insert(name, time_expression, duration).await
    }

    async fn update_by_id(
        &self,
        id: EntryId,
        name: &str,
        time_expression: &str,
        duration: f64,
    ) -> Result<bool, CatalogStoreError> {
        self.inner
            .update_by_id(id, name, time_expression, duration)
            .await
    }

    async fn delete_by_ids(&self, ids: &[EntryId]) -> Result<usize, CatalogStoreError> {
        self.inner.delete_by_ids(ids).await
    }
}
