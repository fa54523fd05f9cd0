use std::collections::HashMap;

use async_trait::async_trait;
use ledger_core::ports::{UiStateKey, UiStatePort};
use tokio::sync::RwLock;

/// UI state that lives only as long as the process.
#[derive(Default)]
pub struct InMemoryUiStateRepository {
    values: RwLock<HashMap<UiStateKey, String>>,
}

impl InMemoryUiStateRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UiStatePort for InMemoryUiStateRepository {
    async fn get(&self, key: UiStateKey) -> anyhow::Result<Option<String>> {
        Ok(self.values.read().await.get(&key).cloned())
    }

    async fn set(&self, key: UiStateKey, value: &str) -> anyhow::Result<()> {
        self.values.write().await.insert(key, value.to_string());
        Ok(())
    }

    async fn remove(&self, key: UiStateKey) -> anyhow::Result<()> {
        self.values.write().await.remove(&key);
        Ok(())
    }
}
