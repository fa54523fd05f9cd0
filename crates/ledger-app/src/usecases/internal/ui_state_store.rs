use std::str::FromStr;
use std::sync::Arc;

use ledger_core::ports::{UiStateKey, UiStatePort};
use tracing::warn;

/// Fire-and-forget access to persisted UI state.
///
/// Writes are never acknowledged to the caller and never rolled back: a failed
/// write is logged and the in-memory state stays authoritative for the session.
/// Reads that fail, or that hold a value which does not parse, behave as unset.
#[derive(Clone)]
pub(crate) struct UiStateStore {
    port: Arc<dyn UiStatePort>,
}

impl UiStateStore {
    pub(crate) fn new(port: Arc<dyn UiStatePort>) -> Self {
        Self { port }
    }

    pub(crate) async fn read(&self, key: UiStateKey) -> Option<String> {
        match self.port.get(key).await {
            Ok(value) => value,
            Err(err) => {
                warn!(key = key.as_str(), error = %err, "Failed to read persisted UI state");
                None
            }
        }
    }

    pub(crate) async fn read_parsed<T>(&self, key: UiStateKey) -> Option<T>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        let raw = self.read(key).await?;
        match raw.parse::<T>() {
            Ok(value) => Some(value),
            Err(err) => {
                warn!(key = key.as_str(), error = %err, "Ignoring unreadable persisted UI state");
                None
            }
        }
    }

    pub(crate) async fn write(&self, key: UiStateKey, value: &str) {
        if let Err(err) = self.port.set(key, value).await {
            warn!(key = key.as_str(), error = %err, "Failed to persist UI state");
        }
    }

    pub(crate) async fn erase(&self, key: UiStateKey) {
        if let Err(err) = self.port.remove(key).await {
            warn!(key = key.as_str(), error = %err, "Failed to remove persisted UI state");
        }
    }
}
