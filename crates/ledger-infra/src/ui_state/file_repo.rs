//! File-based UI state repository
//!
//! Each [`UiStateKey`] is kept in its own file inside a state directory, so a
//! corrupt value only ever affects that one key.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use async_trait::async_trait;
use ledger_core::config::STATE_DIR_NAME;
use ledger_core::ports::{UiStateKey, UiStatePort};
use tokio::fs;

pub struct FileUiStateRepository {
    dir: PathBuf,
}

impl FileUiStateRepository {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Repository at `<base_dir>/state`.
    pub fn with_defaults(base_dir: &Path) -> Self {
        Self::new(base_dir.join(STATE_DIR_NAME))
    }

    fn key_path(&self, key: UiStateKey) -> PathBuf {
        self.dir.join(key.as_str())
    }
}

#[async_trait]
impl UiStatePort for FileUiStateRepository {
    async fn get(&self, key: UiStateKey) -> Result<Option<String>> {
        let path = self.key_path(key);
        match fs::read_to_string(&path).await {
            Ok(content) => Ok(Some(content)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => {
                Err(err).with_context(|| format!("read ui state failed: {}", path.display()))
            }
        }
    }

    async fn set(&self, key: UiStateKey, value: &str) -> Result<()> {
        fs::create_dir_all(&self.dir)
            .await
            .with_context(|| format!("create state dir failed: {}", self.dir.display()))?;

        let path = self.key_path(key);
        let tmp_path = path.with_extension("tmp");
        fs::write(&tmp_path, value)
            .await
            .with_context(|| format!("write temp ui state failed: {}", tmp_path.display()))?;
        fs::rename(&tmp_path, &path).await.with_context(|| {
            format!(
                "rename temp ui state to target failed: {} -> {}",
                tmp_path.display(),
                path.display()
            )
        })?;

        Ok(())
    }

    async fn remove(&self, key: UiStateKey) -> Result<()> {
        let path = self.key_path(key);
        match fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => {
                Err(err).with_context(|| format!("remove ui state failed: {}", path.display()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_get_returns_none_when_dir_missing() {
        let temp_dir = TempDir::new().unwrap();
        let repo = FileUiStateRepository::with_defaults(temp_dir.path());

        for key in UiStateKey::ALL {
            assert_eq!(repo.get(key).await.unwrap(), None);
        }
    }

    #[tokio::test]
    async fn test_set_get_remove() {
        let temp_dir = TempDir::new().unwrap();
        let repo = FileUiStateRepository::with_defaults(temp_dir.path());

        repo.set(UiStateKey::SearchQuery, "wid").await.unwrap();
        repo.set(UiStateKey::SelectedIds, "[1,3]").await.unwrap();
        assert_eq!(
            repo.get(UiStateKey::SearchQuery).await.unwrap().as_deref(),
            Some("wid")
        );

        repo.remove(UiStateKey::SearchQuery).await.unwrap();
        assert_eq!(repo.get(UiStateKey::SearchQuery).await.unwrap(), None);
        assert_eq!(
            repo.get(UiStateKey::SelectedIds).await.unwrap().as_deref(),
            Some("[1,3]")
        );
    }

    #[tokio::test]
    async fn test_remove_missing_key_is_ok() {
        let temp_dir = TempDir::new().unwrap();
        let repo = FileUiStateRepository::new(temp_dir.path());

        repo.remove(UiStateKey::SortDirection).await.unwrap();
    }

    #[tokio::test]
    async fn test_values_persist_across_instances() {
        let temp_dir = TempDir::new().unwrap();
        FileUiStateRepository::new(temp_dir.path())
            .set(UiStateKey::FilterBySelected, "true")
            .await
            .unwrap();

        let reopened = FileUiStateRepository::new(temp_dir.path());
        assert_eq!(
            reopened
                .get(UiStateKey::FilterBySelected)
                .await
                .unwrap()
                .as_deref(),
            Some("true")
        );
    }
}
