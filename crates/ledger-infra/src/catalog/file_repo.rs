use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use async_trait::async_trait;
use ledger_core::config::CATALOG_FILE_NAME;
use ledger_core::ports::{CatalogStoreError, CatalogStorePort};
use ledger_core::{EntryId, EntryRecord};
use tokio::fs;
use tokio::sync::Mutex;
use tracing::debug;

use super::records;

/// Catalog stored as one JSON document: an array of records, or `null`.
///
/// The document is read on every call. Writes hold a process-local lock for the
/// read-modify-write cycle and replace the file atomically (temp file + rename).
/// A missing file is an empty catalog.
pub struct FileCatalogRepository {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileCatalogRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// Repository at `<base_dir>/catalog.json`.
    pub fn with_defaults(base_dir: &Path) -> Self {
        Self::new(base_dir.join(CATALOG_FILE_NAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the document. `Ok(None)` for an empty document or a literal `null`.
    async fn load(&self) -> Result<Option<Vec<EntryRecord>>, CatalogStoreError> {
        let content = match fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "Catalog file missing, starting empty");
                return Ok(Some(Vec::new()));
            }
            Err(err) => {
                return Err(CatalogStoreError::Storage(format!(
                    "read catalog failed: {}: {}",
                    self.path.display(),
                    err
                )))
            }
        };

        if content.trim().is_empty() {
            return Ok(None);
        }

        serde_json::from_str::<Option<Vec<EntryRecord>>>(&content).map_err(|err| {
            CatalogStoreError::Malformed(format!("{}: {}", self.path.display(), err))
        })
    }

    async fn load_for_write(&self) -> Result<Vec<EntryRecord>, CatalogStoreError> {
        Ok(self.load().await?.unwrap_or_default())
    }

    async fn store(&self, records: &[EntryRecord]) -> Result<(), CatalogStoreError> {
        self.atomic_write(records)
            .await
            .map_err(|err| CatalogStoreError::Storage(format!("{err:#}")))
    }

    async fn atomic_write(&self, records: &[EntryRecord]) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)
                .await
                .with_context(|| format!("create catalog dir failed: {}", dir.display()))?;
        }

        let content =
            serde_json::to_string_pretty(records).context("serialize catalog failed")?;

        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, content)
            .await
            .with_context(|| format!("write temp catalog failed: {}", tmp_path.display()))?;

        fs::rename(&tmp_path, &self.path).await.with_context(|| {
            format!(
                "rename temp catalog to target failed: {} -> {}",
                tmp_path.display(),
                self.path.display()
            )
        })?;

        Ok(())
    }
}

#[async_trait]
impl CatalogStorePort for FileCatalogRepository {
    async fn list_all(&self) -> Result<Option<Vec<EntryRecord>>, CatalogStoreError> {
        self.load().await
    }

    async fn search_by_name(
        &self,
        substring: &str,
    ) -> Result<Option<Vec<EntryRecord>>, CatalogStoreError> {
        Ok(self
            .load()
            .await?
            .map(|records| records::search(&records, substring)))
    }

    async fn insert(
        &self,
        name: &str,
        time_expression: &str,
        duration: f64,
    ) -> Result<EntryId, CatalogStoreError> {
        let _guard = self.write_lock.lock().await;
        let mut records = self.load_for_write().await?;
        let id = records::insert(&mut records, name, time_expression, duration)?;
        self.store(&records).await?;
        Ok(id)
    }

    async fn update_by_id(
        &self,
        id: EntryId,
        name: &str,
        time_expression: &str,
        duration: f64,
    ) -> Result<bool, CatalogStoreError> {
        let _guard = self.write_lock.lock().await;
        let mut records = self.load_for_write().await?;
        if !records::update(&mut records, id, name, time_expression, duration) {
            return Ok(false);
        }
        self.store(&records).await?;
        Ok(true)
    }

    async fn delete_by_ids(&self, ids: &[EntryId]) -> Result<usize, CatalogStoreError> {
        let _guard = self.write_lock.lock().await;
        let mut records = self.load_for_write().await?;
        let removed = records::delete(&mut records, ids);
        if removed > 0 {
            self.store(&records).await?;
        }
        Ok(removed)
    }
}
