use async_trait::async_trait;

use crate::catalog::{EntryId, EntryRecord};
use crate::ports::errors::CatalogStoreError;

/// Catalog storage backend.
///
/// Contract:
/// - `list_all` returns records in the backend's own order.
/// - `search_by_name` matches a case-insensitive substring of `name`
///   (see [`crate::view::name_matches`]); order is unspecified.
/// - Reads may answer `Ok(None)` when the backend replied without a record list
///   (an empty document, `null`). Callers treat that as an empty catalog.
/// - Ids are assigned by the backend on `insert`.
/// - Every failure is an `Err`, never a special value.
#[async_trait]
pub trait CatalogStorePort: Send + Sync {
    async fn list_all(&self) -> Result<Option<Vec<EntryRecord>>, CatalogStoreError>;

    async fn search_by_name(
        &self,
        substring: &str,
    ) -> Result<Option<Vec<EntryRecord>>, CatalogStoreError>;

    /// Stores a new record and returns the id the backend assigned.
    async fn insert(
        &self,
        name: &str,
        time_expression: &str,
        duration: f64,
    ) -> Result<EntryId, CatalogStoreError>;

    /// Overwrites the record with `id`. `Ok(false)` means there is no such record.
    async fn update_by_id(
        &self,
        id: EntryId,
        name: &str,
        time_expression: &str,
        duration: f64,
    ) -> Result<bool, CatalogStoreError>;

    /// Deletes the given ids and returns how many records were actually removed.
    /// Ids that do not exist are skipped.
    async fn delete_by_ids(&self, ids: &[EntryId]) -> Result<usize, CatalogStoreError>;
}
