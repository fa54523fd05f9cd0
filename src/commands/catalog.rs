//! Catalog commands: listing, search, create, edit and bulk delete.

use ledger_app::DeleteSelectedOutcome;
use ledger_core::{EntryId, Notice};
use tracing::info;

use super::{map_err, reload, view_of, CommandError, LedgerViewDto};
use crate::bootstrap::AppRuntime;

pub async fn list_entries(runtime: &AppRuntime) -> Result<LedgerViewDto, CommandError> {
    Ok(reload(runtime, Vec::new()).await)
}

/// Stores `query` as the active search and shows its matches.
pub async fn search_entries(
    runtime: &AppRuntime,
    query: &str,
) -> Result<LedgerViewDto, CommandError> {
    let visible = runtime.coordinator().set_search_query(query).await;
    Ok(view_of(runtime, visible, Vec::new()).await)
}

pub async fn clear_search(runtime: &AppRuntime) -> Result<LedgerViewDto, CommandError> {
    search_entries(runtime, "").await
}

pub async fn add_entry(
    runtime: &AppRuntime,
    name: &str,
    time_expression: &str,
) -> Result<LedgerViewDto, CommandError> {
    let entry = runtime
        .coordinator()
        .create_entry(name, time_expression)
        .await
        .map_err(map_err)?;

    info!(entry_id = %entry.id(), "Entry added");
    let notice = Notice::success(format!(
        "Added entry {} ({} = {})",
        entry.id(),
        entry.time_expression(),
        entry.duration()
    ));
    Ok(reload(runtime, vec![notice]).await)
}

pub async fn edit_entry(
    runtime: &AppRuntime,
    id: EntryId,
    name: &str,
    time_expression: &str,
) -> Result<LedgerViewDto, CommandError> {
    let entry = runtime
        .coordinator()
        .update_entry(id, name, time_expression)
        .await
        .map_err(map_err)?;

    let notice = Notice::success(format!(
        "Updated entry {} ({} = {})",
        entry.id(),
        entry.time_expression(),
        entry.duration()
    ));
    Ok(reload(runtime, vec![notice]).await)
}

/// Deletes every selected entry.
pub async fn delete_selected(runtime: &AppRuntime) -> Result<LedgerViewDto, CommandError> {
    let outcome = runtime
        .coordinator()
        .delete_selected()
        .await
        .map_err(map_err)?;

    match outcome {
        DeleteSelectedOutcome::NothingSelected => {
            Ok(reload(runtime, vec![Notice::info("No entries selected")]).await)
        }
        DeleteSelectedOutcome::Deleted { removed, view, .. } => {
            let notice = Notice::success(format!("Deleted records: {removed}"));
            Ok(view_of(runtime, view, vec![notice]).await)
        }
    }
}
