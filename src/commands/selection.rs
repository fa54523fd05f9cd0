//! Selection and view-state commands.

use ledger_core::{EntryId, Notice};

use super::{reload, CommandError, LedgerViewDto};
use crate::bootstrap::AppRuntime;

pub async fn select_entries(
    runtime: &AppRuntime,
    ids: &[EntryId],
) -> Result<LedgerViewDto, CommandError> {
    set_selected(runtime, ids, true).await
}

pub async fn unselect_entries(
    runtime: &AppRuntime,
    ids: &[EntryId],
) -> Result<LedgerViewDto, CommandError> {
    set_selected(runtime, ids, false).await
}

pub async fn toggle_entry(runtime: &AppRuntime, id: EntryId) -> Result<LedgerViewDto, CommandError> {
    runtime.coordinator().toggle_selection(id).await;
    Ok(reload(runtime, Vec::new()).await)
}

pub async fn clear_selection(runtime: &AppRuntime) -> Result<LedgerViewDto, CommandError> {
    runtime.coordinator().clear_selection().await;
    Ok(reload(runtime, Vec::new()).await)
}

/// Flips "show only selected entries".
pub async fn toggle_filter(runtime: &AppRuntime) -> Result<LedgerViewDto, CommandError> {
    let enabled = runtime.coordinator().toggle_filter_mode().await;
    let notice = if enabled {
        Notice::info("Showing selected entries only")
    } else {
        Notice::info("Showing all entries")
    };
    Ok(reload(runtime, vec![notice]).await)
}

pub async fn toggle_sort(runtime: &AppRuntime) -> Result<LedgerViewDto, CommandError> {
    runtime.coordinator().toggle_sort_direction().await;
    Ok(reload(runtime, Vec::new()).await)
}

async fn set_selected(
    runtime: &AppRuntime,
    ids: &[EntryId],
    is_selected: bool,
) -> Result<LedgerViewDto, CommandError> {
    for id in ids {
        runtime.coordinator().set_selected(*id, is_selected).await;
    }
    Ok(reload(runtime, Vec::new()).await)
}
