//! Command layer: one function per user action.
//!
//! Every command takes the runtime, runs one coordinator operation and answers
//! with a [`LedgerViewDto`] or a categorized [`CommandError`].

pub mod catalog;
pub mod dto;
pub mod error;
pub mod selection;

pub use dto::{EntryDto, LedgerViewDto};
pub use error::{map_err, CommandError};

use ledger_app::VisibleEntries;
use ledger_core::Notice;

use crate::bootstrap::AppRuntime;

/// Collects the current view state around a freshly computed entry list.
pub(crate) async fn view_of(
    runtime: &AppRuntime,
    visible: VisibleEntries,
    extra_notices: Vec<Notice>,
) -> LedgerViewDto {
    let coordinator = runtime.coordinator();
    let selected = coordinator.selected_ids().await;
    let mut view = LedgerViewDto::build(
        visible,
        &selected,
        coordinator.search_query().await,
        coordinator.filter_mode().await,
        coordinator.sort_direction().await,
    );
    view.notices.extend(extra_notices);
    view
}

/// Reloads and wraps the result.
pub(crate) async fn reload(runtime: &AppRuntime, extra_notices: Vec<Notice>) -> LedgerViewDto {
    let visible = runtime.coordinator().visible_entries().await;
    view_of(runtime, visible, extra_notices).await
}
