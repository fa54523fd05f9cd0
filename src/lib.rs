//! Product Ledger Library
//!
//! Command shell over the ledger use cases: configuration, logging, storage
//! wiring, the command layer and text rendering.

pub mod bootstrap;
pub mod cli;
pub mod commands;
pub mod render;

use bootstrap::AppRuntime;
use cli::Command;
use commands::{catalog, selection, CommandError, LedgerViewDto};

/// Runs one CLI command against `runtime`.
pub async fn dispatch(
    runtime: &AppRuntime,
    command: Command,
) -> Result<LedgerViewDto, CommandError> {
    match command {
        Command::List => catalog::list_entries(runtime).await,
        Command::Search { query } => catalog::search_entries(runtime, &query).await,
        Command::ClearSearch => catalog::clear_search(runtime).await,
        Command::Add { name, expression } => catalog::add_entry(runtime, &name, &expression).await,
        Command::Edit {
            id,
            name,
            expression,
        } => catalog::edit_entry(runtime, id, &name, &expression).await,
        Command::Select { ids } => selection::select_entries(runtime, &ids).await,
        Command::Unselect { ids } => selection::unselect_entries(runtime, &ids).await,
        Command::Toggle { id } => selection::toggle_entry(runtime, id).await,
        Command::ClearSelection => selection::clear_selection(runtime).await,
        Command::Filter => selection::toggle_filter(runtime).await,
        Command::Sort => selection::toggle_sort(runtime).await,
        Command::DeleteSelected => catalog::delete_selected(runtime).await,
    }
}
