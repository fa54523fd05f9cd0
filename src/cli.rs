use std::path::PathBuf;

use clap::{Parser, Subcommand};
use ledger_core::EntryId;

#[derive(Parser)]
#[command(name = env!("CARGO_PKG_NAME"))]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = env!("CARGO_PKG_DESCRIPTION"))]
pub struct Cli {
    /// Configuration file (default: <data dir>/product-ledger/config.toml)
    #[arg(long, short = 'c', global = true)]
    pub config: Option<PathBuf>,

    /// Print the view as JSON instead of a table
    #[arg(long, global = true)]
    pub json: bool,

    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Clone, Debug, PartialEq)]
pub enum Command {
    /// Show the catalog under the current search and filter
    List,
    /// Search entries by name and keep the search active
    Search {
        /// Case-insensitive part of the name
        query: String,
    },
    /// Drop the active search
    ClearSearch,
    /// Add an entry
    Add {
        name: String,
        /// Durations joined by '+', e.g. 8+2.5+0.5
        #[arg(allow_hyphen_values = true)]
        expression: String,
    },
    /// Replace an entry's name and time expression
    Edit {
        id: EntryId,
        name: String,
        #[arg(allow_hyphen_values = true)]
        expression: String,
    },
    /// Mark entries
    Select {
        #[arg(required = true)]
        ids: Vec<EntryId>,
    },
    /// Unmark entries
    Unselect {
        #[arg(required = true)]
        ids: Vec<EntryId>,
    },
    /// Flip the mark on one entry
    Toggle { id: EntryId },
    /// Unmark everything
    ClearSelection,
    /// Toggle showing only marked entries
    Filter,
    /// Toggle ascending/descending order by id
    Sort,
    /// Delete every marked entry
    DeleteSelected,
}
