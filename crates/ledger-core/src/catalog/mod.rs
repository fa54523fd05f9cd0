//! Catalog domain: entries and their identifiers.

mod entry;
mod entry_id;

pub use entry::{Entry, EntryRecord};
pub use entry_id::EntryId;
