use serde::{Deserialize, Serialize};

use super::EntryId;

/// A catalog entry.
///
/// `duration` is always the evaluated value of `time_expression` as of the last
/// successful write. There are no setters: an edit produces a new `Entry` from the
/// storage backend's answer, so the two fields cannot drift apart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    id: EntryId,
    name: String,
    time_expression: String,
    duration: f64,
}

impl Entry {
    pub fn new(id: EntryId, name: String, time_expression: String, duration: f64) -> Self {
        Self {
            id,
            name,
            time_expression,
            duration,
        }
    }

    pub fn id(&self) -> EntryId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn time_expression(&self) -> &str {
        &self.time_expression
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }
}

/// Record shape exchanged with the catalog storage backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntryRecord {
    pub id: EntryId,
    pub name: String,
    pub duration: f64,
    pub time_expression: String,
}

impl From<EntryRecord> for Entry {
    fn from(record: EntryRecord) -> Self {
        Entry::new(
            record.id,
            record.name,
            record.time_expression,
            record.duration,
        )
    }
}

impl From<&Entry> for EntryRecord {
    fn from(entry: &Entry) -> Self {
        Self {
            id: entry.id,
            name: entry.name.clone(),
            duration: entry.duration,
            time_expression: entry.time_expression.clone(),
        }
    }
}
