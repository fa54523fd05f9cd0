//! View-level value types shared by the coordinator and the presentation.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::catalog::Entry;

/// Longest name substring the storage backend is asked to match.
pub const MAX_SEARCH_QUERY_CHARS: usize = 50;

/// Trims a user-entered search string. An empty result means "no filter".
pub fn normalize_query(raw: &str) -> String {
    raw.trim().to_string()
}

/// Caps `query` at [`MAX_SEARCH_QUERY_CHARS`] characters, on a char boundary.
pub fn cap_query(query: &str) -> &str {
    match query.char_indices().nth(MAX_SEARCH_QUERY_CHARS) {
        Some((idx, _)) => &query[..idx],
        None => query,
    }
}

/// Case-insensitive substring match on an entry name.
///
/// This is the matching rule every catalog backend must implement for
/// `search_by_name`.
pub fn name_matches(name: &str, query: &str) -> bool {
    let needle = cap_query(query).to_lowercase();
    name.to_lowercase().contains(&needle)
}

/// Table ordering by entry id.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }

    /// Orders `entries` by id in this direction.
    pub fn apply(&self, entries: &mut [Entry]) {
        match self {
            SortDirection::Asc => entries.sort_by_key(|e| e.id()),
            SortDirection::Desc => entries.sort_by_key(|e| std::cmp::Reverse(e.id())),
        }
    }
}

impl Display for SortDirection {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            other => Err(format!("unknown sort direction: {other}")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeLevel {
    Info,
    Success,
    Error,
}

/// A short message for the user, the backend side of a toast.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::EntryId;

    fn entry(id: i64) -> Entry {
        Entry::new(EntryId::new(id), format!("e{id}"), "1".into(), 1.0)
    }

    #[test]
    fn test_normalize_query_trims() {
        assert_eq!(normalize_query("  wid "), "wid");
        assert_eq!(normalize_query("   "), "");
    }

    #[test]
    fn test_cap_query_respects_char_boundaries() {
        let long = "ж".repeat(60);
        let capped = cap_query(&long);
        assert_eq!(capped.chars().count(), MAX_SEARCH_QUERY_CHARS);
        assert_eq!(cap_query("short"), "short");
    }

    #[test]
    fn test_name_matches_is_case_insensitive() {
        assert!(name_matches("Widget", "wid"));
        assert!(name_matches("Продукт A", "продукт"));
        assert!(!name_matches("Gadget", "wid"));
    }

    #[test]
    fn test_sort_direction_round_trip_and_toggle() {
        assert_eq!("desc".parse::<SortDirection>(), Ok(SortDirection::Desc));
        assert!("sideways".parse::<SortDirection>().is_err());
        assert_eq!(SortDirection::Asc.toggled(), SortDirection::Desc);
        assert_eq!(SortDirection::default(), SortDirection::Asc);
    }

    #[test]
    fn test_sort_direction_apply() {
        let mut entries = vec![entry(2), entry(3), entry(1)];

        SortDirection::Desc.apply(&mut entries);
        let ids: Vec<i64> = entries.iter().map(|e| e.id().value()).collect();
        assert_eq!(ids, vec![3, 2, 1]);

        SortDirection::Asc.apply(&mut entries);
        let ids: Vec<i64> = entries.iter().map(|e| e.id().value()).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }
}
