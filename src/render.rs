//! Plain-text rendering of a [`LedgerViewDto`].

use std::fmt::Write;

use ledger_core::NoticeLevel;

use crate::commands::{CommandError, LedgerViewDto};

/// Renders notices, a one-line status and the entry table.
pub fn render_view(view: &LedgerViewDto) -> String {
    let mut out = String::new();

    for notice in &view.notices {
        let tag = match notice.level {
            NoticeLevel::Info => "info",
            NoticeLevel::Success => "ok",
            NoticeLevel::Error => "error",
        };
        let _ = writeln!(out, "[{tag}] {}", notice.message);
    }

    let search = if view.search_query.is_empty() {
        "-".to_string()
    } else {
        format!("\"{}\"", view.search_query)
    };
    let _ = writeln!(
        out,
        "search: {search}  filter: {}  sort: {}  selected: {}",
        if view.filter_mode { "on" } else { "off" },
        view.sort_direction,
        view.selected_count
    );

    if view.entries.is_empty() {
        out.push_str("(no entries)\n");
        return out;
    }

    let name_width = view
        .entries
        .iter()
        .map(|e| e.name.chars().count())
        .max()
        .unwrap_or(0)
        .max("NAME".len());
    let expr_width = view
        .entries
        .iter()
        .map(|e| e.time_expression.chars().count())
        .max()
        .unwrap_or(0)
        .max("EXPRESSION".len());

    let _ = writeln!(
        out,
        "  {:>4}  {:<name_width$}  {:<expr_width$}  DURATION",
        "ID", "NAME", "EXPRESSION"
    );
    for entry in &view.entries {
        let mark = if entry.selected { '*' } else { ' ' };
        let _ = writeln!(
            out,
            "{mark} {:>4}  {:<name_width$}  {:<expr_width$}  {}",
            entry.id, entry.name, entry.time_expression, entry.duration
        );
    }
    out
}

pub fn render_error(err: &CommandError) -> String {
    let category = serde_json::to_value(err.category)
        .ok()
        .and_then(|value| value.as_str().map(str::to_string))
        .unwrap_or_else(|| "error".to_string());
    format!("error [{category}]: {}", err.message)
}
