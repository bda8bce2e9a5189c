// secaudit - GPL-3.0-or-later
// This file is part of secaudit.
//
// Copyright (C) 2026 The secaudit Authors
//
// secaudit is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// secaudit is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with secaudit.  If not, see <https://www.gnu.org/licenses/>.

//! Plain-text rendering of one log page and the pager strip.
//!
//! Rendering is string-only; threat rows get a `!` marker instead of a
//! background color. The timestamp column goes through chrono formatting
//! and falls back to the raw API string when parsing failed.

use crate::classify::Classification;
use crate::pager::{PaginationState, WindowEntry};
use crate::record::LogRecord;
use std::fmt::Write;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Render the pager strip, current page bracketed: `1 … 4 [5] 6 … 10`.
/// Empty string when the pager is suppressed (one page or none).
pub fn render_pager(state: &PaginationState) -> String {
    let entries = state.window();
    let mut parts = Vec::with_capacity(entries.len());
    for entry in entries {
        match entry {
            WindowEntry::Page(p) if p == state.current_page() => parts.push(format!("[{p}]")),
            WindowEntry::Page(p) => parts.push(p.to_string()),
            WindowEntry::Ellipsis => parts.push("…".to_owned()),
        }
    }
    parts.join(" ")
}

/// Display timestamp for one record: parsed and formatted when possible,
/// the raw string otherwise, `-` when absent.
fn format_timestamp(record: &LogRecord) -> String {
    record.timestamp().map_or_else(
        || record.created_at.clone().unwrap_or_else(|| "-".to_owned()),
        |ts| ts.format(TIMESTAMP_FORMAT).to_string(),
    )
}

fn render_row(record: &LogRecord, classification: &Classification) -> String {
    let marker = if classification.is_threat { "!" } else { " " };
    let role = classification.role.map_or("", |role| role.as_str());
    format!(
        "{marker} {:>6}  {:<19}  [{:<7}]  {:<28}  {:<12}  {:<15}  {}",
        record.id,
        format_timestamp(record),
        classification.badge.as_str(),
        record.action,
        role,
        record.actor_display(),
        record.ip_display(),
    )
    .trim_end()
    .to_owned()
}

/// Render one classified page as rows of text, one record per line.
pub fn render_page(rows: &[(&LogRecord, Classification)]) -> String {
    let mut out = String::new();
    for (record, classification) in rows {
        let _ = writeln!(out, "{}", render_row(record, classification));
    }
    out
}
