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

//! File-backed record source.
//!
//! Loads a JSON export of audit records (the array the portal API returns)
//! and slices out the page the pagination state asks for. Fetch failures
//! surface as errors here; the pager and classifier never see them.

use crate::pager::PaginationState;
use crate::record::LogRecord;
use anyhow::Context;
use std::path::Path;

/// Load all records from a JSON array export.
pub fn load_records(path: &Path) -> anyhow::Result<Vec<LogRecord>> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read log export {}", path.display()))?;

    let records: Vec<LogRecord> = serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse log export {}", path.display()))?;

    tracing::info!("Loaded {} audit records from {}", records.len(), path.display());
    Ok(records)
}

/// The slice of `records` covered by the state's current page. Empty when
/// the state and the record set disagree (stale page after a shrink).
pub fn page_slice<'a>(records: &'a [LogRecord], state: &PaginationState) -> &'a [LogRecord] {
    records.get(state.page_range()).unwrap_or(&[])
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn record(id: u64) -> LogRecord {
        LogRecord {
            id,
            created_at: None,
            actor_email: None,
            action: "LOGIN".to_owned(),
            ip_address: None,
            device: None,
        }
    }

    #[test]
    fn test_page_slice_middle_and_tail() {
        let records: Vec<LogRecord> = (0..25).map(record).collect();
        let state = PaginationState::new(10).with_total_items(records.len());

        let first = page_slice(&records, &state);
        assert_eq!(first.len(), 10);
        assert_eq!(first[0].id, 0);

        let tail = page_slice(&records, &state.go_to(3));
        assert_eq!(tail.len(), 5);
        assert_eq!(tail[0].id, 20);
    }

    #[test]
    fn test_page_slice_empty_set() {
        let records: Vec<LogRecord> = Vec::new();
        let state = PaginationState::new(10);
        assert!(page_slice(&records, &state).is_empty());
    }

    #[test]
    fn test_load_records_round_trip() {
        let records: Vec<LogRecord> = (0..3).map(record).collect();
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(serde_json::to_string(&records).unwrap().as_bytes())
            .unwrap();

        let loaded = load_records(file.path()).unwrap();
        assert_eq!(loaded.len(), 3);
        assert_eq!(loaded[2].id, 2);
    }

    #[test]
    fn test_load_records_bad_json_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"not json").unwrap();
        assert!(load_records(file.path()).is_err());
    }

    #[test]
    fn test_load_records_missing_file_is_an_error() {
        assert!(load_records(Path::new("/nonexistent/audit.json")).is_err());
    }
}
