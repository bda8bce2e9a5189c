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

//! Security-audit log viewer core.
//!
//! Two pure, independent components back the portal's security-log table:
//! the pagination window planner ([`pager`]) and the per-record display
//! classifier ([`classify`]). Everything around them — file loading,
//! config, text rendering — is the plumbing a standalone viewer needs.

pub mod classify;
pub mod config;
pub mod pager;
pub mod record;
pub mod source;
pub mod ui;

pub use classify::{classify, BadgeKind, BadgePolicy, Classification, Role, RoleDomains};
pub use pager::{plan_window, NavDirection, PaginationState, WindowEntry};
pub use record::LogRecord;

/// Package version plus the git hash embedded at build time,
/// e.g. `0.4.2 (a1b2c3d)`.
pub fn version_string() -> String {
    format!("{} ({})", env!("CARGO_PKG_VERSION"), env!("GIT_HASH"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_string_carries_pkg_version_and_hash() {
        let version = version_string();
        assert!(version.starts_with(env!("CARGO_PKG_VERSION")));
        // The hash portion is always present, "unknown" outside a git tree.
        assert!(version.ends_with(')'));
        assert!(!version.contains("()"));
    }
}
