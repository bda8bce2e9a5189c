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

//! Per-record display classification.
//!
//! Derives badge category, threat flag and actor role for one log record
//! without mutating it. Classification is pure and cheap, so results are
//! recomputed per render rather than cached.

pub mod badge;
pub mod role;
pub mod threat;

pub use badge::{BadgeKind, BadgePolicy, BadgeRule};
pub use role::{Role, RoleDomains};
pub use threat::is_threat;

use crate::record::LogRecord;

/// Display metadata derived from one [`LogRecord`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    /// Severity/category badge for the action column.
    pub badge: BadgeKind,
    /// Row-highlighting signal for security-sensitive actions.
    pub is_threat: bool,
    /// Actor role inferred from the email domain; `None` when the email
    /// is absent (the row shows "Unknown" and omits the role).
    pub role: Option<Role>,
}

/// Classify one record against the given badge policy and role domains.
///
/// Never fails: missing or malformed fields fall back to display defaults.
pub fn classify(
    record: &LogRecord,
    policy: &BadgePolicy,
    domains: &RoleDomains,
) -> Classification {
    let role = record
        .actor_email
        .as_deref()
        .filter(|email| !email.trim().is_empty())
        .map(|email| domains.infer(email));

    Classification {
        badge: policy.apply(&record.action),
        is_threat: threat::is_threat(&record.action),
        role,
    }
}
