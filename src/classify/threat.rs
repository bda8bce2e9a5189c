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

//! Threat detection over free-text action codes.
//!
//! Deliberately a permissive substring match so compound codes like
//! `SQL_INJECTION_ATTEMPT` or `BRUTE_FORCE_ATTACK_DETECTED` are caught
//! without any tokenization.

/// Keywords that flag an action as security-sensitive (matched against the
/// lower-cased action). Ordered by how often they appear in practice.
const THREAT_KEYWORDS: &[&str] = &["injection", "attack"];

/// True iff the action contains a threat keyword, case-insensitively.
pub fn is_threat(action: &str) -> bool {
    let lowered = action.to_lowercase();
    THREAT_KEYWORDS
        .iter()
        .any(|keyword| lowered.contains(keyword))
}
