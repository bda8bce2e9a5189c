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

//! Badge-category policy: an ordered table of regex rules.
//!
//! The policy is supplied by the caller (and persisted in the user
//! config); the classifier only applies it. First matching rule wins,
//! otherwise the policy's default category applies. Rule compilation is
//! fallible, rule application is not.

use fancy_regex::Regex;
use serde::{Deserialize, Serialize};

/// Badge category rendered on the action column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeKind {
    #[default]
    Info,
    Warning,
    Danger,
    Success,
}

impl BadgeKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Danger => "danger",
            Self::Success => "success",
        }
    }
}

/// One persisted badge rule: a regex over the action code and the badge to
/// apply when it matches.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BadgeRule {
    pub pattern: String,
    pub badge: BadgeKind,
}

/// The stock rule table shipped with the viewer.
pub fn default_rules() -> Vec<BadgeRule> {
    vec![
        BadgeRule {
            pattern: r"(?i)injection|attack|breach".to_owned(),
            badge: BadgeKind::Danger,
        },
        BadgeRule {
            pattern: r"(?i)fail|denied|invalid|lock".to_owned(),
            badge: BadgeKind::Warning,
        },
        BadgeRule {
            pattern: r"(?i)\b(login|logout)\b|success".to_owned(),
            badge: BadgeKind::Success,
        },
    ]
}

/// Compiled, ordered badge policy.
pub struct BadgePolicy {
    rules: Vec<(Regex, BadgeKind)>,
    default_badge: BadgeKind,
}

impl BadgePolicy {
    /// Compile a rule table. A rule whose pattern does not compile is
    /// skipped with a warning; applying the policy can then never fail.
    pub fn new(rules: &[BadgeRule], default_badge: BadgeKind) -> Self {
        let rules = rules
            .iter()
            .filter_map(|rule| match Regex::new(&rule.pattern) {
                Ok(regex) => Some((regex, rule.badge)),
                Err(e) => {
                    tracing::warn!("Skipping badge rule {:?}: {e}", rule.pattern);
                    None
                }
            })
            .collect();
        Self {
            rules,
            default_badge,
        }
    }

    /// First matching rule wins; no match yields the default category.
    pub fn apply(&self, action: &str) -> BadgeKind {
        self.rules
            .iter()
            .find(|(regex, _)| regex.is_match(action).unwrap_or(false))
            .map_or(self.default_badge, |(_, badge)| *badge)
    }

    pub const fn default_badge(&self) -> BadgeKind {
        self.default_badge
    }
}

impl Default for BadgePolicy {
    fn default() -> Self {
        Self::new(&default_rules(), BadgeKind::Info)
    }
}
