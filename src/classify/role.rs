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

//! Actor role inference from email domain suffixes.
//!
//! Display-only classification, never an authorization decision. The
//! suffix lists are user-configurable; student suffixes are checked before
//! lecturer suffixes so a more specific subdomain wins.

use serde::{Deserialize, Serialize};

/// Coarse actor role shown next to a log row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Student,
    Lecturer,
    Coordinator,
}

impl Role {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Student => "STUDENT",
            Self::Lecturer => "LECTURER",
            Self::Coordinator => "COORDINATOR",
        }
    }
}

/// Configurable email-suffix lists for role inference.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleDomains {
    #[serde(default)]
    pub student_suffixes: Vec<String>,
    #[serde(default)]
    pub lecturer_suffixes: Vec<String>,
}

impl Default for RoleDomains {
    fn default() -> Self {
        Self {
            student_suffixes: vec!["@student.unri.ac.id".to_owned()],
            lecturer_suffixes: vec!["@lecturer.unri.ac.id".to_owned()],
        }
    }
}

impl RoleDomains {
    /// Infer a role from the email suffix. Anything that matches neither
    /// list is a coordinator; that is the fallback, not an error.
    pub fn infer(&self, email: &str) -> Role {
        let lowered = email.trim().to_lowercase();

        if Self::matches(&lowered, &self.student_suffixes) {
            Role::Student
        } else if Self::matches(&lowered, &self.lecturer_suffixes) {
            Role::Lecturer
        } else {
            Role::Coordinator
        }
    }

    fn matches(email: &str, suffixes: &[String]) -> bool {
        suffixes
            .iter()
            .any(|suffix| email.ends_with(&suffix.to_lowercase()))
    }
}
