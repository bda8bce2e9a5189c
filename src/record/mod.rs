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

//! The audit-log record as delivered by the portal API.
//!
//! Records arrive as camelCase JSON. Every field except `id` may be
//! missing; accessors degrade to display placeholders instead of failing,
//! so a malformed record can never break a render.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Placeholder shown when the actor's email is absent.
pub const UNKNOWN_ACTOR: &str = "Unknown";

/// One immutable security-audit log record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogRecord {
    pub id: u64,

    /// Creation timestamp as sent by the API (ISO-8601), kept verbatim.
    #[serde(default)]
    pub created_at: Option<String>,

    #[serde(default)]
    pub actor_email: Option<String>,

    /// Free-text action code, e.g. "LOGIN" or "SQL_INJECTION_ATTEMPT".
    #[serde(default)]
    pub action: String,

    #[serde(default)]
    pub ip_address: Option<String>,

    #[serde(default)]
    pub device: Option<String>,
}

impl LogRecord {
    /// Actor email for display, or [`UNKNOWN_ACTOR`] when absent or blank.
    pub fn actor_display(&self) -> &str {
        match self.actor_email.as_deref() {
            Some(email) if !email.trim().is_empty() => email,
            Some(_) | None => UNKNOWN_ACTOR,
        }
    }

    /// Parse `created_at` into local time. `None` when the field is absent
    /// or not valid ISO-8601; callers fall back to the raw string.
    pub fn timestamp(&self) -> Option<DateTime<Local>> {
        let raw = self.created_at.as_deref()?;
        DateTime::parse_from_rfc3339(raw)
            .ok()
            .map(|ts| ts.with_timezone(&Local))
    }

    pub fn ip_display(&self) -> &str {
        self.ip_address.as_deref().unwrap_or("")
    }

    pub fn device_display(&self) -> &str {
        self.device.as_deref().unwrap_or("")
    }
}
