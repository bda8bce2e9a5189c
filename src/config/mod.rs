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

use crate::classify::badge::{self, BadgeKind, BadgePolicy, BadgeRule};
use crate::classify::role::RoleDomains;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Global user configuration stored in the config directory
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GlobalConfig {
    /// Email-suffix lists for role inference
    #[serde(default)]
    pub role_domains: RoleDomains,

    /// Ordered badge rules applied to action codes
    #[serde(default = "badge::default_rules")]
    pub badge_rules: Vec<BadgeRule>,

    /// Category used when no badge rule matches
    #[serde(default)]
    pub default_badge: BadgeKind,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            role_domains: RoleDomains::default(),
            badge_rules: badge::default_rules(),
            default_badge: BadgeKind::Info,
        }
    }
}

impl GlobalConfig {
    /// Get the path to the global config file
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|config_dir| config_dir.join("secaudit").join("config.json"))
    }

    /// Load global config from disk, returning defaults if not found
    pub fn load() -> Self {
        if let Some(path) = Self::config_path() {
            if path.exists() {
                tracing::info!("Loading global config from {path:?}");
                if let Ok(contents) = std::fs::read_to_string(&path) {
                    if let Ok(config) = serde_json::from_str::<Self>(&contents) {
                        tracing::info!(
                            "Loaded {} badge rules and {} role suffixes",
                            config.badge_rules.len(),
                            config.role_domains.student_suffixes.len()
                                + config.role_domains.lecturer_suffixes.len()
                        );
                        return config;
                    }
                }
            } else {
                tracing::info!("No global config found, using defaults");
            }
        }

        Self::default()
    }

    /// Save global config to disk
    pub fn save(&self) -> anyhow::Result<()> {
        let path = Self::config_path()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(&path, json)?;

        tracing::info!("Saved global config to {path:?}");
        Ok(())
    }

    /// Compile the configured badge rules into an applicable policy.
    pub fn badge_policy(&self) -> BadgePolicy {
        BadgePolicy::new(&self.badge_rules, self.default_badge)
    }
}
