/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Planner configuration loading and management.
//!
//! The configuration file is optional.  Every field falls back to the value
//! the planner uses without a file, so a partial file only overrides what it
//! names:
//! ```yaml
//! people_sheet: "People"
//! projects_sheet: "Projects"
//! default_priority: 999
//! demand_supply_sentinel: 999.0
//! total_label: "TOTAL"
//! ```

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::{debug, info};

// ── Defaults ──────────────────────────────────────────────────────────────────

/// Priority given to projects without one; ranks after any explicit value.
pub const DEFAULT_PRIORITY: i64 = 999;

/// Demand vs Supply % reported for a role nobody can supply.
pub const DEFAULT_DEMAND_SUPPLY_SENTINEL: f64 = 999.0;

fn default_people_sheet() -> String {
    String::from("People")
}

fn default_projects_sheet() -> String {
    String::from("Projects")
}

fn default_priority() -> i64 {
    DEFAULT_PRIORITY
}

fn default_demand_supply_sentinel() -> f64 {
    DEFAULT_DEMAND_SUPPLY_SENTINEL
}

fn default_total_label() -> String {
    String::from("TOTAL")
}

// ── PlannerConfig ─────────────────────────────────────────────────────────────

/// Tunables for one planning run.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlannerConfig {
    /// Worksheet holding the roster when the input is a workbook.
    #[serde(default = "default_people_sheet")]
    pub people_sheet: String,

    /// Worksheet holding project demand when the input is a workbook.
    #[serde(default = "default_projects_sheet")]
    pub projects_sheet: String,

    /// Priority applied when the column or a cell is missing.
    #[serde(default = "default_priority")]
    pub default_priority: i64,

    /// Demand vs Supply % for roles with no available days.
    #[serde(default = "default_demand_supply_sentinel")]
    pub demand_supply_sentinel: f64,

    /// Role label of the per-project total rows in the gaps report.
    #[serde(default = "default_total_label")]
    pub total_label: String,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            people_sheet: default_people_sheet(),
            projects_sheet: default_projects_sheet(),
            default_priority: default_priority(),
            demand_supply_sentinel: default_demand_supply_sentinel(),
            total_label: default_total_label(),
        }
    }
}

// ── PlannerConfigManager ──────────────────────────────────────────────────────

/// Loads and holds the planner configuration from a YAML file.
#[derive(Debug, Default)]
pub struct PlannerConfigManager {
    config: PlannerConfig,

    /// Set to `true` after a successful [`load_from_file`](Self::load_from_file).
    loaded: bool,
}

impl PlannerConfigManager {
    /// Creates a manager holding the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses `path` and replaces the current configuration.
    ///
    /// An empty file is accepted and yields the defaults.  On error the
    /// manager is left holding the defaults and reports not loaded.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read, the YAML is malformed,
    /// or it contains unknown keys.
    pub fn load_from_file(&mut self, path: &Path) -> Result<()> {
        info!("Loading planner configuration from: {}", path.display());

        // Reset state before (re-)loading
        self.config = PlannerConfig::default();
        self.loaded = false;

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Cannot open configuration file: {}", path.display()))?;

        let config: PlannerConfig = if content.trim().is_empty() {
            PlannerConfig::default()
        } else {
            serde_yaml::from_str(&content)
                .with_context(|| format!("Failed to parse YAML file: {}", path.display()))?
        };

        debug!(?config, "planner configuration parsed");

        self.config = config;
        self.loaded = true;

        info!(
            people_sheet = %self.config.people_sheet,
            projects_sheet = %self.config.projects_sheet,
            default_priority = self.config.default_priority,
            "Planner configuration loaded"
        );
        Ok(())
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Consumes the manager and returns the configuration.
    pub fn into_config(self) -> PlannerConfig {
        self.config
    }

    /// Returns `true` after a successful call to [`load_from_file`](Self::load_from_file).
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn yaml_tempfile(content: &str) -> NamedTempFile {
        let mut f = NamedTempFile::new().unwrap();
        f.write_all(content.as_bytes()).unwrap();
        f
    }

    #[test]
    fn defaults_match_documented_values() {
        let cfg = PlannerConfig::default();
        assert_eq!(cfg.people_sheet, "People");
        assert_eq!(cfg.projects_sheet, "Projects");
        assert_eq!(cfg.default_priority, 999);
        assert_eq!(cfg.demand_supply_sentinel, 999.0);
        assert_eq!(cfg.total_label, "TOTAL");
    }

    #[test]
    fn load_full_yaml() {
        let yaml = r#"
people_sheet: "Staff"
projects_sheet: "Demand"
default_priority: 500
demand_supply_sentinel: 100.0
total_label: "ALL"
"#;
        let f = yaml_tempfile(yaml);
        let mut mgr = PlannerConfigManager::new();
        mgr.load_from_file(f.path()).unwrap();

        assert!(mgr.is_loaded());
        let cfg = mgr.config();
        assert_eq!(cfg.people_sheet, "Staff");
        assert_eq!(cfg.projects_sheet, "Demand");
        assert_eq!(cfg.default_priority, 500);
        assert_eq!(cfg.demand_supply_sentinel, 100.0);
        assert_eq!(cfg.total_label, "ALL");
    }

    #[test]
    fn partial_yaml_keeps_remaining_defaults() {
        let f = yaml_tempfile("default_priority: 50\n");
        let mut mgr = PlannerConfigManager::new();
        mgr.load_from_file(f.path()).unwrap();

        assert_eq!(mgr.config().default_priority, 50);
        assert_eq!(mgr.config().people_sheet, "People");
    }

    #[test]
    fn empty_file_yields_defaults() {
        let f = yaml_tempfile("");
        let mut mgr = PlannerConfigManager::new();
        mgr.load_from_file(f.path()).unwrap();

        assert!(mgr.is_loaded());
        assert_eq!(mgr.config(), &PlannerConfig::default());
    }

    #[test]
    fn unknown_key_is_rejected() {
        let f = yaml_tempfile("defualt_priority: 5\n");
        let mut mgr = PlannerConfigManager::new();
        assert!(mgr.load_from_file(f.path()).is_err());
        assert!(!mgr.is_loaded());
    }

    #[test]
    fn missing_file_returns_error() {
        let mut mgr = PlannerConfigManager::new();
        let result = mgr.load_from_file(Path::new("/nonexistent/path/planner.yaml"));
        assert!(result.is_err());
        assert!(!mgr.is_loaded());
    }

    #[test]
    fn malformed_yaml_returns_error() {
        let f = yaml_tempfile("this is: not: valid: yaml: content:::");
        let mut mgr = PlannerConfigManager::new();
        assert!(mgr.load_from_file(f.path()).is_err());
        assert!(!mgr.is_loaded());
    }

    #[test]
    fn reload_replaces_previous_values() {
        let f1 = yaml_tempfile("people_sheet: \"A\"\n");
        let f2 = yaml_tempfile("projects_sheet: \"B\"\n");

        let mut mgr = PlannerConfigManager::new();
        mgr.load_from_file(f1.path()).unwrap();
        assert_eq!(mgr.config().people_sheet, "A");

        mgr.load_from_file(f2.path()).unwrap();
        assert_eq!(mgr.config().people_sheet, "People", "old value must be gone");
        assert_eq!(mgr.config().projects_sheet, "B");
    }
}
