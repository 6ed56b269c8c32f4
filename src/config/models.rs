//! Configuration model sections

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Access control configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccessConfig {
    /// Enable permission checks
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Role assumed for sessions that carry none
    #[serde(default = "default_role")]
    pub default_role: String,
    /// Roles treated as administrators besides the literal `admin`
    #[serde(default = "default_admin_roles")]
    pub admin_roles: Vec<String>,
}

impl Default for AccessConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            default_role: default_role(),
            admin_roles: default_admin_roles(),
        }
    }
}

impl AccessConfig {
    /// Merge access configurations (other takes precedence)
    pub fn merge(mut self, other: Self) -> Self {
        if !other.enabled {
            self.enabled = other.enabled;
        }
        if other.default_role != default_role() {
            self.default_role = other.default_role;
        }
        if other.admin_roles != default_admin_roles() {
            self.admin_roles = other.admin_roles;
        }
        self
    }

    /// Validate access configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.default_role.trim().is_empty() {
            return Err("Default role cannot be empty".to_string());
        }
        if self.enabled && self.admin_roles.is_empty() {
            return Err("At least one admin role is required when checks are enabled".to_string());
        }
        if self.admin_roles.iter().any(|role| role.trim().is_empty()) {
            return Err("Admin role names cannot be empty".to_string());
        }
        Ok(())
    }
}

/// Occurrence report layout configuration
///
/// The numbers describe the photo grid of the generated PDF: the first page
/// loses rows to the header block, every later page uses the full grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Photo grid columns per page
    #[serde(default = "default_columns")]
    pub columns: usize,
    /// Photo grid rows on the first page, below the header block
    #[serde(default = "default_rows_first_page")]
    pub rows_first_page: usize,
    /// Photo grid rows on a full page
    #[serde(default = "default_rows_full_page")]
    pub rows_full_page: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            columns: default_columns(),
            rows_first_page: default_rows_first_page(),
            rows_full_page: default_rows_full_page(),
        }
    }
}

impl ReportConfig {
    /// Merge report configurations (other takes precedence)
    pub fn merge(mut self, other: Self) -> Self {
        if other.columns != default_columns() {
            self.columns = other.columns;
        }
        if other.rows_first_page != default_rows_first_page() {
            self.rows_first_page = other.rows_first_page;
        }
        if other.rows_full_page != default_rows_full_page() {
            self.rows_full_page = other.rows_full_page;
        }
        self
    }

    /// Validate report configuration.
    ///
    /// A first page with zero photo rows is legal (header-only first page);
    /// columns and full-page rows must leave room for at least one photo.
    pub fn validate(&self) -> Result<(), String> {
        if self.columns == 0 {
            return Err("Report grid must have at least one column".to_string());
        }
        if self.rows_full_page == 0 {
            return Err("Report grid must have at least one row on full pages".to_string());
        }
        Ok(())
    }
}

/// Warn about configurations that disable protection
pub fn warn_insecure_config(config: &AccessConfig) {
    if !config.enabled {
        warn!(
            "Permission checks are disabled! Every session will pass every check. Do not deploy this configuration."
        );
    }
}

fn default_true() -> bool {
    true
}

fn default_role() -> String {
    "user".to_string()
}

fn default_admin_roles() -> Vec<String> {
    vec!["admin".to_string()]
}

fn default_columns() -> usize {
    2
}

fn default_rows_first_page() -> usize {
    2
}

fn default_rows_full_page() -> usize {
    3
}
