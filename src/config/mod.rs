//! Configuration management for the panel core
//!
//! Configuration is read from a YAML file, from `SEGTRACK_*` environment
//! variables, or both: file first, environment overrides on top via
//! [`Config::merge`].

pub mod models;

pub use models::{AccessConfig, ReportConfig, warn_insecure_config};

use crate::utils::error::{PanelError, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;
use tracing::{debug, info};

/// Main configuration struct for the panel core
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Access control configuration
    #[serde(default)]
    pub access: AccessConfig,
    /// Report layout configuration
    #[serde(default)]
    pub report: ReportConfig,
}

impl Config {
    /// Load configuration from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        if !path.exists() {
            return Err(PanelError::not_found(format!(
                "Config file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| PanelError::Config(format!("Failed to read config file: {}", e)))?;

        let config: Config = serde_yaml::from_str(&content)
            .map_err(|e| PanelError::Config(format!("Failed to parse config: {}", e)))?;

        config.validate()?;

        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        debug!("Loading configuration from environment variables");

        let mut config = Self::default();

        if let Ok(enabled) = env::var("SEGTRACK_ACCESS_ENABLED") {
            config.access.enabled = enabled
                .parse()
                .map_err(|e| PanelError::Config(format!("Invalid access enabled flag: {}", e)))?;
        }
        if let Ok(role) = env::var("SEGTRACK_DEFAULT_ROLE") {
            config.access.default_role = role;
        }
        if let Ok(roles) = env::var("SEGTRACK_ADMIN_ROLES") {
            config.access.admin_roles = roles
                .split(',')
                .map(str::trim)
                .filter(|role| !role.is_empty())
                .map(str::to_string)
                .collect();
        }

        if let Ok(columns) = env::var("SEGTRACK_REPORT_COLUMNS") {
            config.report.columns = columns
                .parse()
                .map_err(|e| PanelError::Config(format!("Invalid report columns: {}", e)))?;
        }
        if let Ok(rows) = env::var("SEGTRACK_REPORT_ROWS_FIRST") {
            config.report.rows_first_page = rows
                .parse()
                .map_err(|e| PanelError::Config(format!("Invalid first-page rows: {}", e)))?;
        }
        if let Ok(rows) = env::var("SEGTRACK_REPORT_ROWS_FULL") {
            config.report.rows_full_page = rows
                .parse()
                .map_err(|e| PanelError::Config(format!("Invalid full-page rows: {}", e)))?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        debug!("Validating configuration");

        self.access
            .validate()
            .map_err(|e| PanelError::Config(format!("Access config error: {}", e)))?;

        self.report
            .validate()
            .map_err(|e| PanelError::Config(format!("Report config error: {}", e)))?;

        warn_insecure_config(&self.access);

        debug!("Configuration validation completed");
        Ok(())
    }

    /// Merge with another configuration (other takes precedence)
    pub fn merge(mut self, other: Self) -> Self {
        self.access = self.access.merge(other.access);
        self.report = self.report.merge(other.report);
        self
    }

    /// Convert to JSON string
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Convert to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}
