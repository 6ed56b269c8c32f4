//! Core functionality for the panel
//!
//! This module contains the core business logic and data structures.

pub mod contracts;
pub mod models;
pub mod reports;

// Re-export commonly used types
pub use contracts::{Contrato, ContratoForm, to_contrato, to_form};
pub use models::{Cliente, Ocorrencia, Prestador};
pub use reports::{GridLayout, PaginationPlan, ReportOutline};

use std::sync::Arc;
use tracing::{debug, info};

use crate::auth::{AccessControl, AuthSession, AuthzResult};
use crate::config::Config;
use crate::utils::Result;

/// Main panel struct that ties the components together
#[derive(Debug, Clone)]
pub struct Panel {
    /// Panel configuration
    config: Arc<Config>,
    /// Permission checker
    access: AccessControl,
}

impl Panel {
    /// Create a new panel instance from a validated configuration
    pub fn new(config: Config) -> Result<Self> {
        info!("Initializing panel");
        config.validate()?;

        let access = AccessControl::new(&config.access);
        debug!(
            access_enabled = config.access.enabled,
            "Access control ready"
        );

        Ok(Self {
            config: Arc::new(config),
            access,
        })
    }

    /// Get panel configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Get the permission checker
    pub fn access(&self) -> &AccessControl {
        &self.access
    }

    /// Check one permission for a session
    pub fn authorize(&self, session: &AuthSession, required: &str) -> AuthzResult {
        self.access.check(session, required)
    }

    /// Photo grid geometry derived from the report configuration
    pub fn grid_layout(&self) -> GridLayout {
        GridLayout::from(&self.config.report)
    }

    /// Assemble the report outline for one occurrence
    pub fn build_report(&self, ocorrencia: &Ocorrencia, cliente: &Cliente) -> ReportOutline {
        ReportOutline::build(ocorrencia, cliente, &self.grid_layout())
    }
}
