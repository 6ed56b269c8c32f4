//! Client records
//!
//! A client is the contracting company: it owns the monitored fleet and the
//! billing contracts that price each recovery service.

use serde::{Deserialize, Serialize};

use super::RecordMeta;
use crate::core::contracts::Contrato;
use crate::utils::{DocumentValidator, Result};

/// A client company with its fleet contracts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cliente {
    /// Record metadata
    #[serde(flatten)]
    pub meta: RecordMeta,
    /// Legal company name
    pub razao_social: String,
    /// Trade name shown on reports, when it differs from the legal name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nome_fantasia: Option<String>,
    /// Company CNPJ, with or without punctuation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cnpj: Option<String>,
    /// Contact phone
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub telefone: Option<String>,
    /// Billing contracts attached to the client
    #[serde(default)]
    pub contratos: Vec<Contrato>,
    /// Whether the client is currently under service
    #[serde(default = "default_ativo")]
    pub ativo: bool,
}

fn default_ativo() -> bool {
    true
}

impl Cliente {
    /// Create a new client record
    pub fn new<N: Into<String>>(razao_social: N) -> Self {
        Self {
            meta: RecordMeta::new(),
            razao_social: razao_social.into(),
            nome_fantasia: None,
            cnpj: None,
            telefone: None,
            contratos: Vec::new(),
            ativo: true,
        }
    }

    /// Name shown on screens and reports
    pub fn display_name(&self) -> &str {
        self.nome_fantasia.as_deref().unwrap_or(&self.razao_social)
    }

    /// Find a contract by its operator-facing name
    pub fn contrato(&self, nome_interno: &str) -> Option<&Contrato> {
        self.contratos
            .iter()
            .find(|c| c.nome_interno() == nome_interno)
    }

    /// Validate the record before persisting
    pub fn validate(&self) -> Result<()> {
        if self.razao_social.trim().is_empty() {
            return Err(crate::utils::PanelError::validation(
                "Client name cannot be empty",
            ));
        }
        if let Some(cnpj) = &self.cnpj {
            DocumentValidator::validate_cnpj(cnpj)?;
        }
        Ok(())
    }
}
