//! Resource and action vocabularies for permission checks
//!
//! The panel protects a fixed set of screens and record types. Grant data and
//! required-permission strings both refer to them with inconsistent spelling
//! (singular vs. plural, hyphens, mixed case), so every name is funneled
//! through [`ResourceKey::canonicalize`] before any comparison happens.

use crate::utils::error::{PanelError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Protected resource categories of the panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Resource {
    Users,
    Ocorrencias,
    Dashboard,
    Prestadores,
    Relatorios,
    Clientes,
    Financeiro,
    Fotos,
    Contratos,
    Veiculos,
    Config,
}

impl Resource {
    /// Canonical wire name of the resource
    pub fn as_str(&self) -> &'static str {
        match self {
            Resource::Users => "users",
            Resource::Ocorrencias => "ocorrencias",
            Resource::Dashboard => "dashboard",
            Resource::Prestadores => "prestadores",
            Resource::Relatorios => "relatorios",
            Resource::Clientes => "clientes",
            Resource::Financeiro => "financeiro",
            Resource::Fotos => "fotos",
            Resource::Contratos => "contratos",
            Resource::Veiculos => "veiculos",
            Resource::Config => "config",
        }
    }

    /// All known resources
    pub fn all() -> &'static [Resource] {
        &[
            Resource::Users,
            Resource::Ocorrencias,
            Resource::Dashboard,
            Resource::Prestadores,
            Resource::Relatorios,
            Resource::Clientes,
            Resource::Financeiro,
            Resource::Fotos,
            Resource::Contratos,
            Resource::Veiculos,
            Resource::Config,
        ]
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Resource {
    type Err = PanelError;

    fn from_str(s: &str) -> Result<Self> {
        match ResourceKey::canonicalize(s) {
            ResourceKey::Known(resource) => Ok(resource),
            ResourceKey::Other(_) => Err(PanelError::validation(format!("Unknown resource: {}", s))),
        }
    }
}

/// Canonical lookup key for a resource name
///
/// Unrecognized names are preserved in their normalized form rather than
/// rejected, so grants may reference resources this build does not yet
/// enumerate.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ResourceKey {
    Known(Resource),
    Other(String),
}

impl ResourceKey {
    /// Canonicalize a raw resource name.
    ///
    /// Lowercases, folds hyphens to underscores, strips one trailing `s`,
    /// then maps the singular form back to its canonical resource. Names
    /// outside the vocabulary pass through in stripped form.
    pub fn canonicalize(raw: &str) -> ResourceKey {
        let mut name = raw.trim().to_lowercase().replace('-', "_");
        if name.ends_with('s') {
            name.pop();
        }

        // "prestadores" loses only one "s", so both stripped forms map back.
        let resource = match name.as_str() {
            "user" => Resource::Users,
            "ocorrencia" => Resource::Ocorrencias,
            "dashboard" => Resource::Dashboard,
            "prestador" | "prestadore" => Resource::Prestadores,
            "relatorio" => Resource::Relatorios,
            "cliente" => Resource::Clientes,
            "financeiro" => Resource::Financeiro,
            "foto" => Resource::Fotos,
            "contrato" => Resource::Contratos,
            "veiculo" => Resource::Veiculos,
            "config" => Resource::Config,
            _ => return ResourceKey::Other(name),
        };
        ResourceKey::Known(resource)
    }

    pub fn as_str(&self) -> &str {
        match self {
            ResourceKey::Known(resource) => resource.as_str(),
            ResourceKey::Other(name) => name,
        }
    }
}

impl fmt::Display for ResourceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<Resource> for ResourceKey {
    fn from(resource: Resource) -> Self {
        ResourceKey::Known(resource)
    }
}

impl Serialize for ResourceKey {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ResourceKey {
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(ResourceKey::canonicalize(&raw))
    }
}

/// Actions a grant can allow on a resource
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    Read,
    Create,
    Update,
    Delete,
    Upload,
    Export,
}

impl Action {
    /// Canonical name of the action
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Read => "read",
            Action::Create => "create",
            Action::Update => "update",
            Action::Delete => "delete",
            Action::Upload => "upload",
            Action::Export => "export",
        }
    }

    /// Resolve an action token, folding the legacy synonyms
    /// `edit` and `remove` into their canonical actions.
    pub fn from_token(raw: &str) -> Option<Action> {
        match raw.trim().to_lowercase().as_str() {
            "read" => Some(Action::Read),
            "create" => Some(Action::Create),
            "update" | "edit" => Some(Action::Update),
            "delete" | "remove" => Some(Action::Delete),
            "upload" => Some(Action::Upload),
            "export" => Some(Action::Export),
            _ => None,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Action {
    type Err = PanelError;

    fn from_str(s: &str) -> Result<Self> {
        Action::from_token(s).ok_or_else(|| PanelError::validation(format!("Unknown action: {}", s)))
    }
}
