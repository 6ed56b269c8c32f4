//! Service provider records

use serde::{Deserialize, Serialize};

use super::RecordMeta;

/// A field agent available for dispatch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prestador {
    /// Record metadata
    #[serde(flatten)]
    pub meta: RecordMeta,
    /// Agent name
    pub nome: String,
    /// Coverage region, free text as registered by the operator
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub regiao: Option<String>,
    /// Contact phone
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub telefone: Option<String>,
    /// Last known latitude
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    /// Last known longitude
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    /// Whether the agent accepts new dispatches
    #[serde(default = "default_ativo")]
    pub ativo: bool,
}

fn default_ativo() -> bool {
    true
}

impl Prestador {
    /// Create a new provider record
    pub fn new<N: Into<String>>(nome: N) -> Self {
        Self {
            meta: RecordMeta::new(),
            nome: nome.into(),
            regiao: None,
            telefone: None,
            latitude: None,
            longitude: None,
            ativo: true,
        }
    }

    /// Map position, when both coordinates are known
    pub fn position(&self) -> Option<(f64, f64)> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lon)) => Some((lat, lon)),
            _ => None,
        }
    }
}
