//! Editable contract form
//!
//! The contract edit dialog binds to one flat record regardless of variant,
//! with every numeric field kept as the display string the operator typed.
//! Which fields actually matter is decided by `tipo` at conversion time.

use serde::{Deserialize, Serialize};

/// Flat form representation covering the union of all contract variants
///
/// `tipo` carries the frontend tag in uppercase (`"PADRAO_REGIAO"`,
/// `"ACL_KM"`, `"PADRAO_FIXO"`, `"VALOR_FECHADO"`). Absent fields are those
/// the current variant never showed to the operator.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ContratoForm {
    /// Frontend variant tag, uppercase
    pub tipo: String,
    /// Operator-facing contract name
    #[serde(default)]
    pub nome_interno: String,
    /// Franchise hours in `HH:MM` form
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub franquia_horas: Option<String>,
    /// Franchise kilometers
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub franquia_km: Option<String>,
    /// Coverage region name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub regiao: Option<String>,
    /// Call-out value
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub valor_acionamento: Option<String>,
    /// Extra-hour value
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub valor_hora_extra: Option<String>,
    /// Extra-km value
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub valor_km_extra: Option<String>,
    /// Call-out value when the vehicle is not recovered
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub valor_nao_recuperado: Option<String>,
    /// Per-kilometer value
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub valor_km: Option<String>,
    /// Default closed value
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub valor_padrao: Option<String>,
    /// Whether the closed value may be negotiated per occurrence
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permite_negociacao: Option<bool>,
}

impl ContratoForm {
    /// Start a form for the given variant tag and contract name
    pub fn new<T: Into<String>, N: Into<String>>(tipo: T, nome_interno: N) -> Self {
        Self {
            tipo: tipo.into(),
            nome_interno: nome_interno.into(),
            ..Self::default()
        }
    }
}
