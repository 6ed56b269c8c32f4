//! Contract wire model
//!
//! Billing contracts travel between the panel and the backend as a tagged
//! union of four pricing shapes, tagged by a lowercase `tipo` field. Records
//! with a tag this build does not know collapse into [`Contrato::Desconhecido`]
//! instead of failing the whole client payload; the converter turns those into
//! a minimal editable shell.

use serde::{Deserialize, Serialize};

/// Included allowance before per-unit charges apply
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Franquia {
    /// Included hours in `HH:MM` form
    pub horas: String,
    /// Included kilometers
    pub km: f64,
}

impl Default for Franquia {
    fn default() -> Self {
        Self {
            horas: "00:00".to_string(),
            km: 0.0,
        }
    }
}

/// Pricing for one coverage region
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegiaoPreco {
    /// Region name
    pub regiao: String,
    /// Call-out value
    pub valor_acionamento: f64,
    /// Extra-hour value
    pub valor_hora_extra: f64,
    /// Extra-km value
    pub valor_km_extra: f64,
    /// Call-out value when the vehicle is not recovered
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub valor_nao_recuperado: Option<f64>,
}

/// A client's billing contract, one of four pricing shapes
#[derive(Debug, Clone, PartialEq)]
pub enum Contrato {
    /// Per-region pricing with a franchise allowance
    PadraoRegiao {
        nome_interno: String,
        franquia: Franquia,
        regioes: Vec<RegiaoPreco>,
        diferencia_nao_recuperado: bool,
    },
    /// Flat per-kilometer billing
    AclKm { nome_interno: String, valor_km: f64 },
    /// Fixed call-out pricing with a franchise allowance
    PadraoFixo {
        nome_interno: String,
        franquia: Franquia,
        valor_acionamento: f64,
        valor_hora_extra: f64,
        valor_km_extra: f64,
    },
    /// Negotiated closed value, everything optional
    ValorFechado {
        nome_interno: String,
        permite_negociacao: bool,
        valor_padrao: Option<f64>,
        franquia: Option<Franquia>,
        valor_hora_extra: Option<f64>,
        valor_km_extra: Option<f64>,
    },
    /// Catch-all for tags newer than this build
    Desconhecido { tipo: String, nome_interno: String },
}

impl Contrato {
    /// Operator-facing contract name, present on every variant
    pub fn nome_interno(&self) -> &str {
        match self {
            Contrato::PadraoRegiao { nome_interno, .. }
            | Contrato::AclKm { nome_interno, .. }
            | Contrato::PadraoFixo { nome_interno, .. }
            | Contrato::ValorFechado { nome_interno, .. }
            | Contrato::Desconhecido { nome_interno, .. } => nome_interno,
        }
    }

    /// Backend tag of the contract variant
    pub fn tipo_tag(&self) -> &str {
        match self {
            Contrato::PadraoRegiao { .. } => "padrao_regiao",
            Contrato::AclKm { .. } => "acl_km",
            Contrato::PadraoFixo { .. } => "padrao_fixo",
            Contrato::ValorFechado { .. } => "valor_fechado",
            Contrato::Desconhecido { tipo, .. } => tipo,
        }
    }
}

/// Flattened field set shared by serialization in both directions.
///
/// The wire tag lives in the same map as the variant fields, and the
/// unknown-tag fallback keeps its original tag string, so the enum cannot
/// use an internally-tagged derive directly.
#[derive(Debug, Default, Serialize, Deserialize)]
struct ContratoFields {
    tipo: String,
    #[serde(default)]
    nome_interno: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    franquia: Option<Franquia>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    regioes: Option<Vec<RegiaoPreco>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    diferencia_nao_recuperado: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    valor_km: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    valor_acionamento: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    valor_hora_extra: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    valor_km_extra: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    permite_negociacao: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    valor_padrao: Option<f64>,
}

impl From<&Contrato> for ContratoFields {
    fn from(contrato: &Contrato) -> Self {
        match contrato {
            Contrato::PadraoRegiao {
                nome_interno,
                franquia,
                regioes,
                diferencia_nao_recuperado,
            } => Self {
                tipo: "padrao_regiao".to_string(),
                nome_interno: nome_interno.clone(),
                franquia: Some(franquia.clone()),
                regioes: Some(regioes.clone()),
                diferencia_nao_recuperado: Some(*diferencia_nao_recuperado),
                ..Self::default()
            },
            Contrato::AclKm {
                nome_interno,
                valor_km,
            } => Self {
                tipo: "acl_km".to_string(),
                nome_interno: nome_interno.clone(),
                valor_km: Some(*valor_km),
                ..Self::default()
            },
            Contrato::PadraoFixo {
                nome_interno,
                franquia,
                valor_acionamento,
                valor_hora_extra,
                valor_km_extra,
            } => Self {
                tipo: "padrao_fixo".to_string(),
                nome_interno: nome_interno.clone(),
                franquia: Some(franquia.clone()),
                valor_acionamento: Some(*valor_acionamento),
                valor_hora_extra: Some(*valor_hora_extra),
                valor_km_extra: Some(*valor_km_extra),
                ..Self::default()
            },
            Contrato::ValorFechado {
                nome_interno,
                permite_negociacao,
                valor_padrao,
                franquia,
                valor_hora_extra,
                valor_km_extra,
            } => Self {
                tipo: "valor_fechado".to_string(),
                nome_interno: nome_interno.clone(),
                permite_negociacao: Some(*permite_negociacao),
                valor_padrao: *valor_padrao,
                franquia: franquia.clone(),
                valor_hora_extra: *valor_hora_extra,
                valor_km_extra: *valor_km_extra,
                ..Self::default()
            },
            Contrato::Desconhecido { tipo, nome_interno } => Self {
                tipo: tipo.clone(),
                nome_interno: nome_interno.clone(),
                ..Self::default()
            },
        }
    }
}

impl From<ContratoFields> for Contrato {
    fn from(fields: ContratoFields) -> Self {
        match fields.tipo.as_str() {
            "padrao_regiao" => Contrato::PadraoRegiao {
                nome_interno: fields.nome_interno,
                franquia: fields.franquia.unwrap_or_default(),
                regioes: fields.regioes.unwrap_or_default(),
                diferencia_nao_recuperado: fields.diferencia_nao_recuperado.unwrap_or(false),
            },
            "acl_km" => Contrato::AclKm {
                nome_interno: fields.nome_interno,
                valor_km: fields.valor_km.unwrap_or_default(),
            },
            "padrao_fixo" => Contrato::PadraoFixo {
                nome_interno: fields.nome_interno,
                franquia: fields.franquia.unwrap_or_default(),
                valor_acionamento: fields.valor_acionamento.unwrap_or_default(),
                valor_hora_extra: fields.valor_hora_extra.unwrap_or_default(),
                valor_km_extra: fields.valor_km_extra.unwrap_or_default(),
            },
            "valor_fechado" => Contrato::ValorFechado {
                nome_interno: fields.nome_interno,
                permite_negociacao: fields.permite_negociacao.unwrap_or(false),
                valor_padrao: fields.valor_padrao,
                franquia: fields.franquia,
                valor_hora_extra: fields.valor_hora_extra,
                valor_km_extra: fields.valor_km_extra,
            },
            _ => Contrato::Desconhecido {
                tipo: fields.tipo,
                nome_interno: fields.nome_interno,
            },
        }
    }
}

impl Serialize for Contrato {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        ContratoFields::from(self).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Contrato {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(ContratoFields::deserialize(deserializer)?.into())
    }
}
