//! Occurrence records
//!
//! An occurrence is one dispatch incident: a vehicle event reported by a
//! client, the agent sent to it, and everything collected on site (photos,
//! expenses, mileage). Closed occurrences feed the PDF report.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::RecordMeta;

/// Lifecycle status of an occurrence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OcorrenciaStatus {
    /// Reported and being worked
    #[default]
    EmAndamento,
    /// Service finished
    Finalizada,
    /// Called off before completion
    Cancelada,
}

impl OcorrenciaStatus {
    /// Wire-format label
    pub fn as_str(&self) -> &'static str {
        match self {
            OcorrenciaStatus::EmAndamento => "em_andamento",
            OcorrenciaStatus::Finalizada => "finalizada",
            OcorrenciaStatus::Cancelada => "cancelada",
        }
    }

    /// Whether the occurrence reached a terminal state
    pub fn is_final(&self) -> bool {
        matches!(
            self,
            OcorrenciaStatus::Finalizada | OcorrenciaStatus::Cancelada
        )
    }
}

impl std::fmt::Display for OcorrenciaStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A photo attached to an occurrence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Foto {
    /// Stored file URL
    pub url: String,
    /// Optional caption
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub legenda: Option<String>,
}

/// An expense charged on an occurrence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Despesa {
    /// What was spent on
    pub descricao: String,
    /// Amount in BRL
    pub valor: f64,
    /// Expense category (pedagio, combustivel, alimentacao)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub categoria: Option<String>,
}

/// A dispatch incident
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ocorrencia {
    /// Record metadata
    #[serde(flatten)]
    pub meta: RecordMeta,
    /// Client the occurrence belongs to
    pub cliente_id: Uuid,
    /// Agent dispatched, once assigned
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prestador_id: Option<Uuid>,
    /// Event category reported by the client (roubo, furto, pane)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tipo: Option<String>,
    /// License plate of the vehicle involved
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placa: Option<String>,
    /// Current lifecycle status
    #[serde(default)]
    pub status: OcorrenciaStatus,
    /// When the occurrence was opened
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub abertura: Option<DateTime<Utc>>,
    /// When the occurrence was closed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub encerramento: Option<DateTime<Utc>>,
    /// Where the event happened
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub local: Option<String>,
    /// Operator notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub descricao: Option<String>,
    /// Kilometers driven during the service
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub km_percorrido: Option<f64>,
    /// Time on site, as `HH:MM`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub horas_atendimento: Option<String>,
    /// Whether the vehicle was recovered
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recuperado: Option<bool>,
    /// Photos collected on site
    #[serde(default)]
    pub fotos: Vec<Foto>,
    /// Expenses charged on the service
    #[serde(default)]
    pub despesas: Vec<Despesa>,
}

impl Ocorrencia {
    /// Create a new occurrence for a client, opened now
    pub fn new(cliente_id: Uuid) -> Self {
        Self {
            meta: RecordMeta::new(),
            cliente_id,
            prestador_id: None,
            tipo: None,
            placa: None,
            status: OcorrenciaStatus::EmAndamento,
            abertura: Some(Utc::now()),
            encerramento: None,
            local: None,
            descricao: None,
            km_percorrido: None,
            horas_atendimento: None,
            recuperado: None,
            fotos: Vec::new(),
            despesas: Vec::new(),
        }
    }

    /// Close the occurrence, stamping the closing time
    pub fn fechar(&mut self) {
        self.status = OcorrenciaStatus::Finalizada;
        self.encerramento = Some(Utc::now());
        self.meta.touch();
    }

    /// Sum of all expenses charged on the occurrence
    pub fn total_despesas(&self) -> f64 {
        self.despesas.iter().map(|d| d.valor).sum()
    }
}
