//! Occurrence report outline
//!
//! Assembles the print-ready structure of a closed-occurrence report:
//! the header lines shown on page one and the photo pagination plan.
//! Rendering to PDF happens elsewhere; this module only decides what
//! goes where.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::pagination::{GridLayout, PaginationPlan, paginate_photos};
use crate::core::models::{Cliente, Ocorrencia};
use crate::utils::format_currency;

/// Print-ready outline of one occurrence report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportOutline {
    /// Report title
    pub titulo: String,
    /// Header lines on the first page
    pub cabecalho: Vec<String>,
    /// Sum of expenses charged on the occurrence
    pub total_despesas: f64,
    /// Photo layout across pages
    pub paginacao: PaginationPlan,
}

impl ReportOutline {
    /// Assemble the outline for one occurrence
    pub fn build(ocorrencia: &Ocorrencia, cliente: &Cliente, layout: &GridLayout) -> Self {
        let mut cabecalho = vec![format!("Cliente: {}", cliente.display_name())];
        if let Some(tipo) = &ocorrencia.tipo {
            cabecalho.push(format!("Tipo: {}", tipo));
        }
        if let Some(placa) = &ocorrencia.placa {
            cabecalho.push(format!("Placa: {}", placa));
        }
        if let Some(local) = &ocorrencia.local {
            cabecalho.push(format!("Local: {}", local));
        }
        cabecalho.push(format!("Status: {}", ocorrencia.status));
        if let Some(km) = ocorrencia.km_percorrido {
            cabecalho.push(format!("KM percorrido: {}", km));
        }
        if let Some(horas) = &ocorrencia.horas_atendimento {
            cabecalho.push(format!("Horas de atendimento: {}", horas));
        }
        if let Some(recuperado) = ocorrencia.recuperado {
            let label = if recuperado { "Sim" } else { "Nao" };
            cabecalho.push(format!("Veiculo recuperado: {}", label));
        }

        let total_despesas = ocorrencia.total_despesas();
        if !ocorrencia.despesas.is_empty() {
            cabecalho.push(format!("Despesas: {}", format_currency(total_despesas)));
        }

        let paginacao = paginate_photos(ocorrencia.fotos.len(), layout);
        debug!(
            fotos = ocorrencia.fotos.len(),
            pages = paginacao.page_count(),
            "Report outline built"
        );

        Self {
            titulo: format!("Relatorio de Ocorrencia - {}", cliente.display_name()),
            cabecalho,
            total_despesas,
            paginacao,
        }
    }

    /// Total pages in the rendered report
    pub fn page_count(&self) -> usize {
        self.paginacao.page_count()
    }
}
