//! Contract/form conversion
//!
//! Both directions are total: missing or malformed input degrades to zero,
//! empty string or `None`, never to an error. The panel would rather show an
//! under-populated form than refuse to open the dialog.

use super::form::ContratoForm;
use super::model::{Contrato, Franquia, RegiaoPreco};
use tracing::warn;

/// Parse a display string into a number.
///
/// Strips every character that is not a digit, `.` or `-`, treats an empty
/// remainder as absent, and fails to `None` when what is left does not parse.
/// Comma-decimal input is deliberately not handled here: callers normalize
/// Brazilian formatting to dot-decimal first (see [`crate::utils::format`]).
pub fn to_number(raw: &str) -> Option<f64> {
    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse::<f64>().ok()
}

fn opt_number(field: &Option<String>) -> Option<f64> {
    field.as_deref().and_then(to_number)
}

fn number_or_zero(field: &Option<String>) -> f64 {
    opt_number(field).unwrap_or(0.0)
}

/// Display form of an optional number: absent becomes the empty string.
fn stringify(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

fn franquia_from(form: &ContratoForm) -> Franquia {
    Franquia {
        horas: form
            .franquia_horas
            .as_deref()
            .filter(|horas| !horas.is_empty())
            .unwrap_or("00:00")
            .to_string(),
        km: number_or_zero(&form.franquia_km),
    }
}

/// Build the wire contract from the edit form.
///
/// Dispatches on the uppercase frontend tag. An unknown tag keeps the raw
/// tag in a shell record so nothing the operator typed is silently retyped
/// into a different variant.
pub fn to_contrato(form: &ContratoForm) -> Contrato {
    match form.tipo.as_str() {
        "PADRAO_REGIAO" => {
            let nao_recuperado = opt_number(&form.valor_nao_recuperado);
            let regioes = match form.regiao.as_deref().filter(|r| !r.is_empty()) {
                Some(regiao) => vec![RegiaoPreco {
                    regiao: regiao.to_string(),
                    valor_acionamento: number_or_zero(&form.valor_acionamento),
                    valor_hora_extra: number_or_zero(&form.valor_hora_extra),
                    valor_km_extra: number_or_zero(&form.valor_km_extra),
                    valor_nao_recuperado: nao_recuperado,
                }],
                // The dialog edits a single region; no region typed, no list.
                None => Vec::new(),
            };

            Contrato::PadraoRegiao {
                nome_interno: form.nome_interno.clone(),
                franquia: franquia_from(form),
                regioes,
                diferencia_nao_recuperado: matches!(nao_recuperado, Some(v) if v != 0.0),
            }
        }
        "ACL_KM" => Contrato::AclKm {
            nome_interno: form.nome_interno.clone(),
            valor_km: number_or_zero(&form.valor_km),
        },
        "PADRAO_FIXO" => Contrato::PadraoFixo {
            nome_interno: form.nome_interno.clone(),
            franquia: franquia_from(form),
            valor_acionamento: number_or_zero(&form.valor_acionamento),
            valor_hora_extra: number_or_zero(&form.valor_hora_extra),
            valor_km_extra: number_or_zero(&form.valor_km_extra),
        },
        "VALOR_FECHADO" => Contrato::ValorFechado {
            nome_interno: form.nome_interno.clone(),
            permite_negociacao: form.permite_negociacao.unwrap_or(false),
            valor_padrao: opt_number(&form.valor_padrao),
            franquia: form
                .franquia_horas
                .as_deref()
                .filter(|horas| !horas.is_empty())
                .map(|_| franquia_from(form)),
            valor_hora_extra: opt_number(&form.valor_hora_extra),
            valor_km_extra: opt_number(&form.valor_km_extra),
        },
        other => {
            warn!(tipo = other, "Unknown contract type on form, keeping shell record");
            Contrato::Desconhecido {
                tipo: other.to_string(),
                nome_interno: form.nome_interno.clone(),
            }
        }
    }
}

/// Build the edit form from a wire contract.
///
/// Fields relevant to the variant are filled as display strings (absent
/// numbers become empty strings); fields of other variants stay unset. An
/// unknown tag degrades to the name-and-tag shell with a logged warning.
pub fn to_form(contrato: &Contrato) -> ContratoForm {
    match contrato {
        Contrato::PadraoRegiao {
            nome_interno,
            franquia,
            regioes,
            ..
        } => {
            let primeira = regioes.first();
            ContratoForm {
                franquia_horas: Some(franquia.horas.clone()),
                franquia_km: Some(stringify(Some(franquia.km))),
                regiao: Some(primeira.map(|r| r.regiao.clone()).unwrap_or_default()),
                valor_acionamento: Some(stringify(primeira.map(|r| r.valor_acionamento))),
                valor_hora_extra: Some(stringify(primeira.map(|r| r.valor_hora_extra))),
                valor_km_extra: Some(stringify(primeira.map(|r| r.valor_km_extra))),
                valor_nao_recuperado: Some(stringify(
                    primeira.and_then(|r| r.valor_nao_recuperado),
                )),
                ..ContratoForm::new("PADRAO_REGIAO", nome_interno.clone())
            }
        }
        Contrato::AclKm {
            nome_interno,
            valor_km,
        } => ContratoForm {
            valor_km: Some(stringify(Some(*valor_km))),
            ..ContratoForm::new("ACL_KM", nome_interno.clone())
        },
        Contrato::PadraoFixo {
            nome_interno,
            franquia,
            valor_acionamento,
            valor_hora_extra,
            valor_km_extra,
        } => ContratoForm {
            franquia_horas: Some(franquia.horas.clone()),
            franquia_km: Some(stringify(Some(franquia.km))),
            valor_acionamento: Some(stringify(Some(*valor_acionamento))),
            valor_hora_extra: Some(stringify(Some(*valor_hora_extra))),
            valor_km_extra: Some(stringify(Some(*valor_km_extra))),
            ..ContratoForm::new("PADRAO_FIXO", nome_interno.clone())
        },
        Contrato::ValorFechado {
            nome_interno,
            permite_negociacao,
            valor_padrao,
            franquia,
            valor_hora_extra,
            valor_km_extra,
        } => ContratoForm {
            permite_negociacao: Some(*permite_negociacao),
            valor_padrao: Some(stringify(*valor_padrao)),
            franquia_horas: Some(
                franquia
                    .as_ref()
                    .map(|f| f.horas.clone())
                    .unwrap_or_default(),
            ),
            franquia_km: Some(stringify(franquia.as_ref().map(|f| f.km))),
            valor_hora_extra: Some(stringify(*valor_hora_extra)),
            valor_km_extra: Some(stringify(*valor_km_extra)),
            ..ContratoForm::new("VALOR_FECHADO", nome_interno.clone())
        },
        Contrato::Desconhecido { tipo, nome_interno } => {
            warn!(tipo, "Unknown contract type from backend, building shell form");
            ContratoForm::new(tipo.clone(), nome_interno.clone())
        }
    }
}
