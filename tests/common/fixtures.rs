//! Test fixtures and data factories
//!
//! Provides factory methods for creating test data with sensible defaults.
//! All factories create real objects, not mocks.

use segtrack_core::auth::{AuthSession, PermissionGrant};
use segtrack_core::core::contracts::ContratoForm;
use segtrack_core::core::models::{Cliente, Despesa, Foto, Ocorrencia, OcorrenciaStatus};
use uuid::Uuid;

/// Factory for creating operator sessions
pub struct SessionFactory;

impl SessionFactory {
    /// Create a regular operator session with a typical scope list
    pub fn operator() -> AuthSession {
        AuthSession::new(
            "operador",
            PermissionGrant::ScopeList(vec![
                "access:dashboard".to_string(),
                "access:ocorrencias".to_string(),
                "read:ocorrencias".to_string(),
            ]),
        )
    }

    /// Create an admin session with no explicit grants
    pub fn admin() -> AuthSession {
        AuthSession::new("admin", PermissionGrant::empty())
    }

    /// Create a session holding exactly the given scopes
    pub fn with_scopes(role: &str, scopes: &[&str]) -> AuthSession {
        AuthSession::new(
            role,
            PermissionGrant::ScopeList(scopes.iter().map(|s| s.to_string()).collect()),
        )
    }

    /// Create a session from whatever the backend stored, verbatim
    pub fn from_raw(role: &str, raw_grant: &str) -> AuthSession {
        AuthSession::new(role, PermissionGrant::from_raw(raw_grant))
    }
}

/// Factory for creating client records
pub struct ClienteFactory;

impl ClienteFactory {
    /// Create a basic client with a valid CNPJ
    pub fn create() -> Cliente {
        let mut cliente = Cliente::new("Transportes Alfa Ltda");
        cliente.nome_fantasia = Some("Transportes Alfa".to_string());
        cliente.cnpj = Some("11.222.333/0001-81".to_string());
        cliente
    }

    /// Create a client with one contract of each common variant
    pub fn with_contratos() -> Cliente {
        let mut cliente = Self::create();
        cliente.contratos.push(segtrack_core::core::contracts::to_contrato(
            &ContratoFormFactory::acl_km(),
        ));
        cliente.contratos.push(segtrack_core::core::contracts::to_contrato(
            &ContratoFormFactory::padrao_regiao(),
        ));
        cliente
    }
}

/// Factory for creating occurrence records
pub struct OcorrenciaFactory;

impl OcorrenciaFactory {
    /// Create an open occurrence for a fresh client id
    pub fn create() -> Ocorrencia {
        let mut ocorrencia = Ocorrencia::new(Uuid::new_v4());
        ocorrencia.placa = Some("ABC1D23".to_string());
        ocorrencia.local = Some("Rodovia Anhanguera, km 62".to_string());
        ocorrencia
    }

    /// Create a finished occurrence carrying `foto_count` photos
    pub fn finalizada_with_fotos(foto_count: usize) -> Ocorrencia {
        let mut ocorrencia = Self::create();
        ocorrencia.status = OcorrenciaStatus::Finalizada;
        ocorrencia.recuperado = Some(true);
        ocorrencia.km_percorrido = Some(140.0);
        for i in 0..foto_count {
            ocorrencia.fotos.push(Foto {
                url: format!("https://storage.example.com/fotos/{i}.jpg"),
                legenda: None,
            });
        }
        ocorrencia
    }

    /// Create an occurrence with the given expense values
    pub fn with_despesas(valores: &[f64]) -> Ocorrencia {
        let mut ocorrencia = Self::create();
        for (i, valor) in valores.iter().enumerate() {
            ocorrencia.despesas.push(Despesa {
                descricao: format!("Despesa {}", i + 1),
                valor: *valor,
                categoria: None,
            });
        }
        ocorrencia
    }
}

/// Factory for creating contract edit forms
pub struct ContratoFormFactory;

impl ContratoFormFactory {
    /// Per-kilometer contract form
    pub fn acl_km() -> ContratoForm {
        ContratoForm {
            valor_km: Some("2.5".to_string()),
            ..ContratoForm::new("ACL_KM", "Plano ACL")
        }
    }

    /// Region-priced contract form with a franchise allowance
    pub fn padrao_regiao() -> ContratoForm {
        ContratoForm {
            franquia_horas: Some("02:00".to_string()),
            franquia_km: Some("100".to_string()),
            regiao: Some("Capital".to_string()),
            valor_acionamento: Some("500".to_string()),
            valor_hora_extra: Some("50".to_string()),
            valor_km_extra: Some("5".to_string()),
            valor_nao_recuperado: Some("250".to_string()),
            ..ContratoForm::new("PADRAO_REGIAO", "Frota Sul")
        }
    }

    /// Fixed call-out contract form
    pub fn padrao_fixo() -> ContratoForm {
        ContratoForm {
            franquia_horas: Some("03:00".to_string()),
            franquia_km: Some("150".to_string()),
            valor_acionamento: Some("450".to_string()),
            valor_hora_extra: Some("60".to_string()),
            valor_km_extra: Some("4.5".to_string()),
            ..ContratoForm::new("PADRAO_FIXO", "Fixo Nacional")
        }
    }

    /// Negotiated closed-value contract form with everything blank
    pub fn valor_fechado_blank() -> ContratoForm {
        ContratoForm {
            permite_negociacao: Some(true),
            ..ContratoForm::new("VALOR_FECHADO", "Fechado")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_factory() {
        let session = SessionFactory::operator();
        assert_eq!(session.role, "operador");
        assert!(!session.permissions.is_empty());

        let admin = SessionFactory::admin();
        assert_eq!(admin.role, "admin");
    }

    #[test]
    fn test_cliente_factory() {
        let cliente = ClienteFactory::create();
        assert!(cliente.validate().is_ok());

        let with_contratos = ClienteFactory::with_contratos();
        assert_eq!(with_contratos.contratos.len(), 2);
    }

    #[test]
    fn test_ocorrencia_factory() {
        let ocorrencia = OcorrenciaFactory::finalizada_with_fotos(3);
        assert_eq!(ocorrencia.fotos.len(), 3);
        assert!(ocorrencia.status.is_final());

        let with_despesas = OcorrenciaFactory::with_despesas(&[10.0, 20.0]);
        assert_eq!(with_despesas.total_despesas(), 30.0);
    }

    #[test]
    fn test_form_factory_tags() {
        assert_eq!(ContratoFormFactory::acl_km().tipo, "ACL_KM");
        assert_eq!(ContratoFormFactory::padrao_regiao().tipo, "PADRAO_REGIAO");
        assert_eq!(ContratoFormFactory::padrao_fixo().tipo, "PADRAO_FIXO");
        assert_eq!(
            ContratoFormFactory::valor_fechado_blank().tipo,
            "VALOR_FECHADO"
        );
    }
}
