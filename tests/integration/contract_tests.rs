//! Contract conversion integration tests
//!
//! Tests the full path a billing contract travels: backend JSON into the
//! tagged model, model into the flat edit form, operator edits back into
//! the model, and the model back out as JSON.

#[cfg(test)]
mod tests {
    use crate::common::fixtures::ContratoFormFactory;
    use segtrack_core::core::contracts::{Contrato, ContratoForm, to_contrato, to_form};
    use segtrack_core::core::models::Cliente;
    use segtrack_core::utils::parse_currency;

    // ==================== Wire Deserialization ====================

    /// Test a realistic client payload with a mixed contract list
    #[test]
    fn test_client_payload_with_mixed_contracts() {
        let json = format!(
            r#"{{
                "id": "{}",
                "created_at": "2024-03-10T12:00:00Z",
                "updated_at": "2024-03-10T12:00:00Z",
                "version": 3,
                "razao_social": "Transportes Alfa Ltda",
                "nome_fantasia": "Transportes Alfa",
                "cnpj": "11.222.333/0001-81",
                "contratos": [
                    {{"tipo": "acl_km", "nome_interno": "ACL", "valor_km": 2.5}},
                    {{"tipo": "tabela_nova", "nome_interno": "Futuro"}},
                    {{
                        "tipo": "padrao_regiao",
                        "nome_interno": "Frota Sul",
                        "franquia": {{"horas": "02:00", "km": 100.0}},
                        "regioes": [{{
                            "regiao": "Capital",
                            "valor_acionamento": 500.0,
                            "valor_hora_extra": 50.0,
                            "valor_km_extra": 5.0
                        }}],
                        "diferencia_nao_recuperado": false
                    }}
                ]
            }}"#,
            uuid::Uuid::new_v4()
        );

        let cliente: Cliente = serde_json::from_str(&json).unwrap();
        assert_eq!(cliente.contratos.len(), 3);

        // The unknown tag survives as a shell instead of poisoning the list.
        assert!(matches!(
            &cliente.contratos[1],
            Contrato::Desconhecido { tipo, .. } if tipo == "tabela_nova"
        ));
        assert!(cliente.contrato("Frota Sul").is_some());
    }

    /// Test that the model serializes back under the same lowercase tag
    #[test]
    fn test_model_serializes_with_wire_tag() {
        let contrato = to_contrato(&ContratoFormFactory::acl_km());
        let json = serde_json::to_value(&contrato).unwrap();
        assert_eq!(json["tipo"], "acl_km");
        assert_eq!(json["valor_km"], 2.5);

        let back: Contrato = serde_json::from_value(json).unwrap();
        assert_eq!(back, contrato);
    }

    // ==================== Form Round Trips ====================

    /// Test form-model-form stability for every variant
    #[test]
    fn test_round_trip_is_stable_for_all_variants() {
        let forms = [
            ContratoFormFactory::acl_km(),
            ContratoFormFactory::padrao_regiao(),
            ContratoFormFactory::padrao_fixo(),
            ContratoFormFactory::valor_fechado_blank(),
        ];

        for form in forms {
            let contrato = to_contrato(&form);
            let back = to_form(&contrato);

            // One more pass must change nothing.
            let again = to_form(&to_contrato(&back));
            assert_eq!(again, back, "round trip not stable for {}", form.tipo);

            // And the models on both sides agree.
            assert_eq!(to_contrato(&back), contrato, "model drifted for {}", form.tipo);
        }
    }

    /// Test that numeric display strings survive the trip unchanged in value
    #[test]
    fn test_numbers_survive_round_trip() {
        let form = ContratoFormFactory::padrao_fixo();
        let back = to_form(&to_contrato(&form));

        assert_eq!(back.valor_acionamento.as_deref(), Some("450"));
        assert_eq!(back.valor_hora_extra.as_deref(), Some("60"));
        assert_eq!(back.valor_km_extra.as_deref(), Some("4.5"));
        assert_eq!(back.franquia_horas.as_deref(), Some("03:00"));
    }

    // ==================== Absent vs Zero ====================

    /// Test that blank closed-value fields stay absent, not zero
    #[test]
    fn test_blank_closed_value_fields_stay_absent() {
        let contrato = to_contrato(&ContratoFormFactory::valor_fechado_blank());
        match contrato {
            Contrato::ValorFechado {
                valor_padrao,
                franquia,
                valor_hora_extra,
                valor_km_extra,
                permite_negociacao,
                ..
            } => {
                assert!(permite_negociacao);
                assert_eq!(valor_padrao, None);
                assert_eq!(franquia, None);
                assert_eq!(valor_hora_extra, None);
                assert_eq!(valor_km_extra, None);
            }
            other => panic!("expected valor_fechado, got {:?}", other),
        }
    }

    /// Test that a typed zero is preserved as zero
    #[test]
    fn test_typed_zero_is_kept() {
        let form = ContratoForm {
            valor_padrao: Some("0".to_string()),
            ..ContratoFormFactory::valor_fechado_blank()
        };
        match to_contrato(&form) {
            Contrato::ValorFechado { valor_padrao, .. } => {
                assert_eq!(valor_padrao, Some(0.0));
            }
            other => panic!("expected valor_fechado, got {:?}", other),
        }
    }

    // ==================== Non-Recovered Pricing Flag ====================

    /// Test the differentiated-pricing flag follows the typed value
    #[test]
    fn test_non_recovered_flag_follows_value() {
        let with_value = to_contrato(&ContratoFormFactory::padrao_regiao());
        assert!(matches!(
            with_value,
            Contrato::PadraoRegiao {
                diferencia_nao_recuperado: true,
                ..
            }
        ));

        let zeroed = ContratoForm {
            valor_nao_recuperado: Some("0".to_string()),
            ..ContratoFormFactory::padrao_regiao()
        };
        assert!(matches!(
            to_contrato(&zeroed),
            Contrato::PadraoRegiao {
                diferencia_nao_recuperado: false,
                ..
            }
        ));
    }

    // ==================== Unknown Variants ====================

    /// Test conversion of unknown tags in both directions
    #[test]
    fn test_unknown_tags_degrade_to_shells() {
        let form = ContratoForm {
            valor_km: Some("9.9".to_string()),
            ..ContratoForm::new("POR_PESO", "Novo Plano")
        };
        let contrato = to_contrato(&form);
        assert_eq!(
            contrato,
            Contrato::Desconhecido {
                tipo: "POR_PESO".to_string(),
                nome_interno: "Novo Plano".to_string()
            }
        );

        let back = to_form(&contrato);
        assert_eq!(back.tipo, "POR_PESO");
        assert_eq!(back.nome_interno, "Novo Plano");
        assert_eq!(back.valor_km, None);
    }

    // ==================== BRL Input Normalization ====================

    /// Test that caller-side currency parsing feeds the converter correctly
    #[test]
    fn test_currency_normalization_before_conversion() {
        // The operator types BRL formatting; the form layer parses it before
        // the value reaches the conversion entry point.
        let parsed = parse_currency("R$ 1.234,56").unwrap();
        let form = ContratoForm {
            valor_km: Some(parsed.to_string()),
            ..ContratoForm::new("ACL_KM", "ACL")
        };

        match to_contrato(&form) {
            Contrato::AclKm { valor_km, .. } => assert_eq!(valor_km, 1234.56),
            other => panic!("expected acl_km, got {:?}", other),
        }
    }
}
