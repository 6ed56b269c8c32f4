//! Configuration integration tests
//!
//! Tests for loading, validating and layering configuration from YAML
//! files and `SEGTRACK_*` environment variables.

#[cfg(test)]
mod tests {
    use segtrack_core::config::{AccessConfig, Config, ReportConfig};
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    // ==================== File Loading ====================

    /// Test loading a complete configuration file
    #[test]
    fn test_load_full_config_file() {
        let file = write_config(
            r#"
access:
  enabled: true
  default_role: "operador"
  admin_roles:
    - "admin"
    - "coordenador"

report:
  columns: 3
  rows_first_page: 1
  rows_full_page: 4
"#,
        );

        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.access.default_role, "operador");
        assert_eq!(config.access.admin_roles, vec!["admin", "coordenador"]);
        assert_eq!(config.report.columns, 3);
        assert_eq!(config.report.rows_full_page, 4);
    }

    /// Test that omitted sections fall back to defaults
    #[test]
    fn test_partial_config_file_uses_defaults() {
        let file = write_config(
            r#"
access:
  default_role: "operador"
"#,
        );

        let config = Config::from_file(file.path()).unwrap();
        assert!(config.access.enabled);
        assert_eq!(config.access.default_role, "operador");
        assert_eq!(config.report, ReportConfig::default());
    }

    /// Test that an empty mapping yields the default configuration
    #[test]
    fn test_empty_config_file() {
        let file = write_config("{}\n");
        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config, Config::default());
    }

    /// Test rejection of syntactically broken YAML
    #[test]
    fn test_broken_yaml_is_rejected() {
        let file = write_config("access: [unclosed\n");
        let err = Config::from_file(file.path()).unwrap_err();
        assert!(err.to_string().contains("parse"));
    }

    /// Test rejection of a layout that cannot hold photos
    #[test]
    fn test_invalid_layout_is_rejected() {
        let file = write_config(
            r#"
report:
  rows_full_page: 0
"#,
        );
        let err = Config::from_file(file.path()).unwrap_err();
        assert!(err.to_string().contains("full pages"));
    }

    /// Test rejection of blank role names
    #[test]
    fn test_blank_role_is_rejected() {
        let file = write_config(
            r#"
access:
  default_role: "   "
"#,
        );
        assert!(Config::from_file(file.path()).is_err());
    }

    // ==================== Environment Overrides ====================

    /// Test loading configuration from SEGTRACK_* environment variables
    #[test]
    fn test_config_from_env() {
        unsafe {
            std::env::set_var("SEGTRACK_DEFAULT_ROLE", "consulta");
            std::env::set_var("SEGTRACK_ADMIN_ROLES", "admin, gestor ,");
            std::env::set_var("SEGTRACK_REPORT_COLUMNS", "4");
        }

        let config = Config::from_env().unwrap();

        unsafe {
            std::env::remove_var("SEGTRACK_DEFAULT_ROLE");
            std::env::remove_var("SEGTRACK_ADMIN_ROLES");
            std::env::remove_var("SEGTRACK_REPORT_COLUMNS");
        }

        assert_eq!(config.access.default_role, "consulta");
        assert_eq!(config.access.admin_roles, vec!["admin", "gestor"]);
        assert_eq!(config.report.columns, 4);
        assert_eq!(config.report.rows_full_page, 3);
    }

    // ==================== Layering ====================

    /// Test file-then-override layering through merge
    #[test]
    fn test_file_config_with_override_layer() {
        let file = write_config(
            r#"
access:
  default_role: "operador"
report:
  columns: 3
"#,
        );
        let base = Config::from_file(file.path()).unwrap();

        let overlay = Config {
            report: ReportConfig {
                rows_full_page: 5,
                ..ReportConfig::default()
            },
            ..Config::default()
        };

        let merged = base.merge(overlay);
        assert_eq!(merged.access.default_role, "operador");
        assert_eq!(merged.report.columns, 3);
        assert_eq!(merged.report.rows_full_page, 5);
    }

    // ==================== Serialization ====================

    /// Test that a config survives a YAML write/read cycle
    #[test]
    fn test_yaml_round_trip() {
        let config = Config {
            access: AccessConfig {
                enabled: false,
                default_role: "operador".to_string(),
                admin_roles: vec!["admin".to_string()],
            },
            report: ReportConfig {
                columns: 2,
                rows_first_page: 0,
                rows_full_page: 6,
            },
        };

        let yaml = config.to_yaml().unwrap();
        let file = write_config(&yaml);
        let back = Config::from_file(file.path()).unwrap();
        assert_eq!(back, config);
    }
}
