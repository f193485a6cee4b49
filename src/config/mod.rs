//! `.roimap.toml` configuration.
//!
//! The file is looked up from the current directory upwards. A missing file
//! means defaults; an unreadable or malformed one is logged and also means
//! defaults. Configuration never aborts a calculation.

mod core;
mod loader;

pub use core::{
    default_fallback_hourly_rate, default_frequency_unit, CalculationConfig, OutputConfig,
    RoimapConfig,
};
pub use loader::{
    directory_ancestors, load_config, load_config_from, parse_and_validate_config,
    CONFIG_FILE_NAME,
};

/// Contents written by `roimap init`.
pub const DEFAULT_CONFIG_TOML: &str = r#"# roimap configuration

[calculation]
# Hourly rate assumed when hours were saved but nobody on the baseline has a rate
fallback_hourly_rate = 80.0
# Unit used when a frequency unit is missing or unrecognized
default_frequency_unit = "month"

[output]
default_format = "terminal"
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frequency::FrequencyUnit;
    use pretty_assertions::assert_eq;
    use std::path::PathBuf;

    #[test]
    fn test_default_config_toml_round_trips_to_defaults() {
        let config = parse_and_validate_config(DEFAULT_CONFIG_TOML).unwrap();
        assert_eq!(config.calculation, Some(CalculationConfig::default()));
        assert_eq!(config.default_format(), Some("terminal"));
        assert_eq!(
            config.calculation_context(),
            crate::roi::CalculationContext::default()
        );
    }

    #[test]
    fn test_parse_and_validate_config_overrides() {
        let toml_content = r#"
[calculation]
fallback_hourly_rate = 120.5
default_frequency_unit = "semana"
"#;
        let config = parse_and_validate_config(toml_content).unwrap();
        let context = config.calculation_context();
        assert_eq!(context.fallback_hourly_rate, 120.5);
        assert_eq!(context.default_frequency_unit, FrequencyUnit::Week);
        assert_eq!(config.default_format(), None);
    }

    #[test]
    fn test_partial_calculation_table_fills_defaults() {
        let config =
            parse_and_validate_config("[calculation]\nfallback_hourly_rate = 10\n").unwrap();
        let calculation = config.calculation.unwrap();
        assert_eq!(calculation.fallback_hourly_rate, 10.0);
        assert_eq!(calculation.default_frequency_unit, "month");
    }

    #[test]
    fn test_parse_and_validate_config_invalid_toml() {
        let err = parse_and_validate_config("invalid toml [[ content").unwrap_err();
        assert!(matches!(err, crate::core::Error::Toml(_)));
        assert!(err.to_string().starts_with("Failed to parse configuration"));
        assert!(err.is_user_fixable());
    }

    #[test]
    fn test_invalid_calculation_settings_replaced_with_defaults() {
        let toml_content = r#"
[calculation]
fallback_hourly_rate = -5.0
default_frequency_unit = "fortnight"
"#;
        let config = parse_and_validate_config(toml_content).unwrap();
        assert_eq!(config.calculation, Some(CalculationConfig::default()));
    }

    #[test]
    fn test_unknown_unit_alone_is_rejected() {
        let calculation = CalculationConfig {
            default_frequency_unit: "fortnight".into(),
            ..CalculationConfig::default()
        };
        let err = calculation.validate().unwrap_err();
        assert!(matches!(err, crate::core::Error::Configuration(_)));
        assert!(err.to_string().contains("fortnight"));
    }

    #[test]
    fn test_directory_ancestors_generates_correct_sequence() {
        let ancestors: Vec<PathBuf> = directory_ancestors(PathBuf::from("/a/b/c/d"), 3).collect();
        assert_eq!(
            ancestors,
            vec![
                PathBuf::from("/a/b/c/d"),
                PathBuf::from("/a/b/c"),
                PathBuf::from("/a/b"),
            ]
        );
    }

    #[test]
    fn test_directory_ancestors_handles_root() {
        let ancestors: Vec<PathBuf> = directory_ancestors(PathBuf::from("/"), 5).collect();
        assert_eq!(ancestors, vec![PathBuf::from("/")]);
    }

    #[test]
    fn test_load_config_from_parent_directory() {
        use std::fs;
        use tempfile::TempDir;

        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join(CONFIG_FILE_NAME),
            "[calculation]\nfallback_hourly_rate = 95.0\n",
        )
        .unwrap();
        let nested = temp_dir.path().join("reports").join("q3");
        fs::create_dir_all(&nested).unwrap();

        let config = load_config_from(nested);
        assert_eq!(config.calculation_context().fallback_hourly_rate, 95.0);
    }

    #[test]
    fn test_load_config_from_invalid_file_uses_defaults() {
        use std::fs;
        use tempfile::TempDir;

        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join(CONFIG_FILE_NAME), "not = [valid").unwrap();

        let config = load_config_from(temp_dir.path().to_path_buf());
        assert_eq!(config.calculation, None);
    }

    #[test]
    fn test_read_error_not_found_is_silent() {
        let error = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
        loader::handle_read_error(&PathBuf::from("/test/path"), &error);
    }
}
