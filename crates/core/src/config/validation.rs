//! Configuration validation, run whenever a config file is loaded

use crate::error::{Error, Result};
use regex::Regex;
use std::sync::LazyLock;

use super::GeneratorConfig;

static QUALIFIED_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*(\.[A-Za-z_][A-Za-z0-9_]*)*$").expect("valid regex")
});

static SIMPLE_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("valid regex"));

static CHANNEL_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9_.-]+:[a-z0-9_./-]+$").expect("valid regex"));

/// Trait for validating configurations
pub trait ConfigValidator {
    fn validate(&self, config: &GeneratorConfig) -> Result<()>;
}

/// Checks every configured name has the shape it is used in
#[derive(Debug, Default)]
pub struct DefaultConfigValidator;

impl DefaultConfigValidator {
    pub fn new() -> Self {
        Self
    }

    fn check(field: &str, value: &str, pattern: &Regex, expected: &str) -> Result<()> {
        if pattern.is_match(value) {
            Ok(())
        } else {
            Err(Error::ConfigError(format!(
                "{field} must be {expected}, got '{value}'"
            )))
        }
    }
}

impl ConfigValidator for DefaultConfigValidator {
    fn validate(&self, config: &GeneratorConfig) -> Result<()> {
        let qualified = [
            ("annotation", &config.annotation),
            ("lib_package", &config.lib_package),
            ("settings_type", &config.settings_type),
            ("identifier_type", &config.identifier_type),
            ("world_type", &config.world_type),
            ("position_type", &config.position_type),
            ("boolean_type", &config.boolean_type),
            ("gui_type", &config.gui_type),
            ("container_gui_type", &config.container_gui_type),
            ("ui_state_type", &config.ui_state_type),
            ("screen_handler_interface", &config.screen_handler_interface),
            ("block_template", &config.block_template),
            ("item_group", &config.item_group),
        ];
        for (field, value) in qualified {
            Self::check(field, value, &QUALIFIED_NAME, "a dotted qualified name")?;
        }

        Self::check(
            "initializer_name",
            &config.initializer_name,
            &SIMPLE_NAME,
            "a simple identifier",
        )?;
        Self::check(
            "state_channel",
            &config.state_channel,
            &CHANNEL_ID,
            "a namespace:path identifier",
        )?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(DefaultConfigValidator::new().validate(&GeneratorConfig::default()).is_ok());
    }

    #[test]
    fn test_rejects_bad_names() {
        let validator = DefaultConfigValidator::new();

        let config = GeneratorConfig {
            gui_type: "nipah..GUI".to_string(),
            ..GeneratorConfig::default()
        };
        assert!(validator.validate(&config).is_err());

        let config = GeneratorConfig {
            initializer_name: "my.Init".to_string(),
            ..GeneratorConfig::default()
        };
        assert!(validator.validate(&config).is_err());

        let config = GeneratorConfig {
            state_channel: "NoNamespace".to_string(),
            ..GeneratorConfig::default()
        };
        let err = validator.validate(&config).unwrap_err();
        assert!(err.to_string().contains("state_channel"));
    }
}
