use crate::config::{unescape_separator, ProcessorConfig, ProcessorKind};
use crate::utils::error::{ProcessorError, Result};
use crate::utils::validation::{validate_required_field, Validate};
use std::env;

pub const ENV_VARIANT: &str = "PROCESSOR_VARIANT";
pub const ENV_HEALTH_CHECK_MARKER: &str = "HEALTH_CHECK_MARKER";
pub const ENV_LINE_SEPARATOR: &str = "LINE_SEPARATOR";
pub const ENV_LOG_PAYLOADS: &str = "LOG_PAYLOADS";

/// Lambda 冷啟動時從環境變數讀取一次
#[derive(Debug, Clone)]
pub struct LambdaConfig {
    pub processor: ProcessorConfig,
}

impl LambdaConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let variant = lookup(ENV_VARIANT);
        let variant: ProcessorKind = validate_required_field(ENV_VARIANT, &variant)?.parse()?;

        let mut processor = ProcessorConfig::new(variant);
        if let Some(marker) = lookup(ENV_HEALTH_CHECK_MARKER) {
            processor.health_check_marker = marker;
        }
        if let Some(separator) = lookup(ENV_LINE_SEPARATOR) {
            processor.line_separator = unescape_separator(&separator);
        }
        if let Some(flag) = lookup(ENV_LOG_PAYLOADS) {
            processor.log_payloads = parse_bool(ENV_LOG_PAYLOADS, &flag)?;
        }

        Ok(Self { processor })
    }
}

impl Validate for LambdaConfig {
    fn validate(&self) -> Result<()> {
        self.processor.validate()?;
        tracing::info!("✅ Lambda configuration validation passed");
        Ok(())
    }
}

fn parse_bool(field_name: &str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(ProcessorError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Expected a boolean (true/false)".to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_variant_is_required() {
        let err = LambdaConfig::from_lookup(lookup(&[])).unwrap_err();
        assert!(matches!(err, ProcessorError::MissingConfigError { .. }));
    }

    #[test]
    fn test_defaults_from_variant_only() {
        let config = LambdaConfig::from_lookup(lookup(&[("PROCESSOR_VARIANT", "apache-log")])).unwrap();
        assert_eq!(config.processor, ProcessorConfig::new(ProcessorKind::ApacheLog));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_overrides() {
        let config = LambdaConfig::from_lookup(lookup(&[
            ("PROCESSOR_VARIANT", "raw_lines"),
            ("LINE_SEPARATOR", r"\n"),
            ("HEALTH_CHECK_MARKER", "kube-probe"),
            ("LOG_PAYLOADS", "true"),
        ]))
        .unwrap();
        assert_eq!(config.processor.variant, ProcessorKind::RawLines);
        assert_eq!(config.processor.line_separator, "\n");
        assert_eq!(config.processor.health_check_marker, "kube-probe");
        assert!(config.processor.log_payloads);
    }

    #[test]
    fn test_invalid_values() {
        assert!(LambdaConfig::from_lookup(lookup(&[("PROCESSOR_VARIANT", "xml")])).is_err());
        assert!(LambdaConfig::from_lookup(lookup(&[
            ("PROCESSOR_VARIANT", "json-message"),
            ("LOG_PAYLOADS", "maybe"),
        ]))
        .is_err());
    }
}
