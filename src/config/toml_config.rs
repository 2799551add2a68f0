use crate::config::ProcessorConfig;
use crate::utils::error::{ProcessorError, Result};
use crate::utils::validation::Validate;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// ```toml
/// [processor]
/// variant = "apache-log"
/// health_check_marker = "HealthChecker"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub processor: ProcessorConfig,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ProcessorError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| ProcessorError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    pub fn into_processor_config(self) -> ProcessorConfig {
        self.processor
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.processor.validate()
    }
}
