#[cfg(feature = "cli")]
pub mod cli;
pub mod lambda;
pub mod toml_config;

use crate::app::transforms::apache_log::DEFAULT_HEALTH_CHECK_MARKER;
use crate::app::transforms::raw_lines::DEFAULT_LINE_SEPARATOR;
use crate::utils::error::{ProcessorError, Result};
use crate::utils::validation::{
    validate_non_empty_separator, validate_non_empty_string, validate_one_of, Validate,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 三種 processor 變體
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "kebab-case")]
pub enum ProcessorKind {
    /// 解析 access log 並過濾 health check
    ApacheLog,
    /// message 為 JSON，原樣輸出
    JsonMessage,
    /// message 串接成純文字
    RawLines,
}

impl ProcessorKind {
    pub const NAMES: [&'static str; 3] = ["apache-log", "json-message", "raw-lines"];
    pub const ALL: [ProcessorKind; 3] = [
        ProcessorKind::ApacheLog,
        ProcessorKind::JsonMessage,
        ProcessorKind::RawLines,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProcessorKind::ApacheLog => "apache-log",
            ProcessorKind::JsonMessage => "json-message",
            ProcessorKind::RawLines => "raw-lines",
        }
    }
}

impl fmt::Display for ProcessorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProcessorKind {
    type Err = ProcessorError;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        let index = validate_one_of("variant", &normalized, &Self::NAMES)?;
        Ok(Self::ALL[index])
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessorConfig {
    pub variant: ProcessorKind,
    #[serde(default = "default_health_check_marker")]
    pub health_check_marker: String,
    #[serde(default = "default_line_separator")]
    pub line_separator: String,
    #[serde(default)]
    pub log_payloads: bool,
}

fn default_health_check_marker() -> String {
    DEFAULT_HEALTH_CHECK_MARKER.to_string()
}

fn default_line_separator() -> String {
    DEFAULT_LINE_SEPARATOR.to_string()
}

impl ProcessorConfig {
    pub fn new(variant: ProcessorKind) -> Self {
        Self {
            variant,
            health_check_marker: default_health_check_marker(),
            line_separator: default_line_separator(),
            log_payloads: false,
        }
    }
}

impl Validate for ProcessorConfig {
    fn validate(&self) -> Result<()> {
        if self.variant == ProcessorKind::ApacheLog {
            validate_non_empty_string("health_check_marker", &self.health_check_marker)?;
        }
        if self.variant == ProcessorKind::RawLines {
            validate_non_empty_separator("line_separator", &self.line_separator)?;
        }
        Ok(())
    }
}

/// 解析 "\r\n" 這類跳脫字元；環境變數與 CLI 參數無法直接放入控制字元
pub fn unescape_separator(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut chars = value.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('r') => out.push('\r'),
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('\\') => out.push('\\'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}
