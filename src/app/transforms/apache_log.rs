use crate::domain::model::{AccessLogEntry, LogEvent, Payload, TransformOutcome};
use crate::domain::ports::EventTransform;
use crate::utils::error::{ProcessorError, Result};
use regex::{Captures, Regex};

/// Apache/ELB combined access log 格式
pub const ACCESS_LOG_PATTERN: &str = r#"(?P<ip>[\d.]+) (\S+) (\S+) \[(?P<date>[\w:/]+\s[\+\-]\d{4})\] "(?P<method>[A-Z.]+) (?P<path>\S+) (\S+)" (?P<status>[\d.]+) (\S+) "(?P<from>\w.|\S+)" "(?P<user_agent>\w.+)""#;

pub const DEFAULT_HEALTH_CHECK_MARKER: &str = "HealthChecker";

pub struct ApacheLogTransform {
    pattern: Regex,
    health_check_marker: String,
}

impl ApacheLogTransform {
    pub fn new(health_check_marker: impl Into<String>) -> Result<Self> {
        let pattern = Regex::new(ACCESS_LOG_PATTERN).map_err(|e| ProcessorError::ConfigError {
            message: format!("Invalid access log pattern: {}", e),
        })?;

        Ok(Self {
            pattern,
            health_check_marker: health_check_marker.into(),
        })
    }

    /// 不符合格式的訊息直接回傳 Failed，不會去讀任何 capture group
    pub fn parse_line(&self, message: &str) -> Result<TransformOutcome> {
        let Some(captures) = self.pattern.captures(message) else {
            tracing::warn!("The log message doesn't match the access log pattern");
            return Ok(TransformOutcome::Failed);
        };

        let entry = Self::entry_from(&captures);
        if entry.user_agent.contains(&self.health_check_marker) {
            tracing::info!("Dropped health check log message ({})", entry.user_agent);
            return Ok(TransformOutcome::Dropped);
        }

        let value = serde_json::to_value(entry)?;
        Ok(TransformOutcome::Ok(Payload::Structured(value)))
    }

    fn entry_from(captures: &Captures<'_>) -> AccessLogEntry {
        let field = |name: &str| {
            captures
                .name(name)
                .map(|m| m.as_str().to_string())
                .unwrap_or_default()
        };

        AccessLogEntry {
            ip: field("ip"),
            date: field("date"),
            method: field("method"),
            path: field("path"),
            status: field("status"),
            from: field("from"),
            user_agent: field("user_agent"),
        }
    }
}

impl EventTransform for ApacheLogTransform {
    fn name(&self) -> &'static str {
        "apache-log"
    }

    fn transform(&self, events: &[LogEvent]) -> Result<Vec<TransformOutcome>> {
        events
            .iter()
            .map(|event| self.parse_line(&event.message))
            .collect()
    }
}
