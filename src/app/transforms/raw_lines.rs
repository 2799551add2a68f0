use crate::domain::model::{LogEvent, Payload, TransformOutcome};
use crate::domain::ports::EventTransform;
use crate::utils::error::Result;

pub const DEFAULT_LINE_SEPARATOR: &str = "\r\n";

/// 整筆 record 的 message 以分隔字串串接成一段純文字，不做 JSON 包裝
#[derive(Debug, Clone)]
pub struct RawLinesTransform {
    separator: String,
}

impl RawLinesTransform {
    pub fn new(separator: impl Into<String>) -> Self {
        Self {
            separator: separator.into(),
        }
    }
}

impl Default for RawLinesTransform {
    fn default() -> Self {
        Self::new(DEFAULT_LINE_SEPARATOR)
    }
}

impl EventTransform for RawLinesTransform {
    fn name(&self) -> &'static str {
        "raw-lines"
    }

    fn transform(&self, events: &[LogEvent]) -> Result<Vec<TransformOutcome>> {
        let joined = events
            .iter()
            .map(|event| event.message.as_str())
            .collect::<Vec<_>>()
            .join(&self.separator);

        Ok(vec![TransformOutcome::Ok(Payload::Raw(joined))])
    }
}
