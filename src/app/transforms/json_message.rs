use crate::domain::model::{LogEvent, Payload, TransformOutcome};
use crate::domain::ports::EventTransform;
use crate::utils::error::Result;

/// 每個 log event 的 message 本身就是一段 JSON，原樣輸出
#[derive(Debug, Clone, Default)]
pub struct JsonMessageTransform;

impl JsonMessageTransform {
    pub fn new() -> Self {
        Self
    }

    fn parse_message(&self, event: &LogEvent) -> TransformOutcome {
        match serde_json::from_str::<serde_json::Value>(&event.message) {
            Ok(value) => TransformOutcome::Ok(Payload::Structured(value)),
            Err(e) => {
                tracing::warn!("Log event {} is not valid JSON: {}", event.id, e);
                TransformOutcome::Failed
            }
        }
    }
}

impl EventTransform for JsonMessageTransform {
    fn name(&self) -> &'static str {
        "json-message"
    }

    fn transform(&self, events: &[LogEvent]) -> Result<Vec<TransformOutcome>> {
        Ok(events.iter().map(|event| self.parse_message(event)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn event(message: &str) -> LogEvent {
        LogEvent {
            id: json!("34347401063152187823588091447941432395582337638937001984"),
            timestamp: json!(1540190731627i64),
            message: message.to_string(),
        }
    }

    #[test]
    fn test_embedded_json_is_passed_through() {
        let outcomes = JsonMessageTransform::new()
            .transform(&[event(r#"{"a":1}"#)])
            .unwrap();
        assert_eq!(
            outcomes,
            vec![TransformOutcome::Ok(Payload::Structured(json!({"a": 1})))]
        );
    }

    #[test]
    fn test_key_order_is_preserved() {
        let message = r#"{"method":"GET","path":"/example/12345","status":200,"params":{"user_id":"11111"},"@timestamp":"2018-10-22T06:45:31.428Z"}"#;
        let outcomes = JsonMessageTransform::new().transform(&[event(message)]).unwrap();
        let TransformOutcome::Ok(Payload::Structured(value)) = &outcomes[0] else {
            panic!("expected structured payload");
        };
        assert_eq!(serde_json::to_string(value).unwrap(), message);
    }

    #[test]
    fn test_invalid_json_fails_only_that_event() {
        let outcomes = JsonMessageTransform::new()
            .transform(&[event("not json"), event("[1,2]")])
            .unwrap();
        assert_eq!(outcomes[0], TransformOutcome::Failed);
        assert_eq!(outcomes[1], TransformOutcome::Ok(Payload::Structured(json!([1, 2]))));
    }
}
