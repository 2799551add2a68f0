use serde::{Deserialize, Serialize};

/// Firehose 交給 transformation handler 的整批資料
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FirehoseEvent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invocation_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery_stream_arn: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    pub records: Vec<InputRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InputRecord {
    pub record_id: String,
    /// base64(gzip(JSON envelope))
    pub data: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub approximate_arrival_timestamp: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FirehoseResponse {
    pub records: Vec<OutputRecord>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecordResult {
    Ok,
    Dropped,
    ProcessingFailed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputRecord {
    pub record_id: String,
    pub result: RecordResult,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
}

impl OutputRecord {
    pub fn ok(record_id: &str, data: String) -> Self {
        Self {
            record_id: record_id.to_string(),
            result: RecordResult::Ok,
            data: Some(data),
        }
    }

    pub fn dropped(record_id: &str) -> Self {
        Self {
            record_id: record_id.to_string(),
            result: RecordResult::Dropped,
            data: None,
        }
    }

    pub fn failed(record_id: &str) -> Self {
        Self {
            record_id: record_id.to_string(),
            result: RecordResult::ProcessingFailed,
            data: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageType {
    ControlMessage,
    DataMessage,
    Unknown,
}

impl MessageType {
    pub const CONTROL: &'static str = "CONTROL_MESSAGE";
    pub const DATA: &'static str = "DATA_MESSAGE";

    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some(Self::CONTROL) => MessageType::ControlMessage,
            Some(Self::DATA) => MessageType::DataMessage,
            _ => MessageType::Unknown,
        }
    }
}

/// CloudWatch Logs subscription filter 送出的 payload（解壓縮後）
///
/// 除了 `logEvents[].message` 之外沒有欄位會被轉換讀取，型別一律放寬，
/// 避免單一筆格式怪異的 envelope 中止整批處理
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Envelope {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message_type: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_group: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_stream: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub subscription_filters: Vec<serde_json::Value>,
    #[serde(default)]
    pub log_events: Vec<LogEvent>,
}

impl Envelope {
    /// 非字串的 messageType 視為 Unknown
    pub fn kind(&self) -> MessageType {
        MessageType::parse(self.message_type.as_ref().and_then(|v| v.as_str()))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LogEvent {
    #[serde(default)]
    pub id: serde_json::Value,
    #[serde(default)]
    pub timestamp: serde_json::Value,
    #[serde(default)]
    pub message: String,
}

/// 單一 access log 解析後的欄位，序列化順序即欄位宣告順序
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessLogEntry {
    pub ip: String,
    pub date: String,
    pub method: String,
    pub path: String,
    pub status: String,
    pub from: String,
    pub user_agent: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    Structured(serde_json::Value),
    Raw(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum TransformOutcome {
    Ok(Payload),
    Dropped,
    Failed,
}

/// 一次 invocation 的結果統計
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BatchSummary {
    pub input_records: usize,
    pub output_records: usize,
    pub ok: usize,
    pub dropped: usize,
    pub failed: usize,
}

impl BatchSummary {
    pub fn from_output(input_records: usize, output: &[OutputRecord]) -> Self {
        let mut summary = BatchSummary {
            input_records,
            output_records: output.len(),
            ..Default::default()
        };
        for record in output {
            match record.result {
                RecordResult::Ok => summary.ok += 1,
                RecordResult::Dropped => summary.dropped += 1,
                RecordResult::ProcessingFailed => summary.failed += 1,
            }
        }
        summary
    }
}
