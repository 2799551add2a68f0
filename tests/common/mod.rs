#![allow(dead_code)]

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use flate2::write::GzEncoder;
use flate2::Compression;
use firehose_log_processors::{FirehoseEvent, InputRecord, OutputRecord};
use serde_json::json;
use std::io::Write;

pub const HEALTH_CHECK_LINE: &str = r#"127.0.0.1 - - [30/Jul/2006:24:59:59 +0000] "GET / HTTP/1.1" 200 195 "-" "ELB-HealthChecker/2.0""#;

/// 與 CloudWatch Logs subscription filter 相同的 gzip + base64 編碼
pub fn gzip_base64(text: &str) -> String {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(text.as_bytes()).unwrap();
    STANDARD.encode(encoder.finish().unwrap())
}

pub fn data_record(record_id: &str, messages: &[&str]) -> InputRecord {
    let log_events: Vec<_> = messages
        .iter()
        .enumerate()
        .map(|(i, message)| {
            json!({
                "id": format!("3434740106315218782358809144794143239558233763893700198{}", i),
                "timestamp": 1540190731627i64,
                "message": message,
            })
        })
        .collect();
    let envelope = json!({
        "messageType": "DATA_MESSAGE",
        "owner": "123456789012",
        "logGroup": "log_group_name",
        "logStream": "log_stream_name",
        "subscriptionFilters": ["subscription_filter_name"],
        "logEvents": log_events,
    });
    raw_record(record_id, &envelope.to_string())
}

pub fn control_record(record_id: &str) -> InputRecord {
    let envelope = json!({
        "messageType": "CONTROL_MESSAGE",
        "owner": "CloudwatchLogs",
        "logGroup": "",
        "logStream": "",
        "subscriptionFilters": [],
        "logEvents": [{
            "id": "",
            "timestamp": 1540190731627i64,
            "message": "CWL CONTROL MESSAGE: Checking health of destination Firehose.",
        }],
    });
    raw_record(record_id, &envelope.to_string())
}

pub fn raw_record(record_id: &str, envelope_json: &str) -> InputRecord {
    InputRecord {
        record_id: record_id.to_string(),
        data: gzip_base64(envelope_json),
        approximate_arrival_timestamp: Some(1540190731627),
    }
}

pub fn event(records: Vec<InputRecord>) -> FirehoseEvent {
    FirehoseEvent {
        invocation_id: Some("invocationIdExample".to_string()),
        delivery_stream_arn: Some("arn:aws:kinesis:EXAMPLE".to_string()),
        region: Some("us-east-1".to_string()),
        records,
    }
}

pub fn decoded_text(record: &OutputRecord) -> String {
    let data = record.data.as_ref().expect("Ok record carries data");
    String::from_utf8(STANDARD.decode(data).unwrap()).unwrap()
}

pub fn decoded_json(record: &OutputRecord) -> serde_json::Value {
    serde_json::from_str(&decoded_text(record)).unwrap()
}
