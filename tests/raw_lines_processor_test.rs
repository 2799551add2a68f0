mod common;

use anyhow::Result;
use common::*;
use firehose_log_processors::{build_processor, ProcessorConfig, ProcessorKind, RecordResult};

#[test]
fn test_messages_concatenated_with_crlf() -> Result<()> {
    let processor = build_processor(&ProcessorConfig::new(ProcessorKind::RawLines))?;
    let response = processor.handle(event(vec![data_record("r1", &["foo", "bar"])]))?;

    assert_eq!(response.records.len(), 1);
    let record = &response.records[0];
    assert_eq!(record.result, RecordResult::Ok);
    // 不做 JSON 包裝
    assert_eq!(decoded_text(record), "foo\r\nbar");
    Ok(())
}

#[test]
fn test_one_output_per_record_regardless_of_event_count() -> Result<()> {
    let processor = build_processor(&ProcessorConfig::new(ProcessorKind::RawLines))?;
    let response = processor.handle(event(vec![
        data_record("r1", &["a", "b", "c"]),
        data_record("r2", &[r#"{"json":"stays raw"}"#]),
    ]))?;

    assert_eq!(response.records.len(), 2);
    assert_eq!(decoded_text(&response.records[0]), "a\r\nb\r\nc");
    assert_eq!(decoded_text(&response.records[1]), r#"{"json":"stays raw"}"#);
    Ok(())
}

#[test]
fn test_configured_separator() -> Result<()> {
    let mut config = ProcessorConfig::new(ProcessorKind::RawLines);
    config.line_separator = "\n".to_string();
    let processor = build_processor(&config)?;

    let response = processor.handle(event(vec![data_record("r1", &["foo", "bar"])]))?;
    assert_eq!(decoded_text(&response.records[0]), "foo\nbar");
    Ok(())
}
