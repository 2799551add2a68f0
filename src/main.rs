use chrono::Utc;
use clap::Parser;
use firehose_log_processors::config::cli::{CliConfig, Command, DecodeArgs, EncodeArgs, ProcessArgs};
use firehose_log_processors::core::codec;
use firehose_log_processors::domain::model::{Envelope, MessageType};
use firehose_log_processors::utils::logger;
use firehose_log_processors::{
    build_processor, FirehoseEvent, FirehoseResponse, InputRecord, LogEvent, Result,
};
use serde_json::Value;
use std::path::Path;
use tokio::io::AsyncReadExt;

#[tokio::main]
async fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let outcome = match &config.command {
        Command::Process(args) => process(args).await,
        Command::Encode(args) => encode(args).await,
        Command::Decode(args) => decode(args).await,
    };

    if let Err(e) = outcome {
        tracing::error!(
            "❌ Command failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());

        std::process::exit(e.severity().exit_code());
    }
}

async fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => Ok(tokio::fs::read_to_string(path).await?),
        None => {
            let mut buffer = String::new();
            tokio::io::stdin().read_to_string(&mut buffer).await?;
            Ok(buffer)
        }
    }
}

async fn process(args: &ProcessArgs) -> Result<()> {
    let config = args.resolve()?;
    let processor = build_processor(&config)?;
    tracing::info!("🚀 Running {} processor", config.variant);

    let input = read_input(args.input.as_deref()).await?;
    let event: FirehoseEvent = serde_json::from_str(&input)?;
    let response = processor.handle(event)?;

    let rendered = if args.pretty {
        serde_json::to_string_pretty(&response)?
    } else {
        serde_json::to_string(&response)?
    };
    println!("{}", rendered);
    Ok(())
}

async fn encode(args: &EncodeArgs) -> Result<()> {
    let input = read_input(args.input.as_deref()).await?;
    let now = Utc::now().timestamp_millis();

    let log_events = if args.control {
        Vec::new()
    } else {
        input
            .lines()
            .filter(|line| !line.trim().is_empty())
            .enumerate()
            .map(|(i, line)| LogEvent {
                id: Value::from(format!("{}{:06}", now, i)),
                timestamp: Value::from(now),
                message: line.to_string(),
            })
            .collect()
    };
    tracing::info!("Encoding {} log events", log_events.len());

    let message_type = if args.control {
        MessageType::CONTROL
    } else {
        MessageType::DATA
    };
    let envelope = Envelope {
        message_type: Some(Value::from(message_type)),
        owner: Some(Value::from("123456789012")),
        log_group: Some(Value::from(args.log_group.clone())),
        log_stream: Some(Value::from(args.log_stream.clone())),
        subscription_filters: vec![Value::from("subscription_filter_name")],
        log_events,
    };

    let event = FirehoseEvent {
        invocation_id: Some(format!("local-{}", now)),
        delivery_stream_arn: None,
        region: None,
        records: vec![InputRecord {
            record_id: args.record_id.clone(),
            data: codec::encode_envelope(&envelope)?,
            approximate_arrival_timestamp: Some(now),
        }],
    };
    println!("{}", serde_json::to_string_pretty(&event)?);
    Ok(())
}

async fn decode(args: &DecodeArgs) -> Result<()> {
    let input = read_input(args.input.as_deref()).await?;
    let response: FirehoseResponse = serde_json::from_str(&input)?;

    for record in &response.records {
        let data = match &record.data {
            Some(data) => codec::decode_payload(data)?,
            None => String::new(),
        };
        println!("{}\t{:?}\t{}", record.record_id, record.result, data);
    }

    if response.records.is_empty() {
        tracing::warn!("Response contains no records");
    }
    Ok(())
}
