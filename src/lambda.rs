#[cfg(feature = "lambda")]
use firehose_log_processors::config::lambda::LambdaConfig;
#[cfg(feature = "lambda")]
use firehose_log_processors::utils::{logger, validation::Validate};
#[cfg(feature = "lambda")]
use firehose_log_processors::{build_processor, FirehoseEvent, FirehoseResponse};
#[cfg(feature = "lambda")]
use lambda_runtime::{run, service_fn, Error, LambdaEvent};

#[cfg(feature = "lambda")]
async fn function_handler(
    config: &LambdaConfig,
    event: LambdaEvent<FirehoseEvent>,
) -> Result<FirehoseResponse, Error> {
    tracing::info!(
        "Firehose transformation request {} ({} records)",
        event.context.request_id,
        event.payload.records.len()
    );

    // 每次 invocation 建立新的 processor，不共用狀態
    let processor = build_processor(&config.processor)
        .map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>)?;

    let response = processor.handle(event.payload).map_err(|e| {
        tracing::error!("❌ Batch aborted: {} ({})", e, e.recovery_suggestion());
        Box::new(e) as Box<dyn std::error::Error + Send + Sync>
    })?;

    tracing::info!("Returning {} records", response.records.len());
    Ok(response)
}

#[cfg(feature = "lambda")]
#[tokio::main]
async fn main() -> Result<(), Error> {
    logger::init_lambda_logger();

    let config = LambdaConfig::from_env()
        .map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>)?;
    config
        .validate()
        .map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>)?;
    tracing::info!("Starting Firehose {} processor", config.processor.variant);

    let config = &config;
    run(service_fn(move |event: LambdaEvent<FirehoseEvent>| async move {
        function_handler(config, event).await
    }))
    .await
}
