// Application layer: concrete transforms and processor assembly.

pub mod transforms;

use crate::config::ProcessorConfig;
use crate::core::processor::BatchProcessor;
use crate::domain::ports::EventTransform;
use crate::utils::error::Result;
use crate::utils::validation::Validate;

pub type DynProcessor = BatchProcessor<Box<dyn EventTransform>>;

/// 依設定組出對應變體的 processor
pub fn build_processor(config: &ProcessorConfig) -> Result<DynProcessor> {
    config.validate()?;
    let transform = transforms::build_transform(config)?;
    tracing::debug!("Using {} transform", transform.name());
    Ok(BatchProcessor::new(transform).with_payload_logging(config.log_payloads))
}
