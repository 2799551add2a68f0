pub mod apache_log;
pub mod json_message;
pub mod raw_lines;

use crate::config::{ProcessorConfig, ProcessorKind};
use crate::domain::ports::EventTransform;
use crate::utils::error::Result;
use apache_log::ApacheLogTransform;
use json_message::JsonMessageTransform;
use raw_lines::RawLinesTransform;

pub fn build_transform(config: &ProcessorConfig) -> Result<Box<dyn EventTransform>> {
    let transform: Box<dyn EventTransform> = match config.variant {
        ProcessorKind::ApacheLog => {
            Box::new(ApacheLogTransform::new(config.health_check_marker.clone())?)
        }
        ProcessorKind::JsonMessage => Box::new(JsonMessageTransform::new()),
        ProcessorKind::RawLines => Box::new(RawLinesTransform::new(config.line_separator.clone())),
    };
    Ok(transform)
}
