pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::app::{build_processor, DynProcessor};
pub use crate::config::{ProcessorConfig, ProcessorKind};
pub use crate::core::processor::BatchProcessor;
pub use crate::domain::model::{
    BatchSummary, Envelope, FirehoseEvent, FirehoseResponse, InputRecord, LogEvent, OutputRecord,
    RecordResult,
};
pub use crate::domain::ports::EventTransform;
pub use crate::utils::error::{ProcessorError, Result};
