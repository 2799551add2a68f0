pub mod codec;
pub mod processor;

pub use crate::domain::model::{
    Envelope, FirehoseEvent, FirehoseResponse, InputRecord, LogEvent, OutputRecord, RecordResult,
};
pub use crate::domain::ports::EventTransform;
pub use crate::utils::error::Result;
