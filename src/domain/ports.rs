use crate::domain::model::{LogEvent, TransformOutcome};
use crate::utils::error::Result;

/// 針對單一 DATA_MESSAGE 的 logEvents 做轉換；每種 processor 變體實作一次
pub trait EventTransform: Send + Sync {
    fn name(&self) -> &'static str;

    fn transform(&self, events: &[LogEvent]) -> Result<Vec<TransformOutcome>>;
}

impl<T: EventTransform + ?Sized> EventTransform for Box<T> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn transform(&self, events: &[LogEvent]) -> Result<Vec<TransformOutcome>> {
        (**self).transform(events)
    }
}
