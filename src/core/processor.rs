use crate::core::codec;
use crate::domain::model::{
    BatchSummary, FirehoseEvent, FirehoseResponse, InputRecord, MessageType, OutputRecord,
    TransformOutcome,
};
use crate::domain::ports::EventTransform;
use crate::utils::error::Result;

/// 將一批 Firehose record 逐筆解碼、轉換、重新編碼
pub struct BatchProcessor<T: EventTransform> {
    transform: T,
    log_payloads: bool,
}

impl<T: EventTransform> BatchProcessor<T> {
    pub fn new(transform: T) -> Self {
        Self {
            transform,
            log_payloads: false,
        }
    }

    pub fn with_payload_logging(mut self, enabled: bool) -> Self {
        self.log_payloads = enabled;
        self
    }

    pub fn transform_name(&self) -> &'static str {
        self.transform.name()
    }

    pub fn handle(&self, event: FirehoseEvent) -> Result<FirehoseResponse> {
        if let Some(invocation_id) = &event.invocation_id {
            tracing::debug!("Invocation id: {}", invocation_id);
        }
        let records = self.process(&event.records)?;
        Ok(FirehoseResponse { records })
    }

    /// 任何一筆 record 外層解碼失敗都會中止整批處理
    pub fn process(&self, records: &[InputRecord]) -> Result<Vec<OutputRecord>> {
        tracing::info!(
            "Start Kinesis Firehose data transformation ({}): {} records",
            self.transform.name(),
            records.len()
        );

        let mut output = Vec::with_capacity(records.len());
        for record in records {
            self.process_record(record, &mut output)?;
        }

        let summary = BatchSummary::from_output(records.len(), &output);
        tracing::info!(
            "Transformation finished: {} in / {} out (ok={}, dropped={}, failed={})",
            summary.input_records,
            summary.output_records,
            summary.ok,
            summary.dropped,
            summary.failed
        );

        Ok(output)
    }

    fn process_record(&self, record: &InputRecord, output: &mut Vec<OutputRecord>) -> Result<()> {
        let envelope = codec::decode_envelope(&record.data)?;
        if self.log_payloads {
            tracing::info!("Payload to be transformed: {:?}", envelope);
        }

        match envelope.kind() {
            MessageType::ControlMessage => {
                tracing::debug!("Record {} is a control message, dropping", record.record_id);
                output.push(OutputRecord::dropped(&record.record_id));
            }
            MessageType::DataMessage => {
                let outcomes = self.transform.transform(&envelope.log_events)?;
                if outcomes.is_empty() {
                    // 每筆輸入至少要有一筆輸出
                    tracing::debug!("Record {} has no log events, dropping", record.record_id);
                    output.push(OutputRecord::dropped(&record.record_id));
                    return Ok(());
                }

                for outcome in outcomes {
                    let output_record = match outcome {
                        TransformOutcome::Ok(payload) => {
                            if self.log_payloads {
                                tracing::info!("Payload after transformation: {:?}", payload);
                            }
                            OutputRecord::ok(&record.record_id, codec::encode_payload(&payload)?)
                        }
                        TransformOutcome::Dropped => OutputRecord::dropped(&record.record_id),
                        TransformOutcome::Failed => OutputRecord::failed(&record.record_id),
                    };
                    output.push(output_record);
                }
            }
            MessageType::Unknown => {
                tracing::warn!(
                    "Record {} has unrecognized messageType {:?}",
                    record.record_id,
                    envelope.message_type
                );
                output.push(OutputRecord::failed(&record.record_id));
            }
        }

        Ok(())
    }
}
