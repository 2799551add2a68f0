// Domain layer: Firehose / CloudWatch Logs models and the transform port.

pub mod model;
pub mod ports;
