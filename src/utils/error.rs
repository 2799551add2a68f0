use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProcessorError {
    #[error("Base64 decode failed: {0}")]
    Base64Error(#[from] base64::DecodeError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Gzip decompression failed: {0}")]
    DecompressError(std::io::Error),

    #[error("Payload is not valid UTF-8: {0}")]
    Utf8Error(#[from] std::string::FromUtf8Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Decoding,
    Io,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    /// CLI 結束碼：2 可重試、1 處理失敗、3 設定錯誤
    pub fn exit_code(&self) -> i32 {
        match self {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

impl ProcessorError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ProcessorError::Base64Error(_)
            | ProcessorError::DecompressError(_)
            | ProcessorError::Utf8Error(_)
            | ProcessorError::SerializationError(_) => ErrorCategory::Decoding,
            ProcessorError::IoError(_) => ErrorCategory::Io,
            ProcessorError::ConfigError { .. }
            | ProcessorError::InvalidConfigValueError { .. }
            | ProcessorError::MissingConfigError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            // 整批資料被中止，Firehose 會重送
            ErrorCategory::Decoding => ErrorSeverity::High,
            ErrorCategory::Io => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ProcessorError::Base64Error(_) => {
                "Check that every record's data field is standard base64"
            }
            ProcessorError::DecompressError(_) => {
                "Records must be gzip-compressed CloudWatch Logs subscription payloads"
            }
            ProcessorError::Utf8Error(_) => "Ensure the decompressed payload is UTF-8 text",
            ProcessorError::SerializationError(_) => {
                "Verify the JSON structure of the event or payload"
            }
            ProcessorError::IoError(_) => "Check that the input file exists and is readable",
            ProcessorError::ConfigError { .. }
            | ProcessorError::InvalidConfigValueError { .. }
            | ProcessorError::MissingConfigError { .. } => {
                "Review the configuration file or environment variables"
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Decoding => format!("Could not decode the Firehose batch: {}", self),
            ErrorCategory::Io => format!("Could not read input: {}", self),
            ErrorCategory::Configuration => format!("Invalid configuration: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, ProcessorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configuration_errors_are_critical() {
        let err = ProcessorError::MissingConfigError {
            field: "PROCESSOR_VARIANT".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert_eq!(err.severity(), ErrorSeverity::Critical);
        assert!(err.user_friendly_message().contains("PROCESSOR_VARIANT"));
    }

    #[test]
    fn test_every_error_exits_non_zero() {
        let errors = [
            ProcessorError::IoError(std::io::Error::other("missing")),
            ProcessorError::ConfigError {
                message: "bad".to_string(),
            },
            ProcessorError::DecompressError(std::io::Error::other("corrupt")),
        ];
        let codes: Vec<i32> = errors.iter().map(|e| e.severity().exit_code()).collect();
        assert_eq!(codes, vec![2, 3, 1]);
    }

    #[test]
    fn test_decode_errors_are_high_severity() {
        let err: ProcessorError = serde_json::from_str::<serde_json::Value>("{")
            .unwrap_err()
            .into();
        assert_eq!(err.category(), ErrorCategory::Decoding);
        assert_eq!(err.severity(), ErrorSeverity::High);
    }
}
