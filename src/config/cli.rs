use crate::config::toml_config::TomlConfig;
use crate::config::{unescape_separator, ProcessorConfig, ProcessorKind};
use crate::utils::error::{ProcessorError, Result};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "firehose-processor")]
#[command(about = "Run Kinesis Firehose log transformations locally")]
pub struct CliConfig {
    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Transform a Firehose event (JSON) and print the response
    Process(ProcessArgs),
    /// Build a Firehose test event from raw log lines, one per line
    Encode(EncodeArgs),
    /// Print the decoded data of every record in a Firehose response
    Decode(DecodeArgs),
}

#[derive(Debug, Clone, Args)]
pub struct ProcessArgs {
    /// Processor variant; overrides the config file
    #[arg(long, value_enum)]
    pub variant: Option<ProcessorKind>,

    /// TOML configuration file with a [processor] table
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Firehose event file; reads stdin when omitted
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    #[arg(long)]
    pub health_check_marker: Option<String>,

    /// Separator for raw-lines, escape sequences such as \r\n are accepted
    #[arg(long)]
    pub line_separator: Option<String>,

    #[arg(long, help = "Log decoded payloads")]
    pub log_payloads: bool,

    #[arg(long, help = "Pretty-print the response")]
    pub pretty: bool,
}

#[derive(Debug, Clone, Args)]
pub struct EncodeArgs {
    /// Text file with one log message per line; reads stdin when omitted
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    #[arg(long, default_value = "49546986683135544286507457936321625675700192471156785154")]
    pub record_id: String,

    #[arg(long, default_value = "log_group_name")]
    pub log_group: String,

    #[arg(long, default_value = "log_stream_name")]
    pub log_stream: String,

    #[arg(long, help = "Emit a CONTROL_MESSAGE instead of a DATA_MESSAGE")]
    pub control: bool,
}

#[derive(Debug, Clone, Args)]
pub struct DecodeArgs {
    /// Firehose response file; reads stdin when omitted
    #[arg(short, long)]
    pub input: Option<PathBuf>,
}

impl ProcessArgs {
    /// 設定檔為基礎，再套用命令列參數
    pub fn resolve(&self) -> Result<ProcessorConfig> {
        let mut config = match &self.config {
            Some(path) => {
                let mut config = TomlConfig::from_file(path)?.into_processor_config();
                if let Some(variant) = self.variant {
                    config.variant = variant;
                }
                config
            }
            None => {
                let variant = self.variant.ok_or_else(|| ProcessorError::MissingConfigError {
                    field: "--variant (or --config)".to_string(),
                })?;
                ProcessorConfig::new(variant)
            }
        };

        if let Some(marker) = &self.health_check_marker {
            config.health_check_marker = marker.clone();
        }
        if let Some(separator) = &self.line_separator {
            config.line_separator = unescape_separator(separator);
        }
        if self.log_payloads {
            config.log_payloads = true;
        }

        Ok(config)
    }
}
