use std::fmt;
use std::path::PathBuf;

use crate::batch::read_batch_file;
use crate::cli::Args;
use crate::error::Result;

/// Configuration for a describe run
#[derive(Debug, Clone)]
pub struct Config {
    /// Enable debug output
    pub debug_mode: bool,
    /// How descriptors are printed
    pub output_format: OutputFormat,
    /// Font paths to describe, command-line paths first
    pub inputs: Vec<PathBuf>,
}

/// Output formats for the command-line tool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable blocks
    #[default]
    Text,
    /// A JSON array, one element per input path
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

impl Config {
    /// Create a configuration with default settings
    pub fn new(debug_mode: bool, output_format: OutputFormat) -> Self {
        Self {
            debug_mode,
            output_format,
            inputs: Vec::new(),
        }
    }

    /// Build the configuration from parsed command-line arguments,
    /// appending any paths listed in the batch file
    pub fn from_args(args: Args) -> Result<Self> {
        let mut config = Config::new(args.debug, args.format);
        config.inputs = args.fonts;
        if let Some(batch_file) = &args.batch {
            config.inputs.extend(read_batch_file(batch_file)?);
        }
        Ok(config)
    }
}
