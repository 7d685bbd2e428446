use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while describing font files
#[derive(Debug, Error)]
pub enum Error {
    /// The path argument is not usable as text
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    /// Nothing exists at the resolved path
    #[error("{} does not exist", .0.display())]
    NotFound(PathBuf),
    /// Reading the font file failed
    #[error(transparent)]
    Io(#[from] io::Error),
    /// The font parser rejected the file
    #[error(transparent)]
    Parse(#[from] ttf_parser::FaceParsingError),
    /// A batch file could not be used
    #[error("Batch processing error: {0}")]
    Batch(String),
}

/// Result type alias for fontdesc operations
pub type Result<T> = std::result::Result<T, Error>;
