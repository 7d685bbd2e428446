use std::path::PathBuf;

use clap::Parser;

use crate::models::OutputFormat;

/// Print family, style, weight and width metadata of font files
#[derive(Parser, Debug)]
#[command(name = "fontdesc", version)]
pub struct Args {
    /// Font files to describe (.ttf, .otf, .ttc, .otc)
    pub fonts: Vec<PathBuf>,

    /// Read more font paths from FILE, one per line ('#' starts a comment line)
    #[arg(long, value_name = "FILE")]
    pub batch: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Enable debug output
    #[arg(long)]
    pub debug: bool,
}
