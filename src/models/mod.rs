//! Data types shared across the crate

pub mod config;
pub mod font;

pub use config::{Config, OutputFormat};
pub use font::{Extracted, FontDescriptor};
