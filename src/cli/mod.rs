//! Command-line interface handling

mod args;
mod output;

pub use args::Args;
pub use output::render;
