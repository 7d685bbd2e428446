//! Font opening and descriptor extraction

pub mod descriptor;
pub mod os2;
pub mod program;
pub mod source;

pub use descriptor::{create_from_path, describe_bytes};
pub use os2::{Os2Fields, Os2Metrics, DEFAULT_WEIGHT, DEFAULT_WIDTH};
pub use program::{FontProgram, NameValue};
pub use source::FontSource;
