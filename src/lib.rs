//! Extract family, style, weight and width metadata from font files.
//!
//! Parsing is done by [`ttf_parser`]; this crate resolves the path, opens
//! the file and normalizes the fields into a [`FontDescriptor`].
//!
//! ```no_run
//! use fontdesc::Extracted;
//!
//! match fontdesc::create_from_path("fonts/NotoSansCJK.ttc")? {
//!     Extracted::Single(font) => println!("{} {}", font.family, font.style),
//!     Extracted::Collection(fonts) => {
//!         for font in fonts {
//!             println!("{} {}", font.family, font.style);
//!         }
//!     }
//! }
//! # Ok::<(), fontdesc::Error>(())
//! ```

pub mod batch;
pub mod cli;
pub mod error;
pub mod font;
pub mod models;
pub mod utils;

pub use error::{Error, Result};
pub use font::{create_from_path, describe_bytes, FontProgram, FontSource, NameValue, Os2Fields};
pub use models::{Extracted, FontDescriptor};
pub use utils::{normalize_name, resolve_font_path};
