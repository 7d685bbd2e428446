use std::fs;
use std::path::Path;

use log::debug;

use super::os2::Os2Fields;
use super::program::FontProgram;
use super::source::FontSource;
use crate::error::Result;
use crate::models::{Extracted, FontDescriptor};
use crate::utils::{normalize_name, resolve_font_path};

const DEFAULT_STYLE: &str = "Regular";

/// Describe the font file at `path`.
///
/// Relative paths are resolved against the current directory. A
/// collection file yields [`Extracted::Collection`] with one descriptor per
/// font in file order; any other font yields [`Extracted::Single`].
pub fn create_from_path(path: impl AsRef<Path>) -> Result<Extracted> {
    let resolved = resolve_font_path(path)?;
    debug!("Extracting metadata from: {}", resolved.display());
    let data = fs::read(&resolved)?;
    describe_bytes(&resolved, &data)
}

/// Describe font bytes already read from `path`.
///
/// `path` is stored as given; callers are expected to pass an absolute path.
pub fn describe_bytes(path: &Path, data: &[u8]) -> Result<Extracted> {
    // resolve_font_path only lets Unicode paths through
    let path = path.to_string_lossy();
    let source = FontSource::parse(data)?;
    debug!("Found {} font(s) in {}", source.len(), path);
    let extracted = match source {
        FontSource::Single(face) => Extracted::Single(FontDescriptor::from_program(&face, &path)),
        FontSource::Collection(faces) => Extracted::Collection(
            faces
                .iter()
                .map(|face| FontDescriptor::from_program(face, &path))
                .collect(),
        ),
    };
    Ok(extracted)
}

impl FontDescriptor {
    /// Describe the font file at `path`; see [`create_from_path`]
    pub fn create_from_path(path: impl AsRef<Path>) -> Result<Extracted> {
        create_from_path(path)
    }

    /// Build a descriptor from one parsed font program
    pub fn from_program<P: FontProgram + ?Sized>(program: &P, path: &str) -> Self {
        let os2 = Os2Fields::apply_defaults(program.os2());
        let descriptor = FontDescriptor {
            path: path.to_string(),
            family: program.family_name().map(normalize_name).unwrap_or_default(),
            postscript_name: program
                .postscript_name()
                .map(normalize_name)
                .unwrap_or_default(),
            style: program
                .subfamily_name()
                .map(normalize_name)
                .unwrap_or_else(|| DEFAULT_STYLE.to_string()),
            width: os2.width,
            weight: os2.weight,
            italic: os2.italic,
            monospace: program.fixed_pitch() != Some(false),
        };

        debug!(
            "Metadata extracted - Family: {}, Style: {}, Weight: {}, Width: {}, Italic: {}, Monospace: {}",
            descriptor.family,
            descriptor.style,
            descriptor.weight,
            descriptor.width,
            descriptor.italic,
            descriptor.monospace
        );
        descriptor
    }
}
