use log::debug;
use ttf_parser::Face;

use crate::error::Result;

/// A parsed font file: one font program or an ordered collection of them
pub enum FontSource<'a> {
    /// A plain font file
    Single(Face<'a>),
    /// A `ttcf` collection, faces in offset-table order
    Collection(Vec<Face<'a>>),
}

impl<'a> FontSource<'a> {
    /// Parse font file bytes.
    ///
    /// TrueType/OpenType collections (`ttcf` header) become
    /// [`FontSource::Collection`] even when they hold a single font, with
    /// faces in offset-table order. Any face that fails to parse fails the
    /// whole file.
    pub fn parse(data: &'a [u8]) -> Result<Self> {
        match ttf_parser::fonts_in_collection(data) {
            Some(count) => {
                debug!("Font collection with {} faces", count);
                let faces = (0..count)
                    .map(|index| Face::parse(data, index))
                    .collect::<std::result::Result<Vec<_>, _>>()?;
                Ok(FontSource::Collection(faces))
            }
            None => Ok(FontSource::Single(Face::parse(data, 0)?)),
        }
    }

    /// Number of font programs in the file
    pub(crate) fn len(&self) -> usize {
        match self {
            FontSource::Single(_) => 1,
            FontSource::Collection(faces) => faces.len(),
        }
    }
}
