use std::fmt;

use serde::Serialize;

/// Metadata describing one font program
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FontDescriptor {
    /// Absolute path of the file the font came from
    pub path: String,
    /// Family name
    pub family: String,
    /// PostScript name
    pub postscript_name: String,
    /// Subfamily (style) name
    pub style: String,
    /// OS/2 width class
    pub width: u16,
    /// OS/2 weight class
    pub weight: u16,
    /// Whether the font is italic
    pub italic: bool,
    /// Whether the font is fixed pitch
    pub monospace: bool,
}

/// Result of describing a font file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Extracted {
    /// The file holds one font
    Single(FontDescriptor),
    /// The file is a collection; one descriptor per font, in file order
    Collection(Vec<FontDescriptor>),
}

impl Extracted {
    /// Number of descriptors, 1 for a single font
    pub fn len(&self) -> usize {
        self.descriptors().len()
    }

    /// Only true for a collection with no fonts
    pub fn is_empty(&self) -> bool {
        self.descriptors().is_empty()
    }

    /// Whether the file was a font collection
    pub fn is_collection(&self) -> bool {
        matches!(self, Extracted::Collection(_))
    }

    /// View every descriptor as a slice, whatever the file shape
    pub fn descriptors(&self) -> &[FontDescriptor] {
        match self {
            Extracted::Single(descriptor) => std::slice::from_ref(descriptor),
            Extracted::Collection(descriptors) => descriptors,
        }
    }

    /// Take the descriptors out, a single font as a one-element vector
    pub fn into_vec(self) -> Vec<FontDescriptor> {
        match self {
            Extracted::Single(descriptor) => vec![descriptor],
            Extracted::Collection(descriptors) => descriptors,
        }
    }
}

impl IntoIterator for Extracted {
    type Item = FontDescriptor;
    type IntoIter = std::vec::IntoIter<FontDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_vec().into_iter()
    }
}

impl fmt::Display for FontDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "path:           {}", self.path)?;
        writeln!(f, "family:         {}", self.family)?;
        writeln!(f, "postscriptName: {}", self.postscript_name)?;
        writeln!(f, "style:          {}", self.style)?;
        writeln!(f, "width:          {}", self.width)?;
        writeln!(f, "weight:         {}", self.weight)?;
        writeln!(f, "italic:         {}", self.italic)?;
        write!(f, "monospace:      {}", self.monospace)
    }
}
