use ttf_parser::{Face, Tag};

/// Width class used when a font has no OS/2 table
pub const DEFAULT_WIDTH: u16 = 500;
/// Weight class used when a font has no OS/2 table
pub const DEFAULT_WEIGHT: u16 = 3;

const OS2_TAG: Tag = Tag::from_bytes(b"OS/2");
const WEIGHT_CLASS_OFFSET: usize = 4;
const WIDTH_CLASS_OFFSET: usize = 6;
const SELECTION_OFFSET: usize = 62;
const SELECTION_ITALIC: u16 = 0x0001;

/// The OS/2 table fields a descriptor carries over
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Os2Fields {
    /// `usWidthClass`, unvalidated
    pub width_class: u16,
    /// `usWeightClass`, unvalidated
    pub weight_class: u16,
    /// `fsSelection` bit 0
    pub italic: bool,
}

/// Width, weight and italic after defaults are applied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Os2Metrics {
    /// Width class, [`DEFAULT_WIDTH`] without an OS/2 table
    pub width: u16,
    /// Weight class, [`DEFAULT_WEIGHT`] without an OS/2 table
    pub weight: u16,
    /// Italic selection bit, `false` without an OS/2 table
    pub italic: bool,
}

impl Default for Os2Metrics {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            weight: DEFAULT_WEIGHT,
            italic: false,
        }
    }
}

impl Os2Fields {
    /// Read the fields from a face, `None` if it has no OS/2 table.
    ///
    /// The table is read from its raw bytes: ttf-parser folds unknown width
    /// classes into `Normal` and drops version 0 tables shorter than 78
    /// bytes, while every field used here sits in the first 64.
    pub fn from_face(face: &Face<'_>) -> Option<Self> {
        face.raw_face()
            .table(OS2_TAG)
            .and_then(Self::from_table_data)
    }

    /// Parse the fields from raw OS/2 table bytes, `None` if the table is
    /// too short to hold `fsSelection`
    pub fn from_table_data(data: &[u8]) -> Option<Self> {
        let fs_selection = read_u16(data, SELECTION_OFFSET)?;
        Some(Self {
            width_class: read_u16(data, WIDTH_CLASS_OFFSET)?,
            weight_class: read_u16(data, WEIGHT_CLASS_OFFSET)?,
            italic: fs_selection & SELECTION_ITALIC != 0,
        })
    }

    /// Collapse an optional table into concrete metrics
    pub fn apply_defaults(fields: Option<Self>) -> Os2Metrics {
        match fields {
            Some(fields) => Os2Metrics {
                width: fields.width_class,
                weight: fields.weight_class,
                italic: fields.italic,
            },
            None => Os2Metrics::default(),
        }
    }
}

fn read_u16(data: &[u8], offset: usize) -> Option<u16> {
    data.get(offset..offset + 2)
        .map(|bytes| u16::from_be_bytes([bytes[0], bytes[1]]))
}
