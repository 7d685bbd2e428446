//! Minimal sfnt writer for building test fonts in memory.
//!
//! Produces just the tables ttf-parser needs to open a face (`head`, `hhea`,
//! `maxp`) plus optional `name`, `OS/2` and `post` tables.

#![allow(dead_code)]

use std::io::Write;
use std::path::PathBuf;

use tempfile::TempDir;

pub const WINDOWS: u16 = 3;
pub const WINDOWS_UNICODE_BMP: u16 = 1;
pub const WINDOWS_BIG5: u16 = 4;
pub const ENGLISH_US: u16 = 0x0409;

pub const NAME_FAMILY: u16 = 1;
pub const NAME_SUBFAMILY: u16 = 2;
pub const NAME_POSTSCRIPT: u16 = 6;

#[derive(Clone)]
pub struct NameRecord {
    pub platform_id: u16,
    pub encoding_id: u16,
    pub language_id: u16,
    pub name_id: u16,
    pub bytes: Vec<u8>,
}

#[derive(Clone, Copy)]
pub struct Os2 {
    pub weight_class: u16,
    pub width_class: u16,
    pub fs_selection: u16,
}

#[derive(Clone, Default)]
pub struct TestFont {
    pub names: Vec<NameRecord>,
    pub os2: Option<Os2>,
    /// Truncate the OS/2 table to this many bytes
    pub os2_len: Option<usize>,
    /// `isFixedPitch`; `None` leaves out the `post` table
    pub fixed_pitch: Option<u32>,
}

impl TestFont {
    /// A font with English Windows names and an OS/2 table
    pub fn new(family: &str, style: &str, postscript: &str) -> Self {
        TestFont::default()
            .with_name(NAME_FAMILY, family)
            .with_name(NAME_SUBFAMILY, style)
            .with_name(NAME_POSTSCRIPT, postscript)
            .with_os2(400, 5, 0)
            .with_fixed_pitch(0)
    }

    pub fn with_name(mut self, name_id: u16, text: &str) -> Self {
        self.names.push(NameRecord {
            platform_id: WINDOWS,
            encoding_id: WINDOWS_UNICODE_BMP,
            language_id: ENGLISH_US,
            name_id,
            bytes: text.encode_utf16().flat_map(|u| u.to_be_bytes()).collect(),
        });
        self
    }

    /// A record in an encoding ttf-parser does not decode
    pub fn with_raw_name(mut self, name_id: u16, bytes: &[u8]) -> Self {
        self.names.push(NameRecord {
            platform_id: WINDOWS,
            encoding_id: WINDOWS_BIG5,
            language_id: ENGLISH_US,
            name_id,
            bytes: bytes.to_vec(),
        });
        self
    }

    pub fn with_os2(mut self, weight_class: u16, width_class: u16, fs_selection: u16) -> Self {
        self.os2 = Some(Os2 {
            weight_class,
            width_class,
            fs_selection,
        });
        self
    }

    /// Cut the OS/2 table short, like the 68-byte version 0 tables of
    /// older Apple fonts
    pub fn with_os2_len(mut self, len: usize) -> Self {
        self.os2_len = Some(len);
        self
    }

    pub fn without_os2(mut self) -> Self {
        self.os2 = None;
        self
    }

    pub fn with_fixed_pitch(mut self, value: u32) -> Self {
        self.fixed_pitch = Some(value);
        self
    }

    pub fn without_post(mut self) -> Self {
        self.fixed_pitch = None;
        self
    }

    pub fn build(&self) -> Vec<u8> {
        self.build_at(0)
    }

    /// Build the font with table offsets relative to `base`, for placing
    /// it inside a collection.
    pub fn build_at(&self, base: usize) -> Vec<u8> {
        let mut tables: Vec<([u8; 4], Vec<u8>)> = vec![
            (*b"head", head_table()),
            (*b"hhea", hhea_table()),
            (*b"maxp", maxp_table()),
        ];
        if !self.names.is_empty() {
            tables.push((*b"name", name_table(&self.names)));
        }
        if let Some(os2) = self.os2 {
            let mut table = os2_table(os2);
            if let Some(len) = self.os2_len {
                table.truncate(len);
            }
            tables.push((*b"OS/2", table));
        }
        if let Some(fixed_pitch) = self.fixed_pitch {
            tables.push((*b"post", post_table(fixed_pitch)));
        }
        tables.sort_by(|a, b| a.0.cmp(&b.0));

        let header_len = 12 + 16 * tables.len();
        let mut out = Vec::new();
        out.extend_from_slice(&0x0001_0000u32.to_be_bytes());
        out.extend_from_slice(&(tables.len() as u16).to_be_bytes());
        out.extend_from_slice(&[0; 6]);

        let mut offset = header_len;
        for (tag, data) in &tables {
            out.extend_from_slice(tag);
            out.extend_from_slice(&0u32.to_be_bytes());
            out.extend_from_slice(&((base + offset) as u32).to_be_bytes());
            out.extend_from_slice(&(data.len() as u32).to_be_bytes());
            offset += padded_len(data.len());
        }
        for (_, data) in &tables {
            out.extend_from_slice(data);
            out.resize(out.len() + padded_len(data.len()) - data.len(), 0);
        }
        out
    }
}

/// Pack fonts into a TrueType collection
pub fn collection(fonts: &[TestFont]) -> Vec<u8> {
    let header_len = 12 + 4 * fonts.len();
    let mut header = Vec::new();
    header.extend_from_slice(b"ttcf");
    header.extend_from_slice(&0x0001_0000u32.to_be_bytes());
    header.extend_from_slice(&(fonts.len() as u32).to_be_bytes());

    let mut body = Vec::new();
    for font in fonts {
        let base = header_len + body.len();
        header.extend_from_slice(&(base as u32).to_be_bytes());
        body.extend(font.build_at(base));
    }
    header.extend(body);
    header
}

/// Write `data` into a fresh temp dir as `file_name`
pub fn write_font(file_name: &str, data: &[u8]) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join(file_name);
    let mut file = std::fs::File::create(&path).expect("create font file");
    file.write_all(data).expect("write font file");
    (dir, path)
}

fn padded_len(len: usize) -> usize {
    (len + 3) & !3
}

fn head_table() -> Vec<u8> {
    let mut t = Vec::new();
    t.extend_from_slice(&0x0001_0000u32.to_be_bytes()); // version
    t.extend_from_slice(&0x0001_0000u32.to_be_bytes()); // fontRevision
    t.extend_from_slice(&0u32.to_be_bytes()); // checkSumAdjustment
    t.extend_from_slice(&0x5F0F_3CF5u32.to_be_bytes()); // magicNumber
    t.extend_from_slice(&0u16.to_be_bytes()); // flags
    t.extend_from_slice(&1000u16.to_be_bytes()); // unitsPerEm
    t.extend_from_slice(&[0; 16]); // created, modified
    t.extend_from_slice(&[0; 8]); // xMin, yMin, xMax, yMax
    t.extend_from_slice(&0u16.to_be_bytes()); // macStyle
    t.extend_from_slice(&8u16.to_be_bytes()); // lowestRecPPEM
    t.extend_from_slice(&2i16.to_be_bytes()); // fontDirectionHint
    t.extend_from_slice(&0i16.to_be_bytes()); // indexToLocFormat
    t.extend_from_slice(&0i16.to_be_bytes()); // glyphDataFormat
    assert_eq!(t.len(), 54);
    t
}

fn hhea_table() -> Vec<u8> {
    let mut t = Vec::new();
    t.extend_from_slice(&0x0001_0000u32.to_be_bytes()); // version
    t.extend_from_slice(&800i16.to_be_bytes()); // ascender
    t.extend_from_slice(&(-200i16).to_be_bytes()); // descender
    t.extend_from_slice(&0i16.to_be_bytes()); // lineGap
    t.extend_from_slice(&500u16.to_be_bytes()); // advanceWidthMax
    t.extend_from_slice(&[0; 6]); // minLeftSideBearing, minRightSideBearing, xMaxExtent
    t.extend_from_slice(&1i16.to_be_bytes()); // caretSlopeRise
    t.extend_from_slice(&0i16.to_be_bytes()); // caretSlopeRun
    t.extend_from_slice(&0i16.to_be_bytes()); // caretOffset
    t.extend_from_slice(&[0; 8]); // reserved
    t.extend_from_slice(&0i16.to_be_bytes()); // metricDataFormat
    t.extend_from_slice(&1u16.to_be_bytes()); // numberOfHMetrics
    assert_eq!(t.len(), 36);
    t
}

fn maxp_table() -> Vec<u8> {
    let mut t = Vec::new();
    t.extend_from_slice(&0x0000_5000u32.to_be_bytes());
    t.extend_from_slice(&1u16.to_be_bytes()); // numGlyphs
    t
}

fn name_table(records: &[NameRecord]) -> Vec<u8> {
    let storage_offset = 6 + 12 * records.len();
    let mut t = Vec::new();
    t.extend_from_slice(&0u16.to_be_bytes()); // format
    t.extend_from_slice(&(records.len() as u16).to_be_bytes());
    t.extend_from_slice(&(storage_offset as u16).to_be_bytes());

    let mut storage = Vec::new();
    for record in records {
        t.extend_from_slice(&record.platform_id.to_be_bytes());
        t.extend_from_slice(&record.encoding_id.to_be_bytes());
        t.extend_from_slice(&record.language_id.to_be_bytes());
        t.extend_from_slice(&record.name_id.to_be_bytes());
        t.extend_from_slice(&(record.bytes.len() as u16).to_be_bytes());
        t.extend_from_slice(&(storage.len() as u16).to_be_bytes());
        storage.extend_from_slice(&record.bytes);
    }
    t.extend(storage);
    t
}

fn os2_table(os2: Os2) -> Vec<u8> {
    // version 0 layout, 78 bytes
    let mut t = vec![0u8; 78];
    t[4..6].copy_from_slice(&os2.weight_class.to_be_bytes());
    t[6..8].copy_from_slice(&os2.width_class.to_be_bytes());
    t[62..64].copy_from_slice(&os2.fs_selection.to_be_bytes());
    t
}

fn post_table(fixed_pitch: u32) -> Vec<u8> {
    let mut t = vec![0u8; 32];
    t[0..4].copy_from_slice(&0x0003_0000u32.to_be_bytes()); // version 3.0
    t[12..16].copy_from_slice(&fixed_pitch.to_be_bytes());
    t
}
