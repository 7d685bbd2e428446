use ttf_parser::name::Name;
use ttf_parser::{name_id, Face, PlatformId};

use super::os2::Os2Fields;

const WINDOWS_ENGLISH_US: u16 = 0x0409;
const MACINTOSH_ENGLISH: u16 = 0;

/// A name string as handed over by the parser
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameValue<'a> {
    /// Already decoded text
    Text(String),
    /// Raw record bytes the parser could not decode
    Bytes(&'a [u8]),
}

/// What the descriptor builder needs from one parsed font
pub trait FontProgram {
    /// PostScript name (name ID 6)
    fn postscript_name(&self) -> Option<NameValue<'_>>;
    /// Family name (name ID 1)
    fn family_name(&self) -> Option<NameValue<'_>>;
    /// Subfamily/style name (name ID 2)
    fn subfamily_name(&self) -> Option<NameValue<'_>>;
    /// The `post` table's fixed-pitch indicator, if the table is readable
    fn fixed_pitch(&self) -> Option<bool>;
    /// The OS/2 fields, if the font has a readable OS/2 table
    fn os2(&self) -> Option<Os2Fields>;
}

impl FontProgram for Face<'_> {
    fn postscript_name(&self) -> Option<NameValue<'_>> {
        find_name(self, name_id::POST_SCRIPT_NAME)
    }

    fn family_name(&self) -> Option<NameValue<'_>> {
        find_name(self, name_id::FAMILY)
    }

    fn subfamily_name(&self) -> Option<NameValue<'_>> {
        find_name(self, name_id::SUBFAMILY)
    }

    fn fixed_pitch(&self) -> Option<bool> {
        self.tables().post.as_ref().map(|post| post.is_monospaced)
    }

    fn os2(&self) -> Option<Os2Fields> {
        Os2Fields::from_face(self)
    }
}

/// Pick the record for `id`, preferring English or Unicode-platform entries
fn find_name<'a>(face: &Face<'a>, id: u16) -> Option<NameValue<'a>> {
    let mut fallback = None;
    for name in face.names() {
        if name.name_id != id {
            continue;
        }
        if is_preferred(&name) {
            return Some(name_value(name));
        }
        if fallback.is_none() {
            fallback = Some(name);
        }
    }
    fallback.map(name_value)
}

fn is_preferred(name: &Name<'_>) -> bool {
    match name.platform_id {
        PlatformId::Unicode => true,
        PlatformId::Windows => name.language_id == WINDOWS_ENGLISH_US,
        PlatformId::Macintosh => name.language_id == MACINTOSH_ENGLISH,
        _ => false,
    }
}

fn name_value(name: Name<'_>) -> NameValue<'_> {
    match name.to_string() {
        Some(text) => NameValue::Text(text),
        None => NameValue::Bytes(name.name),
    }
}
