use crate::font::NameValue;

/// Turn a name value from the parser into display text.
///
/// Decoded text is returned unchanged. Raw byte buffers (seen with some
/// wide or legacy encodings) have their zero bytes dropped and every
/// remaining byte decoded on its own as a one-byte UTF-8 sequence, so
/// `[0x00, 0x41, 0x00, 0x42]` becomes `"AB"` and any byte at or above
/// `0x80` becomes U+FFFD.
pub fn normalize_name(value: NameValue<'_>) -> String {
    match value {
        NameValue::Text(text) => text,
        NameValue::Bytes(bytes) => clean_raw_name(bytes),
    }
}

/// Strip zero bytes from a raw name buffer and decode the rest byte by byte
pub fn clean_raw_name(bytes: &[u8]) -> String {
    bytes
        .iter()
        .filter(|&&b| b != 0)
        .map(|&b| String::from_utf8_lossy(&[b]).into_owned())
        .collect()
}
