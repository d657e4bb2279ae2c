use std::fmt::Write;

/// Separator placed between codepoints in a dictionary key
pub const KEY_SEPARATOR: char = '-';

/// Derive the canonical dictionary key for a raw emoji string.
///
/// Each codepoint is written as uppercase hex without padding and the parts
/// are joined with [`KEY_SEPARATOR`], so "🏳️‍🌈" becomes `1F3F3-FE0F-200D-1F308`.
pub fn hex_key(value: &str) -> String {
    chars_key(value.chars())
}

/// Same as [`hex_key`] for an already-decoded codepoint sequence
pub fn chars_key<I: IntoIterator<Item = char>>(chars: I) -> String {
    let mut key = String::new();
    for (i, ch) in chars.into_iter().enumerate() {
        if i > 0 {
            key.push(KEY_SEPARATOR);
        }
        // Writing to a String cannot fail
        let _ = write!(key, "{:X}", ch as u32);
    }
    key
}

/// Decode a key back into the emoji string it identifies.
///
/// Returns None if any part is empty, contains anything but hex digits, or
/// is not a Unicode scalar value.
pub fn parse_hex_key(key: &str) -> Option<String> {
    key.split(KEY_SEPARATOR).map(parse_hex_part).collect()
}

fn parse_hex_part(part: &str) -> Option<char> {
    // from_str_radix would also take a leading sign
    if part.is_empty() || part.len() > 6 || !part.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    u32::from_str_radix(part, 16).ok().and_then(char::from_u32)
}
