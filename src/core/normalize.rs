use crate::domain::model::WordList;
use crate::utils::error::{ConvertError, Result};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;

/// Unicode whitespace plus the ASCII information separators U+001C..=U+001F.
fn is_strippable(c: char) -> bool {
    c.is_whitespace() || ('\x1c'..='\x1f').contains(&c)
}

/// Trims surrounding whitespace and lowercases with the Unicode default mapping.
pub fn normalize_word(raw: &str) -> String {
    raw.trim_matches(is_strippable).to_lowercase()
}

/// Splits on `\n`, `\r\n` and a lone `\r`. A trailing terminator does not
/// start another line, and a final line without one still counts.
pub fn split_lines(text: &str) -> Vec<&str> {
    let bytes = text.as_bytes();
    let mut lines = Vec::new();
    let mut start = 0;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'\n' => {
                lines.push(&text[start..i]);
                i += 1;
                start = i;
            }
            b'\r' => {
                lines.push(&text[start..i]);
                i += if bytes.get(i + 1) == Some(&b'\n') { 2 } else { 1 };
                start = i;
            }
            _ => i += 1,
        }
    }
    if start < bytes.len() {
        lines.push(&text[start..]);
    }
    lines
}

/// One entry per input line; an empty input yields an empty list.
pub fn normalize_lines(text: &str) -> WordList {
    split_lines(text)
        .into_iter()
        .map(normalize_word)
        .collect::<Vec<_>>()
        .into()
}

pub fn decode_utf8(path: &str, bytes: Vec<u8>) -> Result<String> {
    String::from_utf8(bytes).map_err(|e| ConvertError::EncodingError {
        path: path.to_string(),
        offset: e.utf8_error().valid_up_to(),
    })
}

/// Pretty JSON with `indent` spaces per level. Non-ASCII is written as-is.
pub fn render_json(words: &WordList, indent: usize) -> Result<Vec<u8>> {
    let indent = vec![b' '; indent];
    let mut out = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(&indent));
    words.serialize(&mut serializer)?;
    Ok(out)
}
