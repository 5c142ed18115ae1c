//! Strict percent-decoding for sentence text.

use thiserror::Error;

/// The text is not well-formed percent-encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum UriError {
    /// A `%` not followed by two hex digits.
    #[error("malformed percent escape at byte {offset}")]
    MalformedEscape { offset: usize },

    /// Escapes decode to bytes that are not UTF-8.
    #[error("percent escapes do not decode to valid UTF-8")]
    InvalidUtf8,
}

/// Decodes every `%XX` escape in `text`.
///
/// Unlike lenient decoders, a stray `%` is an error rather than a literal.
pub fn decode_sentence_text(text: &str) -> Result<String, UriError> {
    if !text.contains('%') {
        return Ok(text.to_string());
    }

    let bytes = text.as_bytes();
    let mut decoded = Vec::with_capacity(bytes.len());
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] != b'%' {
            decoded.push(bytes[i]);
            i += 1;
            continue;
        }

        let hi = bytes.get(i + 1).copied().and_then(hex_value);
        let lo = bytes.get(i + 2).copied().and_then(hex_value);
        match (hi, lo) {
            (Some(hi), Some(lo)) => {
                decoded.push((hi << 4) | lo);
                i += 3;
            }
            _ => return Err(UriError::MalformedEscape { offset: i }),
        }
    }

    String::from_utf8(decoded).map_err(|_| UriError::InvalidUtf8)
}

fn hex_value(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        _ => None,
    }
}
