// src/text.rs
//! Text preparation shared by both engines
//!
//! Cleaning removes exactly four characters (space, tab, LF, CR). Anything
//! else, including other Unicode whitespace, is left for the engine to judge.

use crate::consts::STRIPPED_CHARS;
use crate::error::CipherError;
use crate::Result;

/// Decode raw input bytes, rejecting malformed or truncated UTF-8
pub fn decode(bytes: &[u8]) -> Result<&str> {
    std::str::from_utf8(bytes).map_err(|e| CipherError::Encoding {
        valid_up_to: e.valid_up_to(),
    })
}

/// Drop space, tab, LF and CR; keep everything else in order
pub fn strip_controls(text: &str) -> String {
    text.chars().filter(|c| !STRIPPED_CHARS.contains(c)).collect()
}

/// Uppercase ASCII a–z, Cyrillic а–я and ё; pass everything else through
pub fn fold_case(text: &str) -> String {
    text.chars().map(fold_glyph).collect()
}

fn fold_glyph(c: char) -> char {
    match c {
        'a'..='z' => c.to_ascii_uppercase(),
        // а..я and А..Я are both contiguous, 0x20 apart
        'а'..='я' => char::from_u32(c as u32 - 0x20).unwrap_or(c),
        'ё' => 'Ё',
        _ => c,
    }
}

/// Full normalization: reject empty input, strip, reject if nothing is left, fold
pub fn normalize(text: &str) -> Result<String> {
    if text.is_empty() {
        return Err(CipherError::EmptyInput);
    }
    let cleaned = strip_controls(text);
    if cleaned.is_empty() {
        return Err(CipherError::EmptyAfterCleaning);
    }
    Ok(fold_case(&cleaned))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fold_covers_the_cyrillic_block_edges() {
        assert_eq!(fold_case("аяёж"), "АЯЁЖ");
        assert_eq!(fold_case("ѐ"), "ѐ"); // U+0450 is outside а..я
    }

    #[test]
    fn truncated_cyrillic_glyph_is_an_encoding_error() {
        let bytes = "ПР".as_bytes();
        let err = decode(&bytes[..3]).unwrap_err();
        assert_eq!(err, CipherError::Encoding { valid_up_to: 2 });
    }
}
