// src/gronsfeld.rs
//! Gronsfeld polyalphabetic cipher over [`crate::alphabet::ALPHABET`]
//!
//! Each glyph is shifted by the alphabet index of the key glyph at the same
//! position, the key repeating as often as needed. Neither key nor text is
//! case-folded: only glyphs already in the uppercase table are accepted.

use tracing::debug;

use crate::alphabet::{from_indices, to_indices, ALPHABET_LEN};
use crate::cipher::Cipher;
use crate::error::{CipherError, KeyFault, TextFault};
use crate::text::{decode, strip_controls};
use crate::Result;

/// Non-empty sequence of shifts, each in `0..ALPHABET_LEN`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GronsfeldKey(Vec<usize>);

impl GronsfeldKey {
    pub fn new(phrase: &str) -> Result<Self> {
        let cleaned = strip_controls(phrase);
        if cleaned.is_empty() {
            return Err(CipherError::InvalidKey(KeyFault::Empty));
        }
        let shifts = to_indices(&cleaned).map_err(|(glyph, position)| {
            CipherError::InvalidKey(KeyFault::ForeignGlyph { glyph, position })
        })?;
        Ok(Self(shifts))
    }

    pub fn shifts(&self) -> &[usize] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false for a constructed key
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Key as glyphs, whitespace removed
    pub fn phrase(&self) -> String {
        from_indices(&self.0)
    }

    #[inline]
    fn shift_at(&self, i: usize) -> usize {
        self.0[i % self.0.len()]
    }
}

/// Gronsfeld engine bound to one key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GronsfeldCipher {
    key: GronsfeldKey,
}

impl GronsfeldCipher {
    /// Build an engine from a key phrase of uppercase Russian letters
    pub fn new(phrase: &str) -> Result<Self> {
        let key = GronsfeldKey::new(phrase)?;
        debug!(key_len = key.len(), "gronsfeld cipher ready");
        Ok(Self { key })
    }

    /// Same as [`GronsfeldCipher::new`] for a key phrase still in raw bytes
    pub fn from_key_bytes(phrase: &[u8]) -> Result<Self> {
        Self::new(decode(phrase)?)
    }

    pub fn with_key(key: GronsfeldKey) -> Self {
        Self { key }
    }

    pub fn key(&self) -> &GronsfeldKey {
        &self.key
    }

    fn prepare(text: &str) -> Result<Vec<usize>> {
        let cleaned = strip_controls(text);
        if cleaned.is_empty() {
            return Err(CipherError::InvalidText(TextFault::Empty));
        }
        to_indices(&cleaned).map_err(|(glyph, position)| {
            CipherError::InvalidText(TextFault::ForeignGlyph { glyph, position })
        })
    }
}

impl Cipher for GronsfeldCipher {
    fn encrypt(&self, text: &str) -> Result<String> {
        let mut work = Self::prepare(text)?;
        for (i, idx) in work.iter_mut().enumerate() {
            *idx = (*idx + self.key.shift_at(i)) % ALPHABET_LEN;
        }
        debug!(len = work.len(), "gronsfeld encrypt");
        Ok(from_indices(&work))
    }

    fn decrypt(&self, text: &str) -> Result<String> {
        let mut work = Self::prepare(text)?;
        for (i, idx) in work.iter_mut().enumerate() {
            *idx = (*idx + ALPHABET_LEN - self.key.shift_at(i)) % ALPHABET_LEN;
        }
        debug!(len = work.len(), "gronsfeld decrypt");
        Ok(from_indices(&work))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::ALPHABET;

    #[test]
    fn shifts_wrap_around_the_alphabet() {
        let cipher = GronsfeldCipher::new("Б").unwrap();
        assert_eq!(cipher.encrypt("Я").unwrap(), ALPHABET[0].to_string());
        assert_eq!(cipher.decrypt("А").unwrap(), "Я");
    }

    #[test]
    fn key_repeats_over_long_text() {
        let cipher = GronsfeldCipher::new("АБ").unwrap();
        assert_eq!(cipher.encrypt("ААААА").unwrap(), "АБАБА");
    }

    #[test]
    fn key_keeps_its_glyphs_after_cleaning() {
        let key = GronsfeldKey::new("К Л\tЮ\nЧ").unwrap();
        assert_eq!(key.phrase(), "КЛЮЧ");
        assert_eq!(key.len(), 4);
    }
}
