// src/alphabet.rs
//! Fixed Russian uppercase alphabet and its glyph ↔ index mapping
//!
//! The table is small enough that a linear scan beats hashing, so lookups
//! walk the array directly.

/// Russian uppercase letters in collation order, Ё between Е and Ж
pub const ALPHABET: [char; 33] = [
    'А', 'Б', 'В', 'Г', 'Д', 'Е', 'Ё', 'Ж', 'З', 'И', 'Й', 'К', 'Л', 'М', 'Н', 'О', 'П', 'Р',
    'С', 'Т', 'У', 'Ф', 'Х', 'Ц', 'Ч', 'Ш', 'Щ', 'Ъ', 'Ы', 'Ь', 'Э', 'Ю', 'Я',
];

/// Modulus for all Gronsfeld arithmetic
pub const ALPHABET_LEN: usize = ALPHABET.len();

/// Position of `glyph` in [`ALPHABET`], if it belongs there
#[inline]
pub fn index_of(glyph: char) -> Option<usize> {
    ALPHABET.iter().position(|&g| g == glyph)
}

/// Glyph at `index`; `None` outside `0..ALPHABET_LEN`
#[inline]
pub fn glyph_at(index: usize) -> Option<char> {
    ALPHABET.get(index).copied()
}

/// Map every glyph of `text` to its index, reporting the first foreign glyph
///
/// On failure returns the offending glyph and its position (in chars).
pub fn to_indices(text: &str) -> Result<Vec<usize>, (char, usize)> {
    text.chars()
        .enumerate()
        .map(|(position, glyph)| index_of(glyph).ok_or((glyph, position)))
        .collect()
}

/// Inverse of [`to_indices`]; every index is reduced modulo [`ALPHABET_LEN`]
pub fn from_indices(indices: &[usize]) -> String {
    indices
        .iter()
        .filter_map(|&i| glyph_at(i % ALPHABET_LEN))
        .collect()
}
