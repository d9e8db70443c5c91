// src/error.rs
//! Public error types for the entire crate

use thiserror::Error;

/// Why a key was rejected at construction
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KeyFault {
    #[error("column count {columns} is outside 1..={max}")]
    ColumnsOutOfRange { columns: i64, max: usize },

    #[error("key is empty")]
    Empty,

    #[error("glyph {glyph:?} at position {position} is not in the alphabet")]
    ForeignGlyph { glyph: char, position: usize },
}

/// Why a text was rejected by the Gronsfeld engine
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TextFault {
    #[error("text is empty")]
    Empty,

    #[error("glyph {glyph:?} at position {position} is not in the alphabet")]
    ForeignGlyph { glyph: char, position: usize },
}

/// Every failure an engine can report. All are terminal for the call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CipherError {
    #[error("Invalid key: {0}")]
    InvalidKey(KeyFault),

    #[error("Input text is empty")]
    EmptyInput,

    #[error("Input text is empty after removing whitespace")]
    EmptyAfterCleaning,

    #[error("Invalid text: {0}")]
    InvalidText(TextFault),

    #[error("Malformed UTF-8 sequence after byte {valid_up_to}")]
    Encoding { valid_up_to: usize },
}

impl CipherError {
    /// True for every flavour of "nothing to process", whichever engine raised it
    pub fn is_empty_input(&self) -> bool {
        matches!(
            self,
            CipherError::EmptyInput
                | CipherError::EmptyAfterCleaning
                | CipherError::InvalidText(TextFault::Empty)
        )
    }
}

/// Errors raised while loading configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Configured key rejected: {0}")]
    Cipher(#[from] CipherError),
}
