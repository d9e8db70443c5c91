// src/consts.rs
//! Shared constants: key limits, padding and config defaults

/// Largest accepted route-cipher column count
pub const MAX_ROUTE_COLUMNS: usize = 50;

/// Filler written into the unused tail of the last grid row
pub const PADDING_GLYPH: char = 'X';

/// The only characters removed during cleaning (space, tab, LF, CR)
pub const STRIPPED_CHARS: [char; 4] = [' ', '\t', '\n', '\r'];

/// Env var naming the TOML config file
pub const CONFIG_ENV_VAR: &str = "CLASSIC_CIPHERS_CONFIG";

/// Config file used when the env var is unset
pub const DEFAULT_CONFIG_PATH: &str = "classic-ciphers.toml";
