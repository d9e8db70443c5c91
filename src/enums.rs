// src/enums.rs
//! Public enum types used throughout the crate

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Which engine to drive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CipherKind {
    #[default]
    Route,
    Gronsfeld,
}

impl CipherKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            CipherKind::Route => "route",
            CipherKind::Gronsfeld => "gronsfeld",
        }
    }
}

impl fmt::Display for CipherKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown cipher {0:?} (expected \"route\" or \"gronsfeld\")")]
pub struct UnknownCipherKind(pub String);

impl FromStr for CipherKind {
    type Err = UnknownCipherKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "route" => Ok(CipherKind::Route),
            "gronsfeld" => Ok(CipherKind::Gronsfeld),
            _ => Err(UnknownCipherKind(s.to_owned())),
        }
    }
}
