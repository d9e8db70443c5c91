// src/config/app.rs
use std::path::{Path, PathBuf};

use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::defaults::*;
use crate::cipher::Cipher;
use crate::consts::{CONFIG_ENV_VAR, DEFAULT_CONFIG_PATH};
use crate::enums::CipherKind;
use crate::error::ConfigError;
use crate::gronsfeld::GronsfeldCipher;
use crate::route::RouteCipher;

/// Engine selection and default keys; every section is optional in the file
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub cipher: CipherSection,
    pub route: RouteSection,
    pub gronsfeld: GronsfeldSection,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CipherSection {
    pub default: CipherKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RouteSection {
    pub columns: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GronsfeldSection {
    pub key: String,
}

impl Default for CipherSection {
    fn default() -> Self {
        default_cipher_section()
    }
}

impl Default for RouteSection {
    fn default() -> Self {
        default_route_section()
    }
}

impl Default for GronsfeldSection {
    fn default() -> Self {
        default_gronsfeld_section()
    }
}

impl Config {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
    }

    pub fn route_cipher(&self) -> Result<RouteCipher, ConfigError> {
        Ok(RouteCipher::new(self.route.columns)?)
    }

    pub fn gronsfeld_cipher(&self) -> Result<GronsfeldCipher, ConfigError> {
        Ok(GronsfeldCipher::new(&self.gronsfeld.key)?)
    }

    /// Engine of the given kind, keyed from this config
    pub fn cipher(&self, kind: CipherKind) -> Result<Box<dyn Cipher + Send + Sync>, ConfigError> {
        let cipher: Box<dyn Cipher + Send + Sync> = match kind {
            CipherKind::Route => Box::new(self.route_cipher()?),
            CipherKind::Gronsfeld => Box::new(self.gronsfeld_cipher()?),
        };
        Ok(cipher)
    }

    pub fn default_cipher(&self) -> Result<Box<dyn Cipher + Send + Sync>, ConfigError> {
        self.cipher(self.cipher.default)
    }
}

/// Config path: `$CLASSIC_CIPHERS_CONFIG`, else `classic-ciphers.toml`
pub fn resolve_path() -> PathBuf {
    std::env::var_os(CONFIG_ENV_VAR)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH))
}

/// Read `path`, or fall back to built-in defaults when it does not exist
pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let path = path.as_ref();
    if path.exists() {
        debug!(path = %path.display(), "loading config");
        Config::from_path(path)
    } else {
        warn!(path = %path.display(), "config not found, using built-in defaults");
        Ok(Config::default())
    }
}

static CONFIG: OnceCell<Config> = OnceCell::new();

/// Global config, loaded once on first call
pub fn load() -> Result<&'static Config, ConfigError> {
    CONFIG.get_or_try_init(|| load_or_default(resolve_path()))
}
