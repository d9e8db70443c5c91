// src/lib.rs
//! classic-ciphers — two historical ciphers over the Russian alphabet
//!
//! Features:
//! - Columnar route transposition keyed by a column count (1..=50)
//! - Gronsfeld additive cipher keyed by a phrase of uppercase Russian letters
//! - Shared text cleaning (space/tab/LF/CR removal, case folding)
//! - TOML configuration for default engine and keys
//!
//! Neither cipher offers any real secrecy; they exist for teaching.
//!
//! ```
//! use classic_ciphers::{Cipher, GronsfeldCipher};
//!
//! let cipher = GronsfeldCipher::new("КЛЮЧ").unwrap();
//! let secret = cipher.encrypt("ПРИВЕТ МИР").unwrap();
//! assert_eq!(cipher.decrypt(&secret).unwrap(), "ПРИВЕТМИР");
//! ```

pub mod alphabet;
pub mod cipher;
pub mod config;
pub mod consts;
pub mod enums;
pub mod error;
pub mod gronsfeld;
pub mod route;
pub mod text;

// Re-export everything users need at the crate root
pub use cipher::Cipher;
pub use config::{load as load_config, Config};
pub use enums::CipherKind;
pub use error::{CipherError, ConfigError, KeyFault, TextFault};
pub use gronsfeld::{GronsfeldCipher, GronsfeldKey};
pub use route::{RouteCipher, RouteKey};
pub use text::normalize;

pub type Result<T> = std::result::Result<T, CipherError>;
