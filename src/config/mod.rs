// src/config/mod.rs
//! Configuration system for classic-ciphers
//!
//! Lazy-loaded global config read from TOML; the path can come from the env.

pub use app::{
    load, load_or_default, resolve_path, CipherSection, Config, GronsfeldSection, RouteSection,
};

mod app;
mod defaults;
