// src/config/defaults.rs
use crate::config::app::{CipherSection, GronsfeldSection, RouteSection};
use crate::enums::CipherKind;

pub const DEFAULT_ROUTE_COLUMNS: i64 = 4;
pub const DEFAULT_GRONSFELD_KEY: &str = "КЛЮЧ";

pub fn default_cipher_section() -> CipherSection {
    CipherSection {
        default: CipherKind::Route,
    }
}

pub fn default_route_section() -> RouteSection {
    RouteSection {
        columns: DEFAULT_ROUTE_COLUMNS,
    }
}

pub fn default_gronsfeld_section() -> GronsfeldSection {
    GronsfeldSection {
        key: DEFAULT_GRONSFELD_KEY.into(),
    }
}
