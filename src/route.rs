// src/route.rs
//! Columnar route-transposition cipher
//!
//! Text is written row by row into a grid `columns` wide, the last row padded
//! with [`PADDING_GLYPH`]. The ciphertext is the grid read column by column,
//! rightmost column first, each column top to bottom. Decryption writes along
//! that same route and reads the rows back.
//!
//! ```
//! use classic_ciphers::{Cipher, RouteCipher};
//!
//! let cipher = RouteCipher::new(3).unwrap();
//! assert_eq!(cipher.encrypt("abc").unwrap(), "CBA");
//! assert_eq!(cipher.decrypt("CBA").unwrap(), "ABC");
//! ```

use tracing::debug;

use crate::cipher::Cipher;
use crate::consts::{MAX_ROUTE_COLUMNS, PADDING_GLYPH};
use crate::error::{CipherError, KeyFault};
use crate::text::normalize;
use crate::Result;

/// Validated column count in `1..=MAX_ROUTE_COLUMNS`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RouteKey(usize);

impl RouteKey {
    pub fn new(columns: i64) -> Result<Self> {
        match usize::try_from(columns) {
            Ok(c) if (1..=MAX_ROUTE_COLUMNS).contains(&c) => Ok(Self(c)),
            _ => Err(CipherError::InvalidKey(KeyFault::ColumnsOutOfRange {
                columns,
                max: MAX_ROUTE_COLUMNS,
            })),
        }
    }

    #[inline]
    pub fn columns(&self) -> usize {
        self.0
    }
}

/// Flat `rows × columns` buffer, cell `(r, c)` at `r * columns + c`
struct Grid {
    rows: usize,
    columns: usize,
    cells: Vec<char>,
}

impl Grid {
    fn padded(len: usize, columns: usize) -> Self {
        let rows = len.div_ceil(columns);
        Self {
            rows,
            columns,
            cells: vec![PADDING_GLYPH; rows * columns],
        }
    }

    /// Cell indices in route order: columns right to left, rows top to bottom
    fn route(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.columns)
            .rev()
            .flat_map(move |c| (0..self.rows).map(move |r| r * self.columns + c))
    }
}

/// Route-transposition engine bound to one column count
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteCipher {
    key: RouteKey,
}

impl RouteCipher {
    /// Build an engine; fails with `InvalidKey` unless `1 <= columns <= 50`
    pub fn new(columns: i64) -> Result<Self> {
        let key = RouteKey::new(columns)?;
        debug!(columns = key.columns(), "route cipher ready");
        Ok(Self { key })
    }

    pub fn with_key(key: RouteKey) -> Self {
        Self { key }
    }

    pub fn key(&self) -> RouteKey {
        self.key
    }
}

impl Cipher for RouteCipher {
    fn encrypt(&self, text: &str) -> Result<String> {
        let glyphs: Vec<char> = normalize(text)?.chars().collect();
        let mut grid = Grid::padded(glyphs.len(), self.key.columns());
        grid.cells[..glyphs.len()].copy_from_slice(&glyphs);

        debug!(
            len = glyphs.len(),
            rows = grid.rows,
            columns = grid.columns,
            "route encrypt"
        );
        Ok(grid.route().map(|i| grid.cells[i]).collect())
    }

    fn decrypt(&self, text: &str) -> Result<String> {
        let glyphs: Vec<char> = normalize(text)?.chars().collect();
        let mut grid = Grid::padded(glyphs.len(), self.key.columns());
        let route: Vec<usize> = grid.route().collect();
        for (&glyph, cell) in glyphs.iter().zip(route) {
            grid.cells[cell] = glyph;
        }

        debug!(
            len = glyphs.len(),
            rows = grid.rows,
            columns = grid.columns,
            "route decrypt"
        );
        // Strips every trailing padding glyph, including ones that were plaintext
        let plain: String = grid.cells.into_iter().collect();
        Ok(plain.trim_end_matches(PADDING_GLYPH).to_owned())
    }
}
