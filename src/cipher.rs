// src/cipher.rs
//! Common interface implemented by every engine

use crate::text::decode;
use crate::Result;

/// A keyed, stateless text transform
///
/// Implementors are immutable once built, so one instance may serve any
/// number of calls from any number of threads.
pub trait Cipher {
    fn encrypt(&self, text: &str) -> Result<String>;

    fn decrypt(&self, text: &str) -> Result<String>;

    /// Decode `bytes` as UTF-8, then [`Cipher::encrypt`]
    fn encrypt_bytes(&self, bytes: &[u8]) -> Result<String> {
        self.encrypt(decode(bytes)?)
    }

    /// Decode `bytes` as UTF-8, then [`Cipher::decrypt`]
    fn decrypt_bytes(&self, bytes: &[u8]) -> Result<String> {
        self.decrypt(decode(bytes)?)
    }
}
