//! Crypto error types.

use thiserror::Error;

/// Result type for cipher operations.
pub type CryptoResult<T> = Result<T, CryptoError>;

/// Errors that can occur constructing or using the field cipher.
#[derive(Debug, Error)]
pub enum CryptoError {
    /// Raised once at construction time. A cipher with an invalid key must
    /// never come into existence, so this is fatal for the wiring path.
    #[error("invalid AES key length: must be 16, 24, or 32 bytes, got {actual}")]
    InvalidKeyLength { actual: usize },

    #[error("encryption failed: {0}")]
    Encryption(String),

    #[error("decryption failed: {0}")]
    Decryption(String),
}
