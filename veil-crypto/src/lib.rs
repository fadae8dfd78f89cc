//! Field-level encryption for the veil redaction pipeline.
//!
//! Provides the cipher primitive the tree redactor uses for `encrypt`
//! rules: AES (128/192/256 by key length) in ECB mode with PKCS7 padding,
//! ciphertext encoded as standard Base64.
//!
//! # Determinism
//!
//! ECB with no IV is a deliberate choice: encrypting the same value with
//! the same key must always yield the same ciphertext, so redacted
//! responses stay stable across calls and replicas. The trade-off is that
//! ECB leaks equality between plaintexts and provides no authentication;
//! see the notes on [`AesFieldCipher`] before reaching for this outside
//! short field values.

mod cipher;
mod error;

pub use cipher::{AesFieldCipher, FieldEncryptor, PassthroughEncryptor};
pub use error::{CryptoError, CryptoResult};
