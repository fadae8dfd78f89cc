//! Engine configuration.

use serde::{Deserialize, Serialize};
use veil_crypto::{AesFieldCipher, CryptoResult};

/// Configuration for the redaction engine.
///
/// The host owns where this comes from (config file, environment,
/// secret store); the engine only needs the key itself.
#[derive(Clone, Serialize, Deserialize)]
pub struct RedactionConfig {
    /// Symmetric key for `encrypt` rules. Its UTF-8 byte length selects
    /// the AES flavor and must be 16, 24, or 32.
    pub encryption_key: String,
}

impl RedactionConfig {
    /// Builds the field cipher from the configured key.
    ///
    /// Fails if the key length is invalid; the feature must not be wired
    /// with a bad key, so callers should treat this as fatal at startup.
    pub fn build_cipher(&self) -> CryptoResult<AesFieldCipher> {
        AesFieldCipher::from_key_str(&self.encryption_key)
    }
}

impl std::fmt::Debug for RedactionConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // The key is a secret; show only its length.
        f.debug_struct("RedactionConfig")
            .field("encryption_key_len", &self.encryption_key.len())
            .finish()
    }
}
