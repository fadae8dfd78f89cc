//! AES field cipher.
//!
//! Encrypts individual field values as UTF-8 strings and encodes the
//! ciphertext with standard Base64 so the result stays transport-safe
//! inside a JSON response.
//!
//! The cipher runs AES in ECB mode with PKCS7 padding and no IV, which
//! makes the output deterministic per key: the same plaintext always
//! produces the same ciphertext. Callers rely on that determinism, so it
//! is part of the contract here, but note what it costs: equal plaintexts
//! (and equal 16-byte blocks) are visible as equal ciphertexts, and the
//! ciphertext is not authenticated. Values protected this way should be
//! short identifiers, not documents.

use crate::error::{CryptoError, CryptoResult};
use aes::cipher::{BlockDecryptMut, BlockEncryptMut, KeyInit, block_padding::Pkcs7};
use aes::{Aes128, Aes192, Aes256};
use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use std::fmt;
use tracing::info;
use zeroize::{Zeroize, ZeroizeOnDrop};

type Aes128EcbEnc = ecb::Encryptor<Aes128>;
type Aes128EcbDec = ecb::Decryptor<Aes128>;
type Aes192EcbEnc = ecb::Encryptor<Aes192>;
type Aes192EcbDec = ecb::Decryptor<Aes192>;
type Aes256EcbEnc = ecb::Encryptor<Aes256>;
type Aes256EcbDec = ecb::Decryptor<Aes256>;

/// Encrypts and decrypts individual field values.
///
/// The seam between the redaction engine and the cipher: the engine only
/// needs string-in/string-out transforms, so tests and keyless wiring can
/// substitute [`PassthroughEncryptor`].
pub trait FieldEncryptor: Send + Sync {
    /// Encrypts a field value to a transport-safe string.
    fn encrypt(&self, plaintext: &str) -> CryptoResult<String>;

    /// Inverts [`FieldEncryptor::encrypt`].
    fn decrypt(&self, ciphertext: &str) -> CryptoResult<String>;
}

/// AES key material, zeroized on drop. The variant picks the AES flavor.
#[derive(Zeroize, ZeroizeOnDrop)]
enum KeyMaterial {
    Aes128([u8; 16]),
    Aes192([u8; 24]),
    Aes256([u8; 32]),
}

impl KeyMaterial {
    fn bits(&self) -> usize {
        match self {
            KeyMaterial::Aes128(_) => 128,
            KeyMaterial::Aes192(_) => 192,
            KeyMaterial::Aes256(_) => 256,
        }
    }
}

/// The field cipher primitive.
///
/// Constructed once at process start from the configured key and shared
/// read-only across all redaction calls; it holds no per-call state.
pub struct AesFieldCipher {
    key: KeyMaterial,
}

impl AesFieldCipher {
    /// Creates a cipher from raw key bytes.
    ///
    /// The key must be exactly 16, 24, or 32 bytes (AES-128/192/256); any
    /// other length fails with [`CryptoError::InvalidKeyLength`] and no
    /// cipher is constructed.
    pub fn new(key: &[u8]) -> CryptoResult<Self> {
        let key = match key.len() {
            16 => {
                let mut bytes = [0u8; 16];
                bytes.copy_from_slice(key);
                KeyMaterial::Aes128(bytes)
            }
            24 => {
                let mut bytes = [0u8; 24];
                bytes.copy_from_slice(key);
                KeyMaterial::Aes192(bytes)
            }
            32 => {
                let mut bytes = [0u8; 32];
                bytes.copy_from_slice(key);
                KeyMaterial::Aes256(bytes)
            }
            actual => return Err(CryptoError::InvalidKeyLength { actual }),
        };

        info!(key_bits = key.bits(), "field cipher ready");
        Ok(Self { key })
    }

    /// Creates a cipher from a configured key string, using its UTF-8 bytes.
    pub fn from_key_str(key: &str) -> CryptoResult<Self> {
        Self::new(key.as_bytes())
    }

    fn encrypt_bytes(&self, plaintext: &[u8]) -> Vec<u8> {
        match &self.key {
            KeyMaterial::Aes128(key) => {
                Aes128EcbEnc::new(key.into()).encrypt_padded_vec_mut::<Pkcs7>(plaintext)
            }
            KeyMaterial::Aes192(key) => {
                Aes192EcbEnc::new(key.into()).encrypt_padded_vec_mut::<Pkcs7>(plaintext)
            }
            KeyMaterial::Aes256(key) => {
                Aes256EcbEnc::new(key.into()).encrypt_padded_vec_mut::<Pkcs7>(plaintext)
            }
        }
    }

    fn decrypt_bytes(&self, ciphertext: &[u8]) -> CryptoResult<Vec<u8>> {
        let unpadded = match &self.key {
            KeyMaterial::Aes128(key) => {
                Aes128EcbDec::new(key.into()).decrypt_padded_vec_mut::<Pkcs7>(ciphertext)
            }
            KeyMaterial::Aes192(key) => {
                Aes192EcbDec::new(key.into()).decrypt_padded_vec_mut::<Pkcs7>(ciphertext)
            }
            KeyMaterial::Aes256(key) => {
                Aes256EcbDec::new(key.into()).decrypt_padded_vec_mut::<Pkcs7>(ciphertext)
            }
        };

        unpadded.map_err(|_| {
            CryptoError::Decryption("bad padding (wrong key or corrupted ciphertext)".to_string())
        })
    }
}

impl FieldEncryptor for AesFieldCipher {
    fn encrypt(&self, plaintext: &str) -> CryptoResult<String> {
        let ciphertext = self.encrypt_bytes(plaintext.as_bytes());
        Ok(BASE64.encode(ciphertext))
    }

    fn decrypt(&self, ciphertext: &str) -> CryptoResult<String> {
        let raw = BASE64
            .decode(ciphertext)
            .map_err(|e| CryptoError::Decryption(format!("ciphertext is not valid base64: {e}")))?;

        if raw.is_empty() || raw.len() % 16 != 0 {
            return Err(CryptoError::Decryption(format!(
                "ciphertext length {} is not a whole number of AES blocks",
                raw.len()
            )));
        }

        let plaintext = self.decrypt_bytes(&raw)?;
        String::from_utf8(plaintext)
            .map_err(|e| CryptoError::Decryption(format!("plaintext is not valid UTF-8: {e}")))
    }
}

impl fmt::Debug for AesFieldCipher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Never expose key material through Debug.
        f.debug_struct("AesFieldCipher")
            .field("key_bits", &self.key.bits())
            .finish()
    }
}

/// Identity encryptor for tests and environments wired without a key.
#[derive(Clone, Copy, Debug, Default)]
pub struct PassthroughEncryptor;

impl FieldEncryptor for PassthroughEncryptor {
    fn encrypt(&self, plaintext: &str) -> CryptoResult<String> {
        Ok(plaintext.to_string())
    }

    fn decrypt(&self, ciphertext: &str) -> CryptoResult<String> {
        Ok(ciphertext.to_string())
    }
}
