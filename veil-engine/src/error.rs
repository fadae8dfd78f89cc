//! Redaction error types.

use thiserror::Error;
use veil_crypto::CryptoError;

/// Result type for redaction operations.
pub type RedactResult<T> = Result<T, RedactError>;

/// Errors that can occur while redacting a response tree.
///
/// Redaction is all-or-nothing per response: the first failing field aborts
/// the call and the error propagates to the caller, which decides whether
/// to fail the response outright. Returning unredacted data on error is not
/// an option the engine offers.
#[derive(Debug, Error)]
pub enum RedactError {
    /// Encrypting one field's value failed.
    #[error("encryption of field '{field}' failed")]
    FieldEncryption {
        field: String,
        #[source]
        source: CryptoError,
    },

    /// Cipher construction or another crypto failure outside a specific field.
    #[error(transparent)]
    Crypto(#[from] CryptoError),
}
