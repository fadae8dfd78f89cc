//! Tree redaction engine for the veil pipeline.
//!
//! Given a serialized response tree and the [`RuleSet`] declared for the
//! producing operation, the engine rewrites the tree in place before it
//! leaves the service boundary:
//!
//! 1. **Exclude**: named fields are removed entirely.
//! 2. **Mask**: named fields are replaced by an irreversible partial mask.
//! 3. **Encrypt**: named fields are replaced by reversible ciphertext.
//!
//! The order is a contract: mask and encrypt never see excluded fields,
//! and a field named by both mask and encrypt stores the encryption of the
//! masked value.
//!
//! The flow per outgoing response: the host looks the operation up in its
//! [`RuleRegistry`], hands the tree and the rules to [`Redactor::redact`],
//! and passes the rewritten tree on to serialization. A failed redaction
//! must fail the response; the engine never hands back a tree it could
//! not fully redact.
//!
//! ```
//! use serde_json::json;
//! use veil_engine::{Redactor, RuleSet};
//! use veil_crypto::AesFieldCipher;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let cipher = AesFieldCipher::from_key_str("0123456789abcdef")?;
//! let redactor = Redactor::new(cipher);
//!
//! let rules = RuleSet::new()
//!     .with_exclude(["ssn"])
//!     .with_mask(["email"])
//!     .with_encrypt(["account_id"]);
//!
//! let mut response = json!({
//!     "name": "Jane Doe",
//!     "ssn": "123-45-6789",
//!     "email": "jd@example.com",
//!     "account_id": "acct-991",
//! });
//! redactor.redact(&mut response, &rules)?;
//!
//! assert!(response.get("ssn").is_none());
//! assert_eq!(response["email"], "j****d@example.com");
//! # Ok(())
//! # }
//! ```

mod config;
mod error;
pub mod mask;
mod redactor;
mod request;

pub use config::RedactionConfig;
pub use error::{RedactError, RedactResult};
pub use mask::{mask_email, mask_generic};
pub use redactor::Redactor;
pub use request::shape_request;

// The rule types and the cipher seam, re-exported so hosts can wire the
// pipeline from this crate alone.
pub use veil_crypto::{AesFieldCipher, FieldEncryptor, PassthroughEncryptor};
pub use veil_rules::{ExtraField, RequestRules, RuleRegistry, RuleSet};
