//! Tree redactor.
//!
//! Walks a serialized response tree depth-first and applies the declared
//! field rules at every object node. The walk is synchronous and operates
//! on the tree in place; one call handles one response.

use crate::config::RedactionConfig;
use crate::error::{RedactError, RedactResult};
use crate::mask::mask_email;
use serde_json::{Map, Value};
use tracing::{debug, warn};
use veil_crypto::{AesFieldCipher, FieldEncryptor};
use veil_rules::RuleSet;

/// Running counts for one redaction call, emitted as the observability
/// side-channel once the walk finishes.
#[derive(Default)]
struct ApplyStats {
    excluded: usize,
    masked: usize,
    encrypted: usize,
    skipped: usize,
}

/// Applies exclude/mask/encrypt rules to response trees.
///
/// Holds the cipher primitive and nothing else; it is immutable after
/// construction and safe to share across threads and in-flight requests.
pub struct Redactor<E> {
    cipher: E,
}

impl Redactor<AesFieldCipher> {
    /// Wires a redactor from configuration, building the AES cipher from
    /// the configured key.
    pub fn from_config(config: &RedactionConfig) -> RedactResult<Self> {
        Ok(Self::new(config.build_cipher()?))
    }
}

impl<E: FieldEncryptor> Redactor<E> {
    pub fn new(cipher: E) -> Self {
        Self { cipher }
    }

    /// Returns the cipher this redactor encrypts with.
    pub fn cipher(&self) -> &E {
        &self.cipher
    }

    /// Rewrites `value` in place according to `rules`.
    ///
    /// Every object node in the tree (nested objects and objects inside
    /// arrays included) has the rules applied to its own fields in a fixed
    /// order: exclude, then mask, then encrypt. A field named in both
    /// `mask` and `encrypt` therefore stores `encrypt(mask_email(original))`.
    /// Scalar and null roots are left untouched.
    ///
    /// An encryption failure on any field aborts the whole call; the tree
    /// may have been partially rewritten at that point and must not be sent.
    ///
    /// Redaction is not idempotent: running it again re-masks and
    /// re-encrypts the already transformed values.
    pub fn redact(&self, value: &mut Value, rules: &RuleSet) -> RedactResult<()> {
        let mut stats = ApplyStats::default();
        self.walk(value, rules, &mut stats)?;
        debug!(
            excluded = stats.excluded,
            masked = stats.masked,
            encrypted = stats.encrypted,
            skipped = stats.skipped,
            "response redaction applied"
        );
        Ok(())
    }

    fn walk(&self, value: &mut Value, rules: &RuleSet, stats: &mut ApplyStats) -> RedactResult<()> {
        match value {
            Value::Object(fields) => {
                self.apply(fields, rules, stats)?;
                for child in fields.values_mut() {
                    self.walk(child, rules, stats)?;
                }
            }
            Value::Array(items) => {
                for item in items {
                    self.walk(item, rules, stats)?;
                }
            }
            _ => {}
        }
        Ok(())
    }

    /// Applies the three rule lists to one object node's own fields.
    fn apply(
        &self,
        fields: &mut Map<String, Value>,
        rules: &RuleSet,
        stats: &mut ApplyStats,
    ) -> RedactResult<()> {
        for name in &rules.exclude {
            if fields.remove(name).is_some() {
                stats.excluded += 1;
            }
        }

        for name in &rules.mask {
            if let Some(slot) = fields.get_mut(name) {
                match scalar_text(slot) {
                    Some(text) => {
                        *slot = Value::String(mask_email(&text));
                        stats.masked += 1;
                    }
                    None => skip_non_scalar(name, slot, "mask", stats),
                }
            }
        }

        for name in &rules.encrypt {
            if let Some(slot) = fields.get_mut(name) {
                match scalar_text(slot) {
                    Some(text) => {
                        let ciphertext = self.cipher.encrypt(&text).map_err(|source| {
                            RedactError::FieldEncryption {
                                field: name.clone(),
                                source,
                            }
                        })?;
                        *slot = Value::String(ciphertext);
                        stats.encrypted += 1;
                    }
                    None => skip_non_scalar(name, slot, "encrypt", stats),
                }
            }
        }

        Ok(())
    }
}

/// Renders a scalar field value as the text the transforms operate on.
///
/// Strings pass through, numbers and booleans use their canonical text.
/// Returns `None` for null (an absent value is a no-op, not a failure) and
/// for containers, which carry no single text to transform.
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Object(_) | Value::Array(_) => None,
    }
}

fn skip_non_scalar(name: &str, value: &Value, operation: &str, stats: &mut ApplyStats) {
    // Null is a legal no-op; anything else here is a rule pointing at a
    // container, which we skip rather than corrupt.
    if !value.is_null() {
        stats.skipped += 1;
        warn!(field = name, operation, "rule targets a non-scalar field, skipping");
    }
}
