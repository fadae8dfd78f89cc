//! Field rule value types.
//!
//! A rule names fields by exact string match against object keys, and it
//! applies at every depth of the response tree: `"email"` matches a
//! top-level `email` field and one nested three levels down equally.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Field rules for one response-producing operation.
///
/// The engine applies the three lists in a fixed order: exclude, then mask,
/// then encrypt. A field may appear in more than one list; a field that is
/// both masked and encrypted ends up as `encrypt(mask(value))`, and a field
/// that is excluded is gone before the mask and encrypt passes run.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSet {
    /// Fields removed from the response entirely.
    #[serde(default)]
    pub exclude: Vec<String>,

    /// Fields replaced by their masked form (irreversible).
    #[serde(default)]
    pub mask: Vec<String>,

    /// Fields replaced by their encrypted form (reversible with the key).
    #[serde(default)]
    pub encrypt: Vec<String>,
}

impl RuleSet {
    /// Creates an empty rule set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the fields to exclude.
    #[must_use]
    pub fn with_exclude<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude = fields.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the fields to mask.
    #[must_use]
    pub fn with_mask<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.mask = fields.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the fields to encrypt.
    #[must_use]
    pub fn with_encrypt<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.encrypt = fields.into_iter().map(Into::into).collect();
        self
    }

    /// Returns true if no field is named by any list.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.exclude.is_empty() && self.mask.is_empty() && self.encrypt.is_empty()
    }
}

/// A field injected into an incoming request tree when absent.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExtraField {
    /// Field name to insert.
    pub name: String,
    /// Value inserted when the request does not already carry the field.
    pub value: Value,
}

impl ExtraField {
    pub fn new(name: impl Into<String>, value: Value) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// Field rules for one request-consuming operation.
///
/// The request side only shapes structure: excluded fields are stripped at
/// every depth, declared extra fields are inserted at the root. No masking
/// or encryption happens on the way in.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RequestRules {
    /// Fields stripped from the request.
    #[serde(default)]
    pub exclude: Vec<String>,

    /// Fields inserted at the request root when absent.
    #[serde(default)]
    pub add: Vec<ExtraField>,
}

impl RequestRules {
    /// Creates an empty request rule set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the fields to strip.
    #[must_use]
    pub fn with_exclude<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude = fields.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the extra fields to insert.
    #[must_use]
    pub fn with_add<I>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = ExtraField>,
    {
        self.add = fields.into_iter().collect();
        self
    }

    /// Returns true if the rules neither strip nor insert anything.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.exclude.is_empty() && self.add.is_empty()
    }
}
