//! Per-operation rule lookup table.
//!
//! The registry is populated once during process wiring and read on every
//! call afterwards. Registration takes `&mut self`, lookups take `&self`,
//! so a wired registry can be shared read-only across in-flight requests
//! without locking.

use crate::rules::{RequestRules, RuleSet};
use std::collections::HashMap;
use tracing::debug;

/// Lookup table from operation identity to its declared rules.
///
/// Operation identity is whatever string the host uses to name a
/// response-producing call site, e.g. `"users.get_profile"`.
#[derive(Clone, Debug, Default)]
pub struct RuleRegistry {
    response: HashMap<String, RuleSet>,
    request: HashMap<String, RequestRules>,
}

impl RuleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers response rules for an operation, replacing any previous
    /// registration under the same identity.
    pub fn register_response(&mut self, operation: impl Into<String>, rules: RuleSet) {
        let operation = operation.into();
        debug!(
            %operation,
            excluded = rules.exclude.len(),
            masked = rules.mask.len(),
            encrypted = rules.encrypt.len(),
            "registered response rules"
        );
        self.response.insert(operation, rules);
    }

    /// Registers request rules for an operation.
    pub fn register_request(&mut self, operation: impl Into<String>, rules: RequestRules) {
        let operation = operation.into();
        debug!(
            %operation,
            excluded = rules.exclude.len(),
            added = rules.add.len(),
            "registered request rules"
        );
        self.request.insert(operation, rules);
    }

    /// Looks up the response rules declared for an operation.
    #[must_use]
    pub fn response_rules(&self, operation: &str) -> Option<&RuleSet> {
        self.response.get(operation)
    }

    /// Looks up the request rules declared for an operation.
    #[must_use]
    pub fn request_rules(&self, operation: &str) -> Option<&RequestRules> {
        self.request.get(operation)
    }

    /// Returns the number of operations with registered rules.
    #[must_use]
    pub fn len(&self) -> usize {
        let mut operations: Vec<&str> = self.response.keys().map(String::as_str).collect();
        operations.extend(self.request.keys().map(String::as_str));
        operations.sort_unstable();
        operations.dedup();
        operations.len()
    }

    /// Returns true if no rules are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.response.is_empty() && self.request.is_empty()
    }
}
