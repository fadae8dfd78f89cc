//! Request-side tree shaping.
//!
//! Incoming request trees get structural shaping only: declared fields are
//! stripped before the handler sees them, and declared extra fields are
//! injected with their default values. Nothing on the request side is
//! masked or encrypted.

use serde_json::Value;
use tracing::debug;
use veil_rules::RequestRules;

/// Rewrites an incoming request tree in place according to `rules`.
///
/// Excluded fields are removed at every depth, with the same traversal
/// semantics as response redaction. Extra fields are inserted at the root
/// object only, and only when absent; a value the client sent is never
/// overwritten. Non-object roots receive no insertions.
pub fn shape_request(value: &mut Value, rules: &RequestRules) {
    let mut stripped = 0usize;
    strip(value, &rules.exclude, &mut stripped);

    let mut added = 0usize;
    if let Value::Object(fields) = value {
        for extra in &rules.add {
            if !fields.contains_key(&extra.name) {
                fields.insert(extra.name.clone(), extra.value.clone());
                added += 1;
            }
        }
    }

    debug!(stripped, added, "request shaping applied");
}

fn strip(value: &mut Value, exclude: &[String], stripped: &mut usize) {
    match value {
        Value::Object(fields) => {
            for name in exclude {
                if fields.remove(name).is_some() {
                    *stripped += 1;
                }
            }
            for child in fields.values_mut() {
                strip(child, exclude, stripped);
            }
        }
        Value::Array(items) => {
            for item in items {
                strip(item, exclude, stripped);
            }
        }
        _ => {}
    }
}
