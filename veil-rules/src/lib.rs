//! Rule declarations for the veil redaction pipeline.
//!
//! An endpoint that produces sensitive responses declares *which* fields
//! need redaction, not *how*: a [`RuleSet`] names the fields to exclude,
//! mask, and encrypt, and the engine in `veil-engine` applies them to the
//! serialized response tree.
//!
//! Rules are declared once per operation and collected in a [`RuleRegistry`]
//! during process wiring. The registry is an explicit lookup table keyed by
//! operation identity; there is no runtime inspection of handler metadata.
//! After wiring it is shared read-only across all in-flight requests.

mod registry;
mod rules;

pub use registry::RuleRegistry;
pub use rules::{ExtraField, RequestRules, RuleSet};
