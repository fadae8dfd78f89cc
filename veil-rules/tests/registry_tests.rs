use pretty_assertions::assert_eq;
use serde_json::json;
use veil_rules::{ExtraField, RequestRules, RuleRegistry, RuleSet};

fn profile_rules() -> RuleSet {
    RuleSet::new()
        .with_exclude(["ssn"])
        .with_mask(["email"])
        .with_encrypt(["account_id"])
}

// --- RuleSet ---

#[test]
fn builder_fills_all_three_lists() {
    let rules = profile_rules();
    assert_eq!(rules.exclude, vec!["ssn"]);
    assert_eq!(rules.mask, vec!["email"]);
    assert_eq!(rules.encrypt, vec!["account_id"]);
    assert!(!rules.is_empty());
}

#[test]
fn default_rule_set_is_empty() {
    assert!(RuleSet::new().is_empty());
    assert!(RuleSet::default().is_empty());
}

#[test]
fn rule_set_deserializes_with_missing_lists() {
    let rules: RuleSet = serde_json::from_value(json!({ "mask": ["email"] })).unwrap();
    assert_eq!(rules, RuleSet::new().with_mask(["email"]));
}

#[test]
fn rule_set_serde_roundtrip() {
    let rules = profile_rules();
    let encoded = serde_json::to_string(&rules).unwrap();
    let decoded: RuleSet = serde_json::from_str(&encoded).unwrap();
    assert_eq!(decoded, rules);
}

#[test]
fn request_rules_serde_roundtrip() {
    let rules = RequestRules::new()
        .with_exclude(["internal_id"])
        .with_add([ExtraField::new("source", json!("api"))]);
    let encoded = serde_json::to_string(&rules).unwrap();
    let decoded: RequestRules = serde_json::from_str(&encoded).unwrap();
    assert_eq!(decoded, rules);
}

// --- RuleRegistry ---

#[test]
fn registered_rules_are_found_by_operation() {
    let mut registry = RuleRegistry::new();
    registry.register_response("users.get_profile", profile_rules());

    assert_eq!(
        registry.response_rules("users.get_profile"),
        Some(&profile_rules())
    );
}

#[test]
fn unknown_operation_has_no_rules() {
    let registry = RuleRegistry::new();
    assert!(registry.response_rules("users.get_profile").is_none());
    assert!(registry.request_rules("users.get_profile").is_none());
    assert!(registry.is_empty());
}

#[test]
fn reregistration_replaces_previous_rules() {
    let mut registry = RuleRegistry::new();
    registry.register_response("op", profile_rules());
    registry.register_response("op", RuleSet::new().with_exclude(["token"]));

    let rules = registry.response_rules("op").unwrap();
    assert_eq!(rules.exclude, vec!["token"]);
    assert!(rules.mask.is_empty());
}

#[test]
fn request_and_response_rules_live_under_one_operation() {
    let mut registry = RuleRegistry::new();
    registry.register_response("op", profile_rules());
    registry.register_request("op", RequestRules::new().with_exclude(["internal_id"]));

    assert!(registry.response_rules("op").is_some());
    assert!(registry.request_rules("op").is_some());
    assert_eq!(registry.len(), 1);
}

#[test]
fn len_counts_distinct_operations() {
    let mut registry = RuleRegistry::new();
    registry.register_response("a", profile_rules());
    registry.register_request("b", RequestRules::new().with_exclude(["x"]));
    assert_eq!(registry.len(), 2);
}
