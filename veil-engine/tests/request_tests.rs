use pretty_assertions::assert_eq;
use serde_json::json;
use veil_engine::{ExtraField, RequestRules, shape_request};

#[test]
fn strips_excluded_fields_at_every_depth() {
    let rules = RequestRules::new().with_exclude(["role"]);

    let mut request = json!({
        "role": "admin",
        "user": { "name": "Jane", "role": "admin" },
        "grants": [ { "role": "admin", "scope": "read" } ],
    });
    shape_request(&mut request, &rules);

    assert_eq!(
        request,
        json!({
            "user": { "name": "Jane" },
            "grants": [ { "scope": "read" } ],
        })
    );
}

#[test]
fn inserts_extra_fields_at_the_root() {
    let rules = RequestRules::new().with_add([
        ExtraField::new("source", json!("api")),
        ExtraField::new("attempt", json!(1)),
    ]);

    let mut request = json!({ "name": "Jane" });
    shape_request(&mut request, &rules);

    assert_eq!(request, json!({ "name": "Jane", "source": "api", "attempt": 1 }));
}

#[test]
fn never_overwrites_a_field_the_client_sent() {
    let rules = RequestRules::new().with_add([ExtraField::new("source", json!("api"))]);

    let mut request = json!({ "source": "mobile" });
    shape_request(&mut request, &rules);

    assert_eq!(request, json!({ "source": "mobile" }));
}

#[test]
fn extra_fields_are_not_inserted_into_nested_objects() {
    let rules = RequestRules::new().with_add([ExtraField::new("source", json!("api"))]);

    let mut request = json!({ "user": { "name": "Jane" } });
    shape_request(&mut request, &rules);

    assert_eq!(request, json!({ "user": { "name": "Jane" }, "source": "api" }));
}

#[test]
fn non_object_root_gets_no_insertions() {
    let rules = RequestRules::new().with_add([ExtraField::new("source", json!("api"))]);

    let mut request = json!(["a", "b"]);
    shape_request(&mut request, &rules);
    assert_eq!(request, json!(["a", "b"]));
}

#[test]
fn empty_rules_are_a_no_op() {
    let mut request = json!({ "name": "Jane" });
    shape_request(&mut request, &RequestRules::new());
    assert_eq!(request, json!({ "name": "Jane" }));
}

#[test]
fn strip_and_add_compose_on_one_request() {
    let rules = RequestRules::new()
        .with_exclude(["internal_id"])
        .with_add([ExtraField::new("source", json!("api"))]);

    let mut request = json!({ "internal_id": 7, "name": "Jane" });
    shape_request(&mut request, &rules);

    assert_eq!(request, json!({ "name": "Jane", "source": "api" }));
}
