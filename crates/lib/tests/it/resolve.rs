//! End-to-end tests for dot-notation path resolution.

use dotmap::{Map, Value};

use super::helpers::profile;

#[test]
fn test_absent_path_defaults_and_has_false() {
    let map = profile();
    assert!(map.get("user.missing").is_none());
    assert!(!map.has("user.missing"));
    assert_eq!(map.get_or("user.missing", "fallback"), Value::Text("fallback".into()));
}

#[test]
fn test_set_then_get_round_trip() {
    let mut map = profile();
    map.set("user.address.country", "DE");
    assert_eq!(
        map.get("user.address.country"),
        Some(&Value::Text("DE".into()))
    );

    // null is a value, not a miss
    map.set("user.nickname", Value::Null);
    assert!(map.has("user.nickname"));
    assert_eq!(map.get("user.nickname"), Some(&Value::Null));
}

#[test]
fn test_forget_then_has_false() {
    let mut map = profile();
    assert!(map.has("user.address.zip"));
    map.forget("user.address.zip");
    assert!(!map.has("user.address.zip"));
    assert!(map.has("user.address.city"));
}

#[test]
fn test_pull_equals_get_plus_forget() {
    let mut pulled = profile();
    let mut forgotten = profile();

    let value = pulled.pull("user.address.city");
    assert_eq!(value, Some(Value::Text("Berlin".into())));
    forgotten.forget("user.address.city");
    assert_eq!(pulled, forgotten);

    assert_eq!(pulled.pull("user.address.city"), None);
}

#[test]
fn test_literal_dotted_key_shadows_traversal() {
    let json = r#"{"a":{"b":1},"a.b":2}"#;
    let map: Map = serde_json::from_str(json).unwrap();

    assert_eq!(map.get("a.b"), Some(&Value::Int(2)));

    let mut map = map;
    map.forget("a.b");
    // the literal key went first; the nested value is still reachable
    assert_eq!(map.get("a.b"), Some(&Value::Int(1)));
}

#[test]
fn test_list_traversal_from_json() {
    let map: Map =
        serde_json::from_str(r#"{"users":[{"name":"Alice"},{"name":"Bob"}]}"#).unwrap();
    assert_eq!(map.get("users.1.name"), Some(&Value::Text("Bob".into())));
    assert!(map.get("users.2.name").is_none());
}

#[test]
fn test_remember_and_ensure() {
    let mut map = Map::new();
    let mut calls = 0;
    let value = map.remember("expensive", || {
        calls += 1;
        Value::Int(99)
    });
    assert_eq!(value, Value::Int(99));

    let again = map.remember("expensive", || {
        calls += 1;
        Value::Int(0)
    });
    assert_eq!(again, Value::Int(99));
    assert_eq!(calls, 1);

    map.set("existing", 1);
    map.ensure("existing", 0);
    assert_eq!(map.get_as::<i64>("existing"), Some(1));
}

#[test]
fn test_get_or_fail_reports_path() {
    let map = profile();
    let err = map.get_or_fail("user.salary").unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(err.path(), Some("user.salary"));
}
