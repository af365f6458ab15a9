//! Flatten/expand round trips over realistic payloads.

use dotmap::{Map, Value};

use super::helpers::profile;

#[test]
fn test_dot_flattens_to_leaf_paths() {
    let flat = profile().dot();
    assert_eq!(flat.get_key("user.address.city"), Some(&Value::Text("Berlin".into())));
    assert_eq!(flat.get_key("user.roles.0"), Some(&Value::Text("admin".into())));
    assert_eq!(flat.get_key("active"), Some(&Value::Bool(true)));
    // no non-empty containers survive flattening
    assert!(flat.values().all(|v| !v.is_container()));
}

#[test]
fn test_undot_dot_is_identity() {
    let original = profile();
    assert_eq!(original.dot().undot(), original);
}

#[test]
fn test_undot_from_decoded_config() {
    let flat: Map = serde_json::from_str(
        r#"{"db.host":"localhost","db.port":5432,"db.tls":false}"#,
    )
    .unwrap();
    let nested = flat.undot();
    assert_eq!(nested.get("db.host"), Some(&Value::Text("localhost".into())));
    assert_eq!(nested.get_as::<i64>("db.port"), Some(5432));
    let db = nested.get_key("db").and_then(Value::as_map).unwrap();
    assert_eq!(db.len(), 3);
}

#[test]
fn test_paths_lists_every_prefix() {
    let paths = profile().paths();
    for expected in [
        "user",
        "user.name",
        "user.address",
        "user.address.city",
        "user.roles.1",
        "active",
    ] {
        assert!(paths.iter().any(|p| p == expected), "missing {expected}");
    }
}
