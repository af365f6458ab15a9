//! Shared fixtures for the integration suite.

use dotmap::{List, Map, Value};

/// Builds a map record from literal pairs.
pub fn record(pairs: &[(&str, Value)]) -> Value {
    let mut map = Map::new();
    for (key, value) in pairs {
        map.insert(key.to_string(), value.clone());
    }
    Value::Map(map)
}

/// A person record with `name` and `age` fields.
pub fn person(name: &str, age: i64) -> Value {
    record(&[
        ("name", Value::Text(name.to_string())),
        ("age", Value::Int(age)),
    ])
}

/// A nested profile map used across the path and flatten tests.
pub fn profile() -> Map {
    let mut map = Map::new();
    map.set("user.name", "Alice");
    map.set("user.address.city", "Berlin");
    map.set("user.address.zip", "10115");
    map.set(
        "user.roles",
        Value::List(List::from(vec![
            Value::Text("admin".into()),
            Value::Text("dev".into()),
        ])),
    );
    map.set("active", true);
    map
}
