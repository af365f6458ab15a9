//! Cross products, multi-key sorting, recursive diff/merge, equality.

use dotmap::{
    Direction, List, Map, Value,
    combine::{cross_join, equals},
};

use super::helpers::{person, record};

#[test]
fn test_cartesian_fixture_order() {
    let mut input = Map::new();
    input.insert("x", Value::List(List::from(vec![Value::Int(1), Value::Int(2)])));
    input.insert("y", Value::List(List::from(vec![Value::Int(3), Value::Int(4)])));

    let product = input.cartesian();
    let pairs: Vec<(i64, i64)> = product
        .iter()
        .map(|combo| {
            (
                combo.resolve("x").and_then(Value::as_int).unwrap(),
                combo.resolve("y").and_then(Value::as_int).unwrap(),
            )
        })
        .collect();
    assert_eq!(pairs, vec![(1, 3), (1, 4), (2, 3), (2, 4)]);
}

#[test]
fn test_cross_join_positional() {
    let sizes = List::from(vec![Value::Text("S".into()), Value::Text("M".into())]);
    let colors = List::from(vec![Value::Text("red".into()), Value::Text("blue".into())]);

    let rows = cross_join(&[sizes, colors]);
    assert_eq!(rows.len(), 4);
    let first = rows[0].as_list().unwrap();
    assert_eq!(first.get(0), Some(&Value::Text("S".into())));
    assert_eq!(first.get(1), Some(&Value::Text("red".into())));
    let last = rows[3].as_list().unwrap();
    assert_eq!(last.get(0), Some(&Value::Text("M".into())));
    assert_eq!(last.get(1), Some(&Value::Text("blue".into())));
}

#[test]
fn test_sort_by_many_fixture_with_age_ties() {
    let records = List::from(vec![
        person("ann", 30),
        person("bob", 25),
        person("zoe", 30),
        person("amy", 25),
        person("cid", 40),
    ]);

    let sorted = records.sort_by_many(&[("age", Direction::Asc), ("name", Direction::Desc)]);
    let names: Vec<&str> = sorted
        .iter()
        .filter_map(|r| r.resolve("name").and_then(Value::as_text))
        .collect();
    // both age ties fall back to descending name
    assert_eq!(names, vec!["bob", "amy", "zoe", "ann", "cid"]);
}

#[test]
fn test_sort_by_many_full_tie_is_stable() {
    let records = List::from(vec![
        record(&[("age", Value::Int(1)), ("tag", Value::Text("first".into()))]),
        record(&[("age", Value::Int(1)), ("tag", Value::Text("second".into()))]),
    ]);
    let sorted = records.sort_by_many(&[("age", Direction::Asc)]);
    assert_eq!(sorted[0].resolve("tag"), Some(&Value::Text("first".into())));
}

#[test]
fn test_diff_recursive_fixture() {
    let a: Map = serde_json::from_str(r#"{"a":1,"b":{"c":2,"d":3}}"#).unwrap();
    let b: Map = serde_json::from_str(r#"{"a":1,"b":{"c":2,"d":4}}"#).unwrap();

    let diff = a.diff_recursive(&b);
    let expected: Map = serde_json::from_str(r#"{"b":{"d":3}}"#).unwrap();
    assert_eq!(diff, expected);
}

#[test]
fn test_merge_recursive_with_collision_callback() {
    let a: Map = serde_json::from_str(r#"{"hits":1,"meta":{"x":1}}"#).unwrap();
    let b: Map = serde_json::from_str(r#"{"hits":2,"meta":{"y":3}}"#).unwrap();

    let merged = a.merge_recursive_with(&b, |mine, theirs, _| {
        match (mine.as_int(), theirs.as_int()) {
            (Some(x), Some(y)) => Value::Int(x + y),
            _ => theirs.clone(),
        }
    });
    assert_eq!(merged.get("hits"), Some(&Value::Int(3)));
    assert_eq!(merged.get("meta.x"), Some(&Value::Int(1)));
    assert_eq!(merged.get("meta.y"), Some(&Value::Int(3)));
}

#[test]
fn test_equals_strict_and_loose() {
    assert!(!equals(&Value::Int(1), &Value::Text("1".into()), true));
    assert!(equals(&Value::Int(1), &Value::Text("1".into()), false));
    assert!(equals(&Value::Int(1), &Value::Float(1.0), false));
    assert!(!equals(&Value::Int(1), &Value::Float(1.0), true));
}

#[test]
fn test_combine_length_mismatch_fails_fast() {
    let keys = List::from(vec![Value::Text("a".into()), Value::Text("b".into())]);
    let values = List::from(vec![Value::Int(1)]);
    let err = Map::combine(&keys, &values).unwrap_err();
    assert!(matches!(
        err,
        dotmap::Error::LengthMismatch { keys: 2, values: 1 }
    ));
}
