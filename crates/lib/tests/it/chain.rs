//! The fluent wrapper end to end: pipelines, rendering, JSON boundary.

use dotmap::{Chain, Direction, List, Map, Value};

use super::helpers::person;

#[test]
fn test_pipeline_from_json_to_groups() {
    let chain = Chain::from_json(
        r#"[
            {"name":"ann","age":30,"team":"red"},
            {"name":"bob","age":25,"team":"blue"},
            {"name":"zoe","age":35,"team":"red"}
        ]"#,
    )
    .unwrap();

    let grouped = chain
        .where_(|r| r.resolve("age").and_then(Value::as_int).unwrap_or(0) >= 30)
        .sort_by("age", Direction::Desc)
        .group_by("team");

    let groups = grouped.value().as_map().unwrap();
    let red = groups.get_key("red").and_then(Value::as_list).unwrap();
    assert_eq!(red.len(), 2);
    assert_eq!(red[0].resolve("name"), Some(&Value::Text("zoe".into())));
    assert!(groups.get_key("blue").is_none());
}

#[test]
fn test_chain_mutators() {
    let chain = Chain::new(Map::new())
        .set("config.retries", 3)
        .push("config.hosts", "a.example")
        .push("config.hosts", "b.example")
        .prepend("config.hosts", "primary.example")
        .forget("config.retries");

    assert!(!chain.has("config.retries"));
    assert_eq!(
        chain.get("config.hosts.0"),
        Some(&Value::Text("primary.example".into()))
    );
    assert_eq!(chain.get("config.hosts.2"), Some(&Value::Text("b.example".into())));
}

#[test]
fn test_chain_slice_chunk_reverse() {
    let chain = Chain::new(List::from(vec![
        Value::Int(1),
        Value::Int(2),
        Value::Int(3),
        Value::Int(4),
    ]));

    assert_eq!(chain.clone().slice(1, 2).values(), List::from(vec![Value::Int(2), Value::Int(3)]));
    assert_eq!(chain.clone().chunk(3).count(), 2);
    assert_eq!(chain.reverse().first(), Some(&Value::Int(4)));
}

#[test]
fn test_chain_key_by_and_flip() {
    let chain = Chain::new(List::from(vec![person("ann", 30), person("bob", 25)]))
        .key_by("name");
    assert_eq!(chain.keys(), vec!["ann".to_string(), "bob".to_string()]);

    let flipped = Chain::new(Map::new().with("a", 1).with("b", 2)).flip();
    assert_eq!(flipped.get("1"), Some(&Value::Text("a".into())));
}

#[test]
fn test_display_indented_fixture() {
    let chain = Chain::from_json(r#"{"name":"Alice","meta":{"age":30},"tags":[1,2]}"#).unwrap();
    let expected = "[\n  \"name\" => \"Alice\",\n  \"meta\" => [\n    \"age\" => 30\n  ],\n  \"tags\" => [1, 2]\n]";
    assert_eq!(format!("{chain}"), expected);
}

#[test]
fn test_random_sample_too_large() {
    let chain = Chain::new(List::from(vec![Value::Int(1)]));
    let err = chain.random(5).unwrap_err();
    assert!(matches!(
        err,
        dotmap::Error::SampleTooLarge {
            requested: 5,
            available: 1
        }
    ));
}

#[test]
fn test_json_boundary() {
    let chain = Chain::new(Map::new()).set("a.b", 1);
    let json = chain.to_json().unwrap();
    let back = Chain::from_json(&json).unwrap();
    assert_eq!(back, chain);

    assert!(Chain::from_json("not json").is_err());
}
