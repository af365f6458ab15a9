//! Grouping and tree building over record lists.

use dotmap::{List, Value};

use super::helpers::record;

fn typed_records() -> List {
    List::from(vec![
        record(&[("type", Value::Text("a".into())), ("v", Value::Int(1))]),
        record(&[("type", Value::Text("b".into())), ("v", Value::Int(2))]),
        record(&[("type", Value::Text("a".into())), ("v", Value::Int(3))]),
    ])
}

#[test]
fn test_group_by_fixture() {
    let groups = typed_records().group_by("type");

    let keys: Vec<&str> = groups.keys().collect();
    assert_eq!(keys, vec!["a", "b"]);

    let bucket_a = groups.get_key("a").and_then(Value::as_list).unwrap();
    assert_eq!(bucket_a.len(), 2);
    assert_eq!(bucket_a[0].resolve("v"), Some(&Value::Int(1)));
    assert_eq!(bucket_a[1].resolve("v"), Some(&Value::Int(3)));

    let bucket_b = groups.get_key("b").and_then(Value::as_list).unwrap();
    assert_eq!(bucket_b.len(), 1);
    assert_eq!(bucket_b[0].resolve("v"), Some(&Value::Int(2)));
}

#[test]
fn test_group_by_nested_path() {
    let records = List::from(vec![
        record(&[("meta", record(&[("kind", Value::Text("x".into()))]))]),
        record(&[("meta", record(&[("kind", Value::Text("x".into()))]))]),
        record(&[("meta", record(&[("kind", Value::Text("y".into()))]))]),
    ]);
    let groups = records.group_by("meta.kind");
    assert_eq!(groups.get_key("x").and_then(Value::as_list).unwrap().len(), 2);
    assert_eq!(groups.get_key("y").and_then(Value::as_list).unwrap().len(), 1);
}

#[test]
fn test_count_by_and_key_by() {
    let counts = typed_records().count_by("type");
    assert_eq!(counts.get_key("a"), Some(&Value::Int(2)));

    let keyed = typed_records().key_by("type");
    assert_eq!(
        keyed.get_key("a").and_then(|r| r.resolve("v")),
        Some(&Value::Int(3))
    );
}

#[test]
fn test_tree_fixture() {
    let records = List::from(vec![
        record(&[("id", Value::Int(1)), ("parent_id", Value::Null)]),
        record(&[("id", Value::Int(2)), ("parent_id", Value::Int(1))]),
        record(&[("id", Value::Int(3)), ("parent_id", Value::Int(1))]),
    ]);

    let tree = records.tree();
    assert_eq!(tree.len(), 1);

    let root = &tree[0];
    assert_eq!(root.resolve("id"), Some(&Value::Int(1)));

    let children = root.resolve("children").and_then(Value::as_list).unwrap();
    assert_eq!(children.len(), 2);
    assert_eq!(children[0].resolve("id"), Some(&Value::Int(2)));
    assert_eq!(children[1].resolve("id"), Some(&Value::Int(3)));
    for child in children {
        assert!(
            child
                .resolve("children")
                .and_then(Value::as_list)
                .unwrap()
                .is_empty()
        );
    }
}

#[test]
fn test_tree_deep_nesting() {
    let records = List::from(vec![
        record(&[("id", Value::Int(1)), ("parent_id", Value::Null)]),
        record(&[("id", Value::Int(2)), ("parent_id", Value::Int(1))]),
        record(&[("id", Value::Int(3)), ("parent_id", Value::Int(2))]),
    ]);
    let tree = records.tree();
    let grandchild = tree[0]
        .resolve("children.0.children.0.id")
        .and_then(Value::as_int);
    assert_eq!(grandchild, Some(3));
}
