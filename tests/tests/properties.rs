//! Property-based tests for the traversal operations.
//!
//! These hold for any literal path over a tree built by the operations
//! themselves.

use proptest::prelude::*;

use nattr::{
    delete, exists, get, populate_product, set, Ignore, Lookup, MutationOutcome, Value,
};

// ============================================================================
// Test Strategies
// ============================================================================

/// Strategy: one path segment.
fn key_strategy() -> impl Strategy<Value = String> {
    "[a-z]{1,6}"
}

/// Strategy: a path of one to five segments.
fn path_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(key_strategy(), 1..=5)
}

/// Strategy: a leaf value.
fn leaf_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::Int),
        "[ -~]{0,12}".prop_map(Value::String),
    ]
}

/// Strategy: up to three layers of distinct keys.
fn layers_strategy() -> impl Strategy<Value = Vec<Vec<String>>> {
    prop::collection::vec(
        prop::collection::btree_set(key_strategy(), 1..4)
            .prop_map(|keys| keys.into_iter().collect::<Vec<_>>()),
        0..=3,
    )
}

fn count_containers(value: &Value) -> usize {
    match value {
        Value::Map(map) => 1 + map.values().map(count_containers).sum::<usize>(),
        Value::Object(object) => {
            1 + object.attributes().values().map(count_containers).sum::<usize>()
        }
        _ => 0,
    }
}

fn count_leaves(value: &Value) -> usize {
    match value {
        Value::Map(map) => map.values().map(count_leaves).sum(),
        Value::Object(object) => object.attributes().values().map(count_leaves).sum(),
        _ => 1,
    }
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    /// A value written with `make_missing` reads back unchanged.
    #[test]
    fn prop_set_then_get(keys in path_strategy(), leaf in leaf_strategy()) {
        let path = keys.join(".");
        let mut tree = Value::map();

        prop_assert_eq!(
            set(&mut tree, path.as_str(), leaf.clone(), true).unwrap(),
            MutationOutcome::Written
        );
        prop_assert_eq!(get(&tree, path.as_str(), Ignore).unwrap(), Lookup::Found(&leaf));
    }

    /// Building a path from nothing creates exactly one container per
    /// intermediate segment.
    #[test]
    fn prop_make_missing_creates_one_container_per_intermediate(keys in path_strategy()) {
        let path = keys.join(".");
        let mut tree = Value::map();

        set(&mut tree, path.as_str(), 0i64, true).unwrap();

        prop_assert_eq!(count_containers(&tree), keys.len());
        prop_assert_eq!(count_leaves(&tree), 1);
    }

    /// After a delete the path no longer exists, a second strict delete
    /// fails and a tolerant one is a no-op.
    #[test]
    fn prop_delete_then_absent(keys in path_strategy(), leaf in leaf_strategy()) {
        let path = keys.join(".");
        let mut tree = Value::map();
        set(&mut tree, path.as_str(), leaf.clone(), true).unwrap();

        prop_assert_eq!(
            delete(&mut tree, path.as_str(), false).unwrap(),
            MutationOutcome::Deleted(leaf)
        );
        prop_assert!(!exists(&tree, path.as_str()).unwrap());

        let before = tree.clone();
        prop_assert!(delete(&mut tree, path.as_str(), false).is_err());
        prop_assert_eq!(delete(&mut tree, path.as_str(), true).unwrap(), MutationOutcome::Missing);
        prop_assert_eq!(tree, before);
    }

    /// Reading an absent path hands back the default, or `Ignored`.
    #[test]
    fn prop_absent_read_uses_default(keys in path_strategy(), default in leaf_strategy()) {
        let path = keys.join(".");
        let tree = Value::map();

        prop_assert_eq!(
            get(&tree, path.as_str(), default.clone()).unwrap(),
            Lookup::Default(default)
        );
        prop_assert_eq!(get(&tree, path.as_str(), Ignore).unwrap(), Lookup::Ignored);
    }

    /// A strict write under a missing intermediate fails without touching
    /// the tree.
    #[test]
    fn prop_strict_write_is_atomic(
        existing in path_strategy(),
        head in key_strategy(),
        tail in path_strategy(),
    ) {
        let mut tree = Value::map();
        set(&mut tree, existing.join(".").as_str(), 1i64, true).unwrap();
        prop_assume!(!exists(&tree, head.as_str()).unwrap());

        let path = format!("{}.{}", head, tail.join("."));
        let before = tree.clone();

        prop_assert!(set(&mut tree, path.as_str(), 2i64, false).is_err());
        prop_assert_eq!(tree, before);
    }

    /// Population produces one leaf per combination of layer keys.
    #[test]
    fn prop_populate_leaf_count(layers in layers_strategy()) {
        let tree = populate_product(layers.as_slice(), &Value::Null).unwrap();
        let expected: usize = if layers.is_empty() {
            0
        } else {
            layers.iter().map(Vec::len).product()
        };

        prop_assert_eq!(count_leaves(&tree), expected);
    }
}
