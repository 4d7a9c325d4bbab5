//! Reads and writes across mappings and objects.

use nattr_tests::prelude::*;

#[test]
fn test_read_through_object() {
    let tree = fixtures::document();

    assert_eq!(get(&tree, "b.c.d", Ignore).unwrap(), Lookup::Found(&Value::Int(1)));
    assert_eq!(get_or_null(&tree, "b.c.x").unwrap(), Value::Null);
    assert_eq!(get(&tree, "b.c.x", Ignore).unwrap(), Lookup::Ignored);
    assert_eq!(
        get(&tree, "b.c.x", Value::from(7i64)).unwrap(),
        Lookup::Default(Value::Int(7))
    );
}

#[test]
fn test_leaf_in_the_way_reads_as_absent() {
    let tree = fixtures::document();

    assert!(!exists(&tree, "name.first").unwrap());
    assert!(!exists(&tree, "tags.0").unwrap());
    assert_eq!(get(&tree, "name.first", Ignore).unwrap(), Lookup::Ignored);
}

#[test]
fn test_write_lifecycle() {
    let tree = Scenario::new("lifecycle")
        .tree(fixtures::document())
        .step("add sibling", actions::set("b.c.e", 2i64, false), |a| {
            a.written().value("b.c.e", 2i64).value("b.c.d", 1i64)
        })
        .step("overwrite", actions::set("b.c.d", 10i64, false), |a| {
            a.replaced(1i64).value("b.c.d", 10i64)
        })
        .step("merge", actions::update("b.c", map! { "f" => 3i64, "d" => 11i64 }), |a| {
            a.merged(2)
                .value("b.c.d", 11i64)
                .value("b.c.e", 2i64)
                .value("b.c.f", 3i64)
        })
        .step("delete", actions::delete("b.c.e", false), |a| {
            a.deleted(2i64).absent("b.c.e")
        })
        .step("delete again", actions::delete("b.c.e", true), |a| {
            a.missing().unchanged()
        })
        .run()
        .unwrap();

    let c = get_or_null(&tree, "b.c").unwrap();
    let keys: Vec<&str> = c.as_map().unwrap().keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["d", "f"]);
}

#[test]
fn test_set_builds_missing_intermediates() {
    Scenario::new("build")
        .tree(fixtures::document())
        .step("strict", actions::set("b.x.y.z", 1i64, false), |a| {
            a.error("Intermediate missing: 'x' at position 1")
        })
        .step("make missing", actions::set("b.x.y.z", 1i64, true), |a| {
            a.written()
                .value("b.x.y.z", 1i64)
                .value("b.x.y", map! { "z" => 1i64 })
                .value("b.c.d", 1i64)
        })
        .run()
        .unwrap();
}

#[test]
fn test_set_creates_attribute_on_object() {
    let tree = Scenario::new("object")
        .tree(fixtures::document())
        .step("new attribute", actions::set("b.label", "hello", false), |a| {
            a.written().value("b.label", "hello")
        })
        .run()
        .unwrap();

    let b = get_or_null(&tree, "b").unwrap();
    let object = b.as_object().unwrap();
    assert_eq!(object.class(), "B");
    assert!(object.has_attr("label"));
}

#[test]
fn test_mutate_kinds() {
    Scenario::new("mutate")
        .tree(fixtures::document())
        .step(
            "replace",
            actions::mutate(
                "b.c.d",
                Mutator::replace(|v: &Value| Value::Int(v.as_int().unwrap_or(0) + 1)),
                Ignore,
                false,
            ),
            |a| a.replaced(1i64).value("b.c.d", 2i64),
        )
        .step(
            "in place",
            actions::mutate(
                "tags",
                Mutator::in_place(|v: &mut Value| {
                    if let Some(list) = v.as_list_mut() {
                        list.push(Value::from("z"));
                    }
                }),
                Ignore,
                false,
            ),
            |a| {
                a.mutated_in_place().value(
                    "tags",
                    vec![Value::from("x"), Value::from("y"), Value::from("z")],
                )
            },
        )
        .step(
            "missing with ignore",
            actions::mutate(
                "b.c.q",
                Mutator::replace(|_: &Value| -> Value { panic!("must not be called") }),
                Ignore,
                true,
            ),
            |a| a.skipped().unchanged(),
        )
        .step(
            "missing with default",
            actions::mutate(
                "b.c.q",
                Mutator::replace(|v: &Value| Value::Int(v.as_int().unwrap_or(0) * 2)),
                Value::Int(21),
                false,
            ),
            |a| a.written().value("b.c.q", 42i64),
        )
        .step(
            "in place on default is dropped",
            actions::mutate(
                "b.c.r",
                Mutator::in_place(|v: &mut Value| *v = Value::Int(99)),
                Value::Int(0),
                true,
            ),
            |a| a.skipped().absent("b.c.r").unchanged(),
        )
        .run()
        .unwrap();
}

#[test]
fn test_update_replaces_nested_containers_wholesale() {
    Scenario::new("shallow")
        .tree(Value::Map(map! { "cfg" => map! { "inner" => map! { "a" => 1i64, "b" => 2i64 } } }))
        .step(
            "merge",
            actions::update("cfg", map! { "inner" => map! { "c" => 3i64 } }),
            |a| a.merged(1).value("cfg.inner.c", 3i64).absent("cfg.inner.a"),
        )
        .run()
        .unwrap();
}

#[test]
fn test_accessor_with_regex_paths() {
    let mut tree = fixtures::shelter();
    let access = Accessor::new(AccessConfig::regex());

    // First match in natural key order.
    assert_eq!(access.get_or_null(&tree, r"cat_\d.name").unwrap(), Value::from("Tom"));
    assert_eq!(access.find_all(&tree, r"cat_\d.age").unwrap().len(), 2);

    assert_eq!(
        access.set(&mut tree, r"dog_\d.age", 6i64).unwrap(),
        MutationOutcome::Replaced(Value::Int(5))
    );
    assert_eq!(access.set_all(&mut tree, r"cat_\d.age", 0i64).unwrap(), 2);
    assert_eq!(get_or_null(&tree, "cat_2.age").unwrap(), Value::Int(0));
    assert_eq!(get_or_null(&tree, "dog_1.age").unwrap(), Value::Int(6));

    // A pattern terminal only ever selects existing keys.
    assert!(access.set(&mut tree, r"dog_\d.weight", 1i64).is_err());
}

#[test]
fn test_regex_and_literal_agree_on_exact_keys() {
    let tree = fixtures::shelter();
    let regex = Accessor::new(AccessConfig::regex());

    assert_eq!(
        regex.get_or_null(&tree, "dog_1.name").unwrap(),
        get_or_null(&tree, "dog_1.name").unwrap()
    );
    // Anchored: a prefix does not match.
    assert!(!regex.exists(&tree, "dog").unwrap());
}
