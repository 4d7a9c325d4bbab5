//! Product population.

use nattr::{
    get_or_null, mutate, populate_product, product_paths, Ignore, MutationOutcome, Mutator,
    PopulateError, Value,
};

#[test]
fn test_every_combination_gets_its_own_leaf() {
    // GIVEN
    let layers = [vec!["north", "south"], vec!["web", "db"]];

    // WHEN
    let mut tree = populate_product(&layers[..], &Value::List(Vec::new())).unwrap();
    let outcome = mutate(
        &mut tree,
        "north.db",
        Mutator::in_place(|v: &mut Value| {
            if let Some(list) = v.as_list_mut() {
                list.push(Value::Int(1));
            }
        }),
        Ignore,
        false,
    )
    .unwrap();

    // THEN
    assert_eq!(outcome, MutationOutcome::MutatedInPlace);
    for path in product_paths(&layers[..]).unwrap() {
        let expected = if path == "north.db" { 1 } else { 0 };
        let leaf = get_or_null(&tree, path.as_str()).unwrap();
        assert_eq!(leaf.as_list().map(Vec::len), Some(expected), "leaf at {}", path);
    }
}

#[test]
fn test_shared_prefixes_share_containers() {
    let tree = populate_product(&[vec!["a"], vec!["x", "y", "z"]], &Value::Null).unwrap();

    let a = get_or_null(&tree, "a").unwrap();
    assert_eq!(a.as_map().map(|m| m.len()), Some(3));
    assert_eq!(tree.as_map().map(|m| m.len()), Some(1));
}

#[test]
fn test_empty_layer_is_reported() {
    let layers: [Vec<&str>; 3] = [vec!["a"], vec!["b"], vec![]];

    match populate_product(&layers[..], &Value::Null) {
        Err(PopulateError::EmptyLayer { index }) => assert_eq!(index, 2),
        other => panic!("expected EmptyLayer, got {:?}", other),
    }
}
