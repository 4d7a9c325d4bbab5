//! Product population.

use nattr_core::Tree;
use nattr_mutation::set;
use tracing::debug;

use crate::error::{PopulateError, PopulateResult};

/// Every combination of one key per layer, joined with `.`.
///
/// Combinations come out in product order: the last layer varies fastest.
/// No layers at all yields no paths.
pub fn product_paths<L, S>(layers: &[L]) -> PopulateResult<Vec<String>>
where
    L: AsRef<[S]>,
    S: AsRef<str>,
{
    if let Some(index) = layers.iter().position(|layer| layer.as_ref().is_empty()) {
        return Err(PopulateError::empty_layer(index));
    }
    if layers.is_empty() {
        return Ok(Vec::new());
    }

    let mut combinations: Vec<Vec<&str>> = vec![Vec::new()];
    for layer in layers {
        combinations = combinations
            .into_iter()
            .flat_map(|prefix| {
                layer.as_ref().iter().map(move |key| {
                    let mut next = prefix.clone();
                    next.push(key.as_ref());
                    next
                })
            })
            .collect();
    }
    Ok(combinations.into_iter().map(|keys| keys.join(".")).collect())
}

/// Build a tree with one branch per combination of `layers`, each leaf
/// set to its own clone of `terminal_value`.
///
/// Every layer must hold at least one key. Keys are written as literal
/// path segments, so a key containing `.` adds a level of its own and an
/// empty key is a malformed path.
pub fn populate_product<V, L, S>(layers: &[L], terminal_value: &V) -> PopulateResult<V>
where
    V: Tree,
    L: AsRef<[S]>,
    S: AsRef<str>,
{
    let paths = product_paths(layers)?;
    let mut root = V::empty_mapping();
    for path in &paths {
        set(&mut root, path.as_str(), terminal_value.clone(), true)?;
    }
    debug!(layers = layers.len(), leaves = paths.len(), "populated product");
    Ok(root)
}
