//! Read-mode resolution.

use nattr_core::Tree;
use nattr_parser::Path;
use tracing::trace;

use crate::error::Miss;
use crate::select::select_key;

/// A fully resolved path: the terminal value together with the container
/// holding it and the concrete key it sits under.
#[derive(Debug)]
pub struct Found<'a, V> {
    pub parent: &'a V,
    pub key: String,
    pub value: &'a V,
}

/// Walk every segment of `path` from `root`.
///
/// Stops at the first segment that cannot be resolved, reporting its
/// position and whether the key was absent or the value was a leaf.
/// Never creates anything.
pub fn resolve<'a, V: Tree>(root: &'a V, path: &Path) -> Result<Found<'a, V>, Miss> {
    let mut parent = root;
    let mut current = root;
    let mut key = String::new();

    for (index, segment) in path.segments().iter().enumerate() {
        let container = current
            .as_container()
            .ok_or_else(|| Miss::not_traversable(index, segment.as_str(), current.type_name()))?;
        let selected = select_key(container, segment)
            .ok_or_else(|| Miss::key_not_found(index, segment.as_str(), current.type_name()))?;
        let child = container
            .get(&selected)
            .ok_or_else(|| Miss::key_not_found(index, segment.as_str(), current.type_name()))?;

        trace!(index, key = %selected, shape = %child.shape(), "resolved segment");
        parent = current;
        current = child;
        key = selected;
    }

    Ok(Found {
        parent,
        key,
        value: current,
    })
}

/// Follow concrete keys from `root`. Returns `None` as soon as a key is
/// absent or a leaf is in the way.
pub fn descend<'a, V: Tree>(root: &'a V, keys: &[String]) -> Option<&'a V> {
    keys.iter()
        .try_fold(root, |current, key| current.as_container()?.get(key))
}

/// Mutable counterpart of [`descend`].
pub fn descend_mut<'a, V: Tree>(root: &'a mut V, keys: &[String]) -> Option<&'a mut V> {
    let mut current = root;
    for key in keys {
        current = current.as_container_mut()?.get_mut(key)?;
    }
    Some(current)
}
