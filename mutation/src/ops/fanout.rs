//! Fan-out writers - apply an operation to every match of a path.
//!
//! The single-target writers resolve a pattern segment to its first match.
//! These variants follow every match instead. Targets are collected
//! read-only first; branches that dead-end (a missing key, a leaf in the
//! way) are skipped rather than reported, and nothing is ever created.

use nattr_core::{Container, Tree};
use nattr_parser::{AsPath, Segment};
use nattr_resolver::{descend_mut, expand, matching_keys};
use tracing::debug;

use crate::error::{failed, MutationError, MutationResult};

/// Store a copy of `value` at every location `path` selects.
///
/// Intermediates are expanded over every match. At each parent reached, a
/// literal terminal is written whether or not it exists yet, while a
/// pattern terminal overwrites each existing matching key. Returns the
/// number of locations written.
pub fn set_all<V, P>(root: &mut V, path: &P, value: impl Into<V>) -> MutationResult<usize>
where
    V: Tree,
    P: AsPath + ?Sized,
{
    let path = path.as_path()?;
    let value = value.into();
    let (terminal, intermediates) = path.split_last();

    let mut targets = Vec::new();
    for parent in expand(&*root, intermediates) {
        let container = match parent.value.as_container() {
            Some(container) => container,
            None => continue,
        };
        let keys = match terminal {
            Segment::Literal(name) => vec![name.clone()],
            Segment::Pattern(_) => matching_keys(container, terminal),
        };
        targets.extend(keys.into_iter().map(|key| (parent.keys.clone(), key)));
    }

    let mut written = 0;
    for (parent, key) in targets {
        if let Some(container) = open_parent(root, &parent) {
            container.insert(key, value.clone());
            written += 1;
        }
    }
    debug!(path = %path, written, "set_all");
    Ok(written)
}

/// Shallow-merge `update` into every container `path` selects.
///
/// Fails with `NotMappingLike`, before touching anything, if any selected
/// value is a leaf. Returns the number of containers updated.
pub fn update_all<V, P, I>(root: &mut V, path: &P, update: I) -> MutationResult<usize>
where
    V: Tree,
    P: AsPath + ?Sized,
    I: IntoIterator<Item = (String, V)>,
{
    let path = path.as_path()?;
    let update: Vec<(String, V)> = update.into_iter().collect();

    let mut targets = Vec::new();
    for target in expand(&*root, path.segments()) {
        if !target.value.shape().is_container() {
            return Err(failed(
                "update_all",
                MutationError::not_mapping_like(
                    target.path(),
                    path.len() - 1,
                    target.value.type_name(),
                ),
            ));
        }
        targets.push(target.keys);
    }

    let mut updated = 0;
    for keys in targets {
        if let Some(container) = open_parent(root, &keys) {
            for (key, value) in &update {
                container.insert(key.clone(), value.clone());
            }
            updated += 1;
        }
    }
    debug!(path = %path, updated, "update_all");
    Ok(updated)
}

/// Remove every value `path` selects. Returns how many were removed.
pub fn delete_all<V, P>(root: &mut V, path: &P) -> MutationResult<usize>
where
    V: Tree,
    P: AsPath + ?Sized,
{
    let path = path.as_path()?;
    let targets: Vec<Vec<String>> = expand(&*root, path.segments())
        .into_iter()
        .map(|target| target.keys)
        .collect();

    let mut removed = 0;
    for mut keys in targets {
        let key = match keys.pop() {
            Some(key) => key,
            None => continue,
        };
        if let Some(container) = open_parent(root, &keys) {
            if container.remove(&key).is_some() {
                removed += 1;
            }
        }
    }
    debug!(path = %path, removed, "delete_all");
    Ok(removed)
}

fn open_parent<'a, V: Tree>(
    root: &'a mut V,
    keys: &[String],
) -> Option<&'a mut dyn Container<V>> {
    descend_mut(root, keys)?.as_container_mut()
}
