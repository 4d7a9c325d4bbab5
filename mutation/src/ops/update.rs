//! UPDATE operation - shallow merge into a mapping or object.

use nattr_core::Tree;
use nattr_parser::AsPath;
use std::collections::HashSet;

use nattr_resolver::{descend, plan};

use crate::error::{failed, MutationError, MutationResult};
use crate::result::MutationOutcome;

/// Merge `update` into the container at `path`.
///
/// The target must already exist and be mapping-like or an object, whose
/// attribute store receives the keys. Each key in `update` overwrites or
/// creates one entry; keys not in `update` are kept where they are. Nested
/// containers are replaced wholesale, never merged.
///
/// An absent intermediate is `IntermediateMissing`, as for [`set`](crate::set);
/// an absent target is `KeyNotFound`. The outcome counts distinct keys.
pub fn update<V, P, I>(root: &mut V, path: &P, update: I) -> MutationResult<MutationOutcome<V>>
where
    V: Tree,
    P: AsPath + ?Sized,
    I: IntoIterator<Item = (String, V)>,
{
    let path = path.as_path()?;
    let index = path.len() - 1;

    let route = plan(&*root, &path, false).map_err(|e| failed("update", e))?;
    let target = descend(&*root, route.keys()).ok_or_else(|| {
        failed(
            "update",
            MutationError::key_not_found(path.as_str(), index, route.terminal()),
        )
    })?;
    if !target.shape().is_container() {
        let type_name = target.type_name();
        return Err(failed(
            "update",
            MutationError::not_mapping_like(path.as_str(), index, type_name),
        ));
    }

    let container = route
        .open(root)
        .map_err(|e| failed("update", e))?
        .get_mut(route.terminal())
        .and_then(V::as_container_mut)
        .ok_or_else(|| {
            failed(
                "update",
                MutationError::key_not_found(path.as_str(), index, route.terminal()),
            )
        })?;

    // A key repeated in `update` is merged once, last value wins.
    let mut merged = HashSet::new();
    for (key, value) in update {
        container.insert(key.clone(), value);
        merged.insert(key);
    }
    Ok(MutationOutcome::Merged(merged.len()))
}
