//! DELETE operation - removes the value at a path.

use nattr_core::Tree;
use nattr_parser::AsPath;
use nattr_resolver::{plan, resolve, MissKind};
use tracing::debug;

use crate::error::{failed, MutationError, MutationResult};
use crate::result::MutationOutcome;

/// Remove the value at `path` and hand it back.
///
/// The walk is a read: nothing is created on the way. When a segment has
/// no match the call fails with `KeyNotFound`, or succeeds as
/// [`MutationOutcome::Missing`] if `allow_missing` is set. A leaf in the way
/// is always an error.
pub fn delete<V, P>(
    root: &mut V,
    path: &P,
    allow_missing: bool,
) -> MutationResult<MutationOutcome<V>>
where
    V: Tree,
    P: AsPath + ?Sized,
{
    let path = path.as_path()?;

    let missed = resolve(&*root, &path).err();
    if let Some(miss) = missed {
        if allow_missing && miss.kind == MissKind::KeyNotFound {
            debug!(path = %path, index = miss.index, "nothing to delete");
            return Ok(MutationOutcome::Missing);
        }
        return Err(failed("delete", miss.into_error(&path)));
    }

    let route = plan(&*root, &path, false).map_err(|e| failed("delete", e))?;
    let index = path.len() - 1;
    let removed = route
        .open(root)
        .map_err(|e| failed("delete", e))?
        .remove(route.terminal())
        .ok_or_else(|| {
            failed(
                "delete",
                MutationError::key_not_found(path.as_str(), index, route.terminal()),
            )
        })?;
    Ok(MutationOutcome::Deleted(removed))
}
