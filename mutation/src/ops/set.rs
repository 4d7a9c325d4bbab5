//! SET operation - stores a value at a path.

use nattr_core::Tree;
use nattr_parser::AsPath;
use nattr_resolver::plan;

use crate::error::{failed, MutationResult};
use crate::result::MutationOutcome;

/// Store `value` at `path`.
///
/// Intermediates must exist unless `make_missing` is set, in which case
/// each absent literal intermediate becomes an empty mapping. The terminal
/// key is created when absent and overwritten when present, so repeating a
/// set is harmless.
pub fn set<V, P>(
    root: &mut V,
    path: &P,
    value: impl Into<V>,
    make_missing: bool,
) -> MutationResult<MutationOutcome<V>>
where
    V: Tree,
    P: AsPath + ?Sized,
{
    let path = path.as_path()?;
    let route = plan(&*root, &path, make_missing).map_err(|e| failed("set", e))?;
    let parent = route.open(root).map_err(|e| failed("set", e))?;

    Ok(match parent.insert(route.terminal().to_string(), value.into()) {
        Some(previous) => MutationOutcome::Replaced(previous),
        None => MutationOutcome::Written,
    })
}
