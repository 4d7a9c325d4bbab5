//! MUTATE operation - applies a function to the value at a path.

use nattr_core::{Fallback, Tree};
use nattr_parser::AsPath;
use nattr_resolver::{plan, resolve};
use tracing::debug;

use crate::error::{failed, MutationError, MutationResult};
use crate::mutator::Mutator;
use crate::result::MutationOutcome;

/// Apply `mutator` to the value at `path`.
///
/// The current value is read with read semantics. When the path is absent
/// the mutator sees `getter_default` instead:
/// - `Ignore` skips the call entirely and leaves the tree alone.
/// - A replacing mutator's result is written with set semantics, honoring
///   `make_missing`.
/// - An in-place mutator edits a temporary copy of the default, which is
///   then dropped.
pub fn mutate<V, P>(
    root: &mut V,
    path: &P,
    mutator: Mutator<'_, V>,
    getter_default: impl Into<Fallback<V>>,
    make_missing: bool,
) -> MutationResult<MutationOutcome<V>>
where
    V: Tree,
    P: AsPath + ?Sized,
{
    let path = path.as_path()?;

    let missed = resolve(&*root, &path).err();
    if let Some(miss) = missed {
        debug!(path = %path, index = miss.index, kind = ?miss.kind, "mutating absent path");
        let default = match getter_default.into() {
            Fallback::Value(default) => default,
            Fallback::Ignore => return Ok(MutationOutcome::Skipped),
        };
        return match mutator {
            Mutator::InPlace(f) => {
                let mut scratch = default;
                f(&mut scratch);
                Ok(MutationOutcome::Skipped)
            }
            Mutator::Replace(f) => {
                let route = plan(&*root, &path, make_missing).map_err(|e| failed("mutate", e))?;
                let value = f(&default);
                let parent = route.open(root).map_err(|e| failed("mutate", e))?;
                Ok(match parent.insert(route.terminal().to_string(), value) {
                    Some(previous) => MutationOutcome::Replaced(previous),
                    None => MutationOutcome::Written,
                })
            }
        };
    }

    let route = plan(&*root, &path, false).map_err(|e| failed("mutate", e))?;
    let index = route.keys().len() - 1;
    let slot = route
        .open(root)
        .map_err(|e| failed("mutate", e))?
        .get_mut(route.terminal())
        .ok_or_else(|| {
            failed(
                "mutate",
                MutationError::key_not_found(route.path(), index, route.terminal()),
            )
        })?;

    Ok(match mutator {
        Mutator::InPlace(f) => {
            f(slot);
            MutationOutcome::MutatedInPlace
        }
        Mutator::Replace(f) => {
            let value = f(&*slot);
            MutationOutcome::Replaced(std::mem::replace(slot, value))
        }
    })
}
