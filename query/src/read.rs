//! Single-value reads.

use nattr_core::{Fallback, Tree};
use nattr_parser::{AsPath, ParseResult};
use nattr_resolver::resolve;
use tracing::trace;

use crate::lookup::Lookup;

/// Read the value at `path`.
///
/// Any resolution failure (a missing key, an unmatched pattern, a leaf in
/// the way) hands back `default` verbatim, `Ignore` included. Only a
/// malformed path is an error.
pub fn get<'a, V, P>(
    root: &'a V,
    path: &P,
    default: impl Into<Fallback<V>>,
) -> ParseResult<Lookup<'a, V>>
where
    V: Tree,
    P: AsPath + ?Sized,
{
    let path = path.as_path()?;
    match resolve(root, &path) {
        Ok(found) => Ok(Lookup::Found(found.value)),
        Err(miss) => {
            trace!(path = %path, index = miss.index, kind = ?miss.kind, "read fell back to default");
            Ok(Lookup::absent(default.into()))
        }
    }
}

/// Read the value at `path`, or the domain's null when it is absent.
pub fn get_or_null<V, P>(root: &V, path: &P) -> ParseResult<V>
where
    V: Tree,
    P: AsPath + ?Sized,
{
    let path = path.as_path()?;
    Ok(resolve(root, &path).map_or_else(|_| V::null(), |found| found.value.clone()))
}

/// Whether every segment of `path` resolves.
pub fn exists<V, P>(root: &V, path: &P) -> ParseResult<bool>
where
    V: Tree,
    P: AsPath + ?Sized,
{
    let path = path.as_path()?;
    Ok(resolve(root, &path).is_ok())
}
