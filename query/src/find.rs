//! Multi-match reads.

use nattr_core::Tree;
use nattr_parser::{AsPath, ParseResult};
use nattr_resolver::{expand, Match};

/// Every concrete location `path` selects, in natural order.
///
/// Pattern segments follow every matching key, so `cat_\w*.age` yields
/// one match per cat. A literal path yields at most one match.
pub fn find_all<'a, V, P>(root: &'a V, path: &P) -> ParseResult<Vec<Match<'a, V>>>
where
    V: Tree,
    P: AsPath + ?Sized,
{
    let path = path.as_path()?;
    Ok(expand(root, path.segments()))
}

/// Whether any concrete location matches `path`.
///
/// Differs from [`exists`](crate::exists) only for pattern paths: there a
/// branch whose first match is a dead end does not hide a later match.
pub fn exists_any<V, P>(root: &V, path: &P) -> ParseResult<bool>
where
    V: Tree,
    P: AsPath + ?Sized,
{
    Ok(!find_all(root, path)?.is_empty())
}
