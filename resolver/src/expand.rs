//! Fan-out resolution: every concrete location a path selects.

use nattr_core::Tree;
use nattr_parser::Segment;
use tracing::debug;

use crate::select::matching_keys;

/// One concrete location selected by a path.
#[derive(Debug, Clone, PartialEq)]
pub struct Match<'a, V> {
    /// Concrete key at every level.
    pub keys: Vec<String>,
    pub value: &'a V,
}

impl<V> Match<'_, V> {
    /// The concrete path, keys joined with `.`.
    pub fn path(&self) -> String {
        self.keys.join(".")
    }
}

/// Expand `segments` against `root` depth-first, in natural key order.
///
/// Unlike [`resolve`](crate::resolve), a pattern segment follows every
/// matching key rather than the first one. Branches that hit a missing key
/// or a leaf are dropped silently. An empty segment list selects `root`
/// itself.
pub fn expand<'a, V: Tree>(root: &'a V, segments: &[Segment]) -> Vec<Match<'a, V>> {
    let mut matches = Vec::new();
    let mut keys = Vec::with_capacity(segments.len());
    collect(root, segments, &mut keys, &mut matches);
    debug!(segments = segments.len(), matches = matches.len(), "expanded path");
    matches
}

fn collect<'a, V: Tree>(
    current: &'a V,
    segments: &[Segment],
    keys: &mut Vec<String>,
    out: &mut Vec<Match<'a, V>>,
) {
    let (segment, rest) = match segments.split_first() {
        Some(parts) => parts,
        None => {
            out.push(Match {
                keys: keys.clone(),
                value: current,
            });
            return;
        }
    };

    if let Some(container) = current.as_container() {
        for key in matching_keys(container, segment) {
            if let Some(child) = container.get(&key) {
                keys.push(key);
                collect(child, rest, keys, out);
                keys.pop();
            }
        }
    }
}
