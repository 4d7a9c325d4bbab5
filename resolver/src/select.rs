//! Key selection for a single segment.

use nattr_core::Container;
use nattr_parser::Segment;
use tracing::debug;

/// The key `segment` selects in `container`, if any.
///
/// Literal segments select themselves when present. Pattern segments select
/// the first key, in the container's natural order, that fully matches.
/// Later matches are not considered, so a pattern that matches several keys
/// silently resolves to the earliest one.
pub fn select_key<V>(container: &dyn Container<V>, segment: &Segment) -> Option<String> {
    match segment {
        Segment::Literal(name) => container.contains(name).then(|| name.clone()),
        Segment::Pattern(pattern) => {
            let selected = container
                .keys()
                .into_iter()
                .find(|key| pattern.is_match(key))
                .map(str::to_string);
            if let Some(key) = &selected {
                debug!(pattern = pattern.as_str(), key = %key, "pattern selected key");
            }
            selected
        }
    }
}

/// Every key `segment` selects in `container`, in natural order.
pub fn matching_keys<V>(container: &dyn Container<V>, segment: &Segment) -> Vec<String> {
    match segment {
        Segment::Literal(name) if container.contains(name) => vec![name.clone()],
        Segment::Literal(_) => Vec::new(),
        Segment::Pattern(pattern) => container
            .keys()
            .into_iter()
            .filter(|key| pattern.is_match(key))
            .map(str::to_string)
            .collect(),
    }
}
