//! Write-mode resolution.
//!
//! Writers resolve in two phases. [`plan`] walks the tree read-only and
//! fixes the concrete key for every segment, deciding up front which
//! intermediates must be synthesized. Only once the plan has succeeded does
//! [`Route::open`] touch the tree, so a failing writer never leaves
//! half-created intermediates behind.

use nattr_core::{Container, Tree};
use nattr_parser::{Path, Segment};
use tracing::debug;

use crate::error::{ResolveError, ResolveResult};
use crate::select::select_key;

/// Concrete keys for every segment of a path, terminal last.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    path: String,
    keys: Vec<String>,
    /// Leading intermediates that already exist.
    existing: usize,
    terminal_present: bool,
}

impl Route {
    /// The path this route was planned for.
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    /// Key the writer applies to the parent container.
    pub fn terminal(&self) -> &str {
        match self.keys.last() {
            Some(key) => key,
            None => unreachable!("routes are planned from non-empty paths"),
        }
    }

    /// Keys leading to the parent container.
    pub fn intermediates(&self) -> &[String] {
        &self.keys[..self.keys.len() - 1]
    }

    /// Intermediates that [`Route::open`] will create.
    pub fn missing(&self) -> &[String] {
        &self.intermediates()[self.existing..]
    }

    /// Whether the terminal key already exists in its parent.
    pub fn terminal_present(&self) -> bool {
        self.terminal_present
    }

    /// Walk the planned keys mutably and return the parent container,
    /// synthesizing the missing intermediates as empty mappings.
    pub fn open<'a, V: Tree>(&self, root: &'a mut V) -> ResolveResult<&'a mut dyn Container<V>> {
        let mut current = root;
        for (index, key) in self.intermediates().iter().enumerate() {
            let type_name = current.type_name();
            let container = current
                .as_container_mut()
                .ok_or_else(|| ResolveError::not_traversable(&self.path, index, key, type_name))?;
            if !container.contains(key) {
                debug!(path = %self.path, index, key = %key, "creating missing intermediate");
                container.insert(key.clone(), V::empty_mapping());
            }
            current = container
                .get_mut(key)
                .ok_or_else(|| ResolveError::key_not_found(&self.path, index, key))?;
        }

        let index = self.keys.len() - 1;
        let type_name = current.type_name();
        current
            .as_container_mut()
            .ok_or_else(|| ResolveError::not_traversable(&self.path, index, self.terminal(), type_name))
    }
}

/// Plan a write to `path` without touching `root`.
///
/// Intermediates are looked up like reads. An absent literal intermediate
/// is planned for creation when `make_missing` is set and is an
/// `IntermediateMissing` error otherwise. A pattern segment is never
/// synthesized: when nothing matches it the plan fails with `KeyNotFound`,
/// whatever `make_missing` says. An absent literal terminal is fine, the
/// writer creates it; an unmatched pattern terminal is `KeyNotFound`.
pub fn plan<V: Tree>(root: &V, path: &Path, make_missing: bool) -> ResolveResult<Route> {
    let (terminal, intermediates) = path.split_last();
    let mut keys = Vec::with_capacity(path.len());
    let mut current = Some(root);
    let mut existing = 0;

    for (index, segment) in intermediates.iter().enumerate() {
        let key = match current {
            Some(value) => {
                let container = value.as_container().ok_or_else(|| {
                    ResolveError::not_traversable(path.as_str(), index, segment.as_str(), value.type_name())
                })?;
                let child = select_key(container, segment)
                    .and_then(|key| container.get(&key).map(|child| (key, child)));
                match child {
                    Some((key, child)) => {
                        existing += 1;
                        current = Some(child);
                        key
                    }
                    None => {
                        current = None;
                        absent_intermediate(path, index, segment, make_missing)?
                    }
                }
            }
            None => absent_intermediate(path, index, segment, make_missing)?,
        };
        keys.push(key);
    }

    let index = intermediates.len();
    let selected = match current {
        Some(value) => {
            let container = value.as_container().ok_or_else(|| {
                ResolveError::not_traversable(path.as_str(), index, terminal.as_str(), value.type_name())
            })?;
            select_key(container, terminal)
        }
        None => None,
    };
    let terminal_present = selected.is_some();
    let terminal_key = match (selected, terminal) {
        (Some(key), _) => key,
        (None, Segment::Literal(name)) => name.clone(),
        (None, Segment::Pattern(_)) => {
            return Err(ResolveError::key_not_found(path.as_str(), index, terminal.as_str()))
        }
    };
    keys.push(terminal_key);

    Ok(Route {
        path: path.as_str().to_string(),
        keys,
        existing,
        terminal_present,
    })
}

fn absent_intermediate(
    path: &Path,
    index: usize,
    segment: &Segment,
    make_missing: bool,
) -> ResolveResult<String> {
    match segment {
        Segment::Pattern(_) => Err(ResolveError::key_not_found(path.as_str(), index, segment.as_str())),
        Segment::Literal(name) if make_missing => Ok(name.clone()),
        Segment::Literal(name) => Err(ResolveError::intermediate_missing(path.as_str(), index, name)),
    }
}
