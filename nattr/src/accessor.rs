//! Configured entry point over the traversal operations.

use nattr_core::{Fallback, Tree};
use nattr_mutation::{MutationOutcome, MutationResult, Mutator};
use nattr_parser::{ParseResult, Path};
use nattr_query::Lookup;
use nattr_resolver::Match;
use tracing::trace;

use crate::config::AccessConfig;

/// Runs every operation with one [`AccessConfig`].
///
/// Path strings are parsed in the configured mode, and writers take their
/// `make_missing` and `allow_missing` flags from the config.
#[derive(Debug, Clone, Default)]
pub struct Accessor {
    config: AccessConfig,
}

impl Accessor {
    pub fn new(config: AccessConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AccessConfig {
        &self.config
    }

    /// Parse `path` in the configured mode.
    pub fn path(&self, path: &str) -> ParseResult<Path> {
        trace!(path, mode = ?self.config.mode, "parsing path");
        Path::parse(path, self.config.mode)
    }

    pub fn get<'a, V: Tree>(
        &self,
        root: &'a V,
        path: &str,
        default: impl Into<Fallback<V>>,
    ) -> ParseResult<Lookup<'a, V>> {
        nattr_query::get(root, &self.path(path)?, default)
    }

    pub fn get_or_null<V: Tree>(&self, root: &V, path: &str) -> ParseResult<V> {
        nattr_query::get_or_null(root, &self.path(path)?)
    }

    pub fn exists<V: Tree>(&self, root: &V, path: &str) -> ParseResult<bool> {
        nattr_query::exists(root, &self.path(path)?)
    }

    pub fn exists_any<V: Tree>(&self, root: &V, path: &str) -> ParseResult<bool> {
        nattr_query::exists_any(root, &self.path(path)?)
    }

    pub fn find_all<'a, V: Tree>(
        &self,
        root: &'a V,
        path: &str,
    ) -> ParseResult<Vec<Match<'a, V>>> {
        nattr_query::find_all(root, &self.path(path)?)
    }

    pub fn set<V: Tree>(
        &self,
        root: &mut V,
        path: &str,
        value: impl Into<V>,
    ) -> MutationResult<MutationOutcome<V>> {
        nattr_mutation::set(root, &self.path(path)?, value, self.config.make_missing)
    }

    pub fn mutate<V: Tree>(
        &self,
        root: &mut V,
        path: &str,
        mutator: Mutator<'_, V>,
        getter_default: impl Into<Fallback<V>>,
    ) -> MutationResult<MutationOutcome<V>> {
        nattr_mutation::mutate(
            root,
            &self.path(path)?,
            mutator,
            getter_default,
            self.config.make_missing,
        )
    }

    pub fn update<V: Tree, I>(
        &self,
        root: &mut V,
        path: &str,
        update: I,
    ) -> MutationResult<MutationOutcome<V>>
    where
        I: IntoIterator<Item = (String, V)>,
    {
        nattr_mutation::update(root, &self.path(path)?, update)
    }

    pub fn delete<V: Tree>(&self, root: &mut V, path: &str) -> MutationResult<MutationOutcome<V>> {
        nattr_mutation::delete(root, &self.path(path)?, self.config.allow_missing)
    }

    pub fn set_all<V: Tree>(
        &self,
        root: &mut V,
        path: &str,
        value: impl Into<V>,
    ) -> MutationResult<usize> {
        nattr_mutation::set_all(root, &self.path(path)?, value)
    }

    pub fn update_all<V: Tree, I>(&self, root: &mut V, path: &str, update: I) -> MutationResult<usize>
    where
        I: IntoIterator<Item = (String, V)>,
    {
        nattr_mutation::update_all(root, &self.path(path)?, update)
    }

    pub fn delete_all<V: Tree>(&self, root: &mut V, path: &str) -> MutationResult<usize> {
        nattr_mutation::delete_all(root, &self.path(path)?)
    }
}
