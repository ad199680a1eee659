//! Type tables: named string constants for action type tags.
//!
//! [`create_types`] turns a whitespace-separated list of names into an identity
//! table, so callers write `types["ADD_TODO"]` or `types.get("ADD_TODO")`
//! against a checked table instead of repeating string literals.
//!
//! Tables built from an [`ActionConfig`](crate::creators::ActionConfig) map each
//! configuration key to its derived tag instead (`addTodo` → `ADD_TODO`).

use std::ops::Index;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::action::ActionType;
use crate::error::{Result, SauceError, TYPES_REQUIRED};

/// An ordered mapping from a name to its type tag.
///
/// Entries keep the order in which names were first seen. The table is built
/// once and never mutated afterwards, so it can be shared freely across threads.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeTable {
    entries: IndexMap<String, String>,
}

impl TypeTable {
    /// Build an identity table from the tags of an [`ActionType`] enum.
    #[must_use]
    pub fn for_action_type<T: ActionType>() -> Self {
        T::type_tags()
            .iter()
            .map(|tag| ((*tag).to_string(), (*tag).to_string()))
            .collect()
    }

    /// Look up the tag registered under `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    /// Whether `name` is a key of this table.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Whether any entry maps to `tag`.
    #[must_use]
    pub fn contains_tag(&self, tag: &str) -> bool {
        self.entries.values().any(|value| value == tag)
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Tags in insertion order.
    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.entries.values().map(String::as_str)
    }

    /// `(name, tag)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(name, tag)| (name.as_str(), tag.as_str()))
    }
}

impl FromIterator<(String, String)> for TypeTable {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl Index<&str> for TypeTable {
    type Output = str;

    /// # Panics
    ///
    /// Panics if `name` is not in the table, like indexing a `HashMap`.
    fn index(&self, name: &str) -> &str {
        &self.entries[name]
    }
}

/// Build an identity type table from a whitespace-separated list of names.
///
/// Surrounding whitespace is ignored, runs of separators never produce empty
/// names, and repeated names collapse into one entry.
///
/// # Errors
///
/// Returns [`SauceError::InvalidArgument`] when `names` is empty.
///
/// # Example
///
/// ```
/// use reducer_sauce_core::create_types;
///
/// let types = create_types("  LOGIN_REQUEST\n LOGIN_SUCCESS   LOGOUT ")?;
/// assert_eq!(types.len(), 3);
/// assert_eq!(&types["LOGOUT"], "LOGOUT");
/// # Ok::<(), reducer_sauce_core::SauceError>(())
/// ```
pub fn create_types(names: &str) -> Result<TypeTable> {
    if names.is_empty() {
        return Err(SauceError::invalid_argument(TYPES_REQUIRED));
    }

    let table: TypeTable = names
        .split_whitespace()
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(|name| (name.to_string(), name.to_string()))
        .collect();

    tracing::debug!(count = table.len(), "Created type table");
    Ok(table)
}
