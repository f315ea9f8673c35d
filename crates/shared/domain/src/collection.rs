//! Collection guards shared by entities that hold lists.

use serde::Serialize;

use crate::error::{DomainError, DomainResult};

/// Collect items that must all be present.
///
/// `None` stands for a reference that could not be resolved. Any `None`
/// fails the whole collection, naming the first missing position.
pub fn require_present<T>(
    items: impl IntoIterator<Item = Option<T>>,
    what: &str,
) -> DomainResult<Vec<T>> {
    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            item.ok_or_else(|| {
                DomainError::validation(format!("{} contains a missing entry at position {}", what, index))
            })
        })
        .collect()
}

/// Reject an empty collection.
pub fn require_non_empty<T>(items: Vec<T>, what: &str) -> DomainResult<Vec<T>> {
    if items.is_empty() {
        return Err(DomainError::validation(format!("{} must not be empty", what)));
    }
    Ok(items)
}

/// Ordered list that only grows. Items can be read but never removed or
/// replaced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AppendOnlyList<T>(Vec<T>);

impl<T> AppendOnlyList<T> {
    /// Create an empty list.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Append every item, preserving order.
    pub fn extend(&mut self, items: impl IntoIterator<Item = T>) {
        self.0.extend(items);
    }

    pub fn as_slice(&self) -> &[T] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<T> Default for AppendOnlyList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T> IntoIterator for &'a AppendOnlyList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
