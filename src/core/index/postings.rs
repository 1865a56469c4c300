//! Postings sets: the documents a term occurs in.

use crate::core::types::DocumentId;
use serde::Serialize;
use std::collections::hash_set::{self, HashSet};
use std::iter::FromIterator;

/// Unordered set of document IDs.
///
/// Set algebra always returns a new set, so the operands (which may be
/// owned by the index) are never modified.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PostingsSet {
    docs: HashSet<DocumentId>,
}

impl PostingsSet {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a document, returning false if it was already present.
    ///
    /// Only the index builder and the evaluator's reductions grow sets;
    /// index-owned sets are never reachable mutably from outside the crate.
    pub(crate) fn insert(&mut self, doc: impl Into<DocumentId>) -> bool {
        self.docs.insert(doc.into())
    }

    pub fn contains(&self, doc: &str) -> bool {
        self.docs.contains(doc)
    }

    pub fn len(&self) -> usize {
        self.docs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }

    /// Iterate document IDs in set iteration order (unsorted)
    pub fn iter(&self) -> hash_set::Iter<'_, DocumentId> {
        self.docs.iter()
    }

    /// Document IDs in ascending order
    pub fn sorted(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.docs.iter().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    /// Documents in either set
    pub fn union(&self, other: &PostingsSet) -> PostingsSet {
        // Clone the larger side and extend with the smaller
        let (large, small) = if self.len() >= other.len() {
            (self, other)
        } else {
            (other, self)
        };
        let mut docs = large.docs.clone();
        docs.extend(small.docs.iter().cloned());
        PostingsSet { docs }
    }

    /// Documents in both sets
    pub fn intersection(&self, other: &PostingsSet) -> PostingsSet {
        // Probe the larger set while walking the smaller
        let (small, large) = if self.len() <= other.len() {
            (self, other)
        } else {
            (other, self)
        };
        small
            .docs
            .iter()
            .filter(|doc| large.docs.contains(*doc))
            .cloned()
            .collect()
    }

    /// Documents in `self` but not in `other`
    pub fn difference(&self, other: &PostingsSet) -> PostingsSet {
        self.docs
            .iter()
            .filter(|doc| !other.docs.contains(*doc))
            .cloned()
            .collect()
    }
}

impl FromIterator<DocumentId> for PostingsSet {
    fn from_iter<I: IntoIterator<Item = DocumentId>>(iter: I) -> Self {
        PostingsSet {
            docs: iter.into_iter().collect(),
        }
    }
}

impl<'a> FromIterator<&'a str> for PostingsSet {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        iter.into_iter().map(str::to_string).collect()
    }
}

impl IntoIterator for PostingsSet {
    type Item = DocumentId;
    type IntoIter = hash_set::IntoIter<DocumentId>;

    fn into_iter(self) -> Self::IntoIter {
        self.docs.into_iter()
    }
}

impl<'a> IntoIterator for &'a PostingsSet {
    type Item = &'a DocumentId;
    type IntoIter = hash_set::Iter<'a, DocumentId>;

    fn into_iter(self) -> Self::IntoIter {
        self.docs.iter()
    }
}
