// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! An ordered, duplicate-free sequence of document identifiers for one
//! term.

use crate::types::DocId;

/// Growable posting list. Append-only (with dedup) until [`finalize`] is
/// called; strictly ascending and duplicate-free afterward.
///
/// [`finalize`]: PostingList::finalize
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostingList {
    ids: Vec<DocId>,
    finalized: bool,
}

impl PostingList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn single(id: DocId) -> Self {
        PostingList {
            ids: vec![id],
            finalized: false,
        }
    }

    /// Appends `id` unless it is already present. A linear scan is
    /// intentional here: during a single document's contribution the
    /// posting list only ever needs to check its own most recent entries,
    /// since a document's tokens are processed contiguously.
    pub fn add_document(&mut self, id: DocId) {
        if !self.ids.contains(&id) {
            self.ids.push(id);
        }
    }

    /// Sorts ascending and marks the list immutable. Idempotent.
    pub fn finalize(&mut self) {
        self.ids.sort_unstable();
        self.finalized = true;
    }

    pub fn is_finalized(&self) -> bool {
        self.finalized
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn contains(&self, id: DocId) -> bool {
        self.ids.contains(&id)
    }

    pub fn as_slice(&self) -> &[DocId] {
        &self.ids
    }

    pub fn into_vec(self) -> Vec<DocId> {
        self.ids
    }

    pub fn from_sorted(ids: Vec<DocId>) -> Self {
        debug_assert!(ids.windows(2).all(|w| w[0] < w[1]));
        PostingList {
            ids,
            finalized: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(n: u32) -> DocId {
        DocId(n)
    }

    #[test]
    fn add_document_dedups() {
        let mut p = PostingList::new();
        p.add_document(d(1));
        p.add_document(d(1));
        p.add_document(d(2));
        assert_eq!(p.len(), 2);
    }

    #[test]
    fn finalize_sorts_ascending() {
        let mut p = PostingList::new();
        for id in [3, 1, 2, 1] {
            p.add_document(d(id));
        }
        p.finalize();
        assert_eq!(p.as_slice(), &[d(1), d(2), d(3)]);
    }

    #[test]
    fn finalize_is_idempotent() {
        let mut p = PostingList::new();
        p.add_document(d(5));
        p.add_document(d(2));
        p.finalize();
        let first = p.as_slice().to_vec();
        p.finalize();
        assert_eq!(first, p.as_slice());
    }
}
