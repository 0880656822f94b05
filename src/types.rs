// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Core identifiers and small value types shared across the indexing and
//! query pipelines.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A document identifier, assigned in extraction order starting at 1.
///
/// Zero is never a valid document id; the forward index and posting lists
/// both use this invariant to treat `0` as "no document" where useful.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DocId(pub u32);

impl DocId {
    pub fn new(id: u32) -> Option<Self> {
        if id == 0 {
            None
        } else {
            Some(DocId(id))
        }
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for DocId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Maximum byte length of a raw token before stemming (tokens at or above
/// this length are discarded by the tokenizer, never stemmed).
pub const MAX_TOKEN_BYTES: usize = 50;

/// Maximum byte length of a stem retained in the term dictionary.
pub const MAX_STEM_BYTES: usize = 255;

/// Maximum byte length of a URL stored in the forward index (511 bytes plus
/// an implicit terminator in the original fixed-size record).
pub const MAX_URL_BYTES: usize = 511;

/// Owned, stem-sized byte string used as a term dictionary key.
///
/// A thin wrapper over `Vec<u8>` rather than a bare `Vec<u8>` or `String`,
/// since stems are not guaranteed valid UTF-8 after byte-level Cyrillic
/// rewriting, and the dictionary treats them as opaque sort-and-compare
/// keys.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Stem(pub Vec<u8>);

impl Stem {
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Stem(bytes.to_vec())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for Stem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", String::from_utf8_lossy(&self.0))
    }
}

/// Summary counters produced by a build, reported by the driver - not
/// consumed by any core algorithm.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct BuildStats {
    pub documents: u32,
    pub unique_terms: u32,
    pub tokens_accepted: u64,
    pub tokens_rejected: u64,
}
