// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Segments a byte buffer into word tokens, applying normalization, the
//! junk filter, and stemming before handing accepted stems to a sink.

use crate::junk::is_junk;
use crate::normalize::normalize_in_place;
use crate::stem::Stemmer;
use crate::types::{DocId, MAX_TOKEN_BYTES};

/// Returns true if `b` is one of the fixed delimiter bytes that separate
/// tokens.
pub fn is_delimiter(b: u8) -> bool {
    matches!(
        b,
        b' ' | b'\n' | b'\t' | b'\r' | b',' | b'.' | b'!' | b'?' | b';' | b':' | b'(' | b')'
            | b'[' | b']' | b'"' | b'\'' | b'-' | b'_' | b'/' | b'\\'
    )
}

/// Tallies tokens processed, regardless of whether they were accepted, for
/// ambient reporting; not part of any core invariant.
#[derive(Debug, Default, Clone, Copy)]
pub struct TokenizeStats {
    pub accepted: u64,
    pub rejected: u64,
}

/// Splits `text` on [`is_delimiter`] bytes and feeds each accepted,
/// normalized, stemmed token to `sink` as `(doc_id, stem_bytes)`.
///
/// Raw tokens of length 0 or `>= MAX_TOKEN_BYTES` are discarded before
/// normalization ever runs.
pub fn tokenize(text: &[u8], doc_id: DocId, mut sink: impl FnMut(DocId, &[u8])) -> TokenizeStats {
    let mut stemmer = Stemmer::new();
    let mut stats = TokenizeStats::default();
    let mut i = 0;
    let len = text.len();
    while i < len {
        while i < len && is_delimiter(text[i]) {
            i += 1;
        }
        let start = i;
        while i < len && !is_delimiter(text[i]) {
            i += 1;
        }
        let raw = &text[start..i];
        if raw.is_empty() || raw.len() >= MAX_TOKEN_BYTES {
            if !raw.is_empty() {
                stats.rejected += 1;
            }
            continue;
        }
        let mut buf = raw.to_vec();
        normalize_in_place(&mut buf);
        if is_junk(&buf) {
            stats.rejected += 1;
            continue;
        }
        let stem = stemmer.stem(&buf);
        sink(doc_id, stem);
        stats.accepted += 1;
    }
    stats
}
