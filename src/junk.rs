// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Rejects URL fragments, XML entity remnants, and corpus-specific noise
//! tokens before they reach the stemmer.

/// Exact-match blacklist of corpus-specific noise tokens. `http`/`www` are
/// handled separately below as prefix rules, not exact matches, since the
/// source treats them differently (full scheme/host fragments, not a fixed
/// word).
const BLACKLIST: &[&str] = &[
    "http",
    "https",
    "www",
    "html",
    "xml",
    "url",
    "content",
    "statistics",
    "character_count",
    "word_count",
    "article",
    "source",
    "id",
    "meta",
    "total_articles",
    "generated_date",
    "cdata",
    "&lt",
    "&gt",
    "&amp",
    "&quot",
    "]]&gt",
    "<![cdata[",
    "f1news",
    "ru",
    "news",
    "f1",
];

/// Returns `true` if `token` should be discarded before stemming.
pub fn is_junk(token: &[u8]) -> bool {
    if BLACKLIST.iter().any(|&w| token == w.as_bytes()) {
        return true;
    }
    if token.starts_with(b"http") || token.starts_with(b"www") {
        return true;
    }
    if token.len() == 1 {
        let c = token[0];
        let allowed = c.is_ascii_lowercase()
            || is_cyrillic_lower_alias(c)
            || c == b'-';
        return !allowed;
    }
    false
}

/// The single-byte Cyrillic aliases the source treats as letters: `а`..`я`
/// and `ё`, expressed as their single-byte Windows-1251-style codes.
///
/// The source's single-byte comparisons (`c >= 'а' && c <= 'я'`, `c == 'ё'`,
/// `c == 'й'`) only make sense against a single-byte Cyrillic encoding; kept
/// here verbatim as the byte ranges the original comparison resolves to, so
/// a lone non-ASCII byte in that legacy range is still accepted. `й` already
/// falls within `0xE0..=0xFF`.
fn is_cyrillic_lower_alias(c: u8) -> bool {
    (0xE0..=0xFF).contains(&c) || c == 0xB8
}
