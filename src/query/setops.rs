// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Linear-merge set algebra over sorted, duplicate-free posting lists.

use crate::types::DocId;

/// Two-pointer intersection: emit when equal, advance the smaller.
pub fn intersect(a: &[DocId], b: &[DocId]) -> Vec<DocId> {
    let mut out = Vec::new();
    let (mut i, mut j) = (0, 0);
    while i < a.len() && j < b.len() {
        match a[i].cmp(&b[j]) {
            std::cmp::Ordering::Less => i += 1,
            std::cmp::Ordering::Greater => j += 1,
            std::cmp::Ordering::Equal => {
                out.push(a[i]);
                i += 1;
                j += 1;
            }
        }
    }
    out
}

/// Two-pointer union: emit the smaller, or once on a tie, then drain the
/// remainder of whichever list still has entries.
pub fn union(a: &[DocId], b: &[DocId]) -> Vec<DocId> {
    let mut out = Vec::new();
    let (mut i, mut j) = (0, 0);
    while i < a.len() && j < b.len() {
        match a[i].cmp(&b[j]) {
            std::cmp::Ordering::Less => {
                out.push(a[i]);
                i += 1;
            }
            std::cmp::Ordering::Greater => {
                out.push(b[j]);
                j += 1;
            }
            std::cmp::Ordering::Equal => {
                out.push(a[i]);
                i += 1;
                j += 1;
            }
        }
    }
    out.extend_from_slice(&a[i..]);
    out.extend_from_slice(&b[j..]);
    out
}

/// Emits every identifier in `1..=universe` not present in `list`. `list`
/// must be sorted ascending.
pub fn negate(list: &[DocId], universe: u32) -> Vec<DocId> {
    let mut out = Vec::with_capacity(universe as usize);
    let mut i = 0;
    for id in 1..=universe {
        let candidate = DocId(id);
        if i < list.len() && list[i] == candidate {
            i += 1;
        } else {
            out.push(candidate);
        }
    }
    out
}
