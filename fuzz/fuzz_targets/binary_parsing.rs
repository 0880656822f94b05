// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Binary format parsing under adversarial input.
//!
//! If someone points `boolex query` at a crafted `.bin` file, the worst case
//! should be an error message, not a crash. This fuzz target hammers
//! `LoadedIndex::from_bytes` with garbage bytes, including truncated headers
//! and offsets that claim more data than exists. None of it should panic.

#![no_main]

use boolex::LoadedIndex;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let result = LoadedIndex::from_bytes(data);

    if let Ok(index) = result {
        let doc_count = index.document_count();

        // INVARIANT 1: every posting doc_id is within the forward index.
        for term in index.terms() {
            for id in &term.doc_ids {
                assert!(
                    (id.get() as usize) <= doc_count,
                    "posting doc_id {} exceeds document_count {}",
                    id.get(),
                    doc_count
                );
            }
            // INVARIANT 2: posting lists are strictly ascending, no duplicates.
            for window in term.doc_ids.windows(2) {
                assert!(
                    window[0].get() < window[1].get(),
                    "posting list not strictly ascending: {:?}",
                    term.doc_ids
                );
            }
        }

        // INVARIANT 3: the term table is sorted by stem bytes.
        for window in index.terms().windows(2) {
            assert!(
                window[0].stem.as_slice() <= window[1].stem.as_slice(),
                "term table not sorted"
            );
        }

        // INVARIANT 4: term_count() agrees with the loaded term table length.
        assert_eq!(index.term_count(), index.terms().len());
    }
});
