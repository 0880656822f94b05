// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Writes an in-memory dictionary and forward index to the on-disk
//! `index.bin` layout described in the binary persistence component.

use super::header::{Header, HEADER_LEN};
use crate::dict::TermDictionary;
use crate::error::IndexError;
use crate::forward::ForwardIndex;
use std::io::{self, Seek, SeekFrom, Write};
use std::path::Path;

/// Writes `dict` (consumed and sorted by stem) and `forward` to `path`.
///
/// Steps: emit a placeholder header, write the sorted inverted section,
/// note the file position, write the forward section, then seek back and
/// patch the forward-section offset field.
pub fn write_index(path: &Path, mut dict: TermDictionary, forward: &ForwardIndex) -> Result<(), IndexError> {
    let file = std::fs::File::create(path)?;
    let mut w = io::BufWriter::new(file);

    dict.finalize_all();
    let sorted_terms = dict.into_sorted_terms();
    let term_count = sorted_terms.len() as u32;
    let document_count = forward.len() as u32;

    let placeholder = Header {
        term_count,
        document_count,
        inverted_offset: HEADER_LEN as u64,
        forward_offset: 0,
    };
    w.write_all(&placeholder.to_bytes())?;

    for (stem, entry) in &sorted_terms {
        let bytes = stem.as_bytes();
        w.write_all(&(bytes.len() as u16).to_le_bytes())?;
        w.write_all(bytes)?;
        let ids = entry.postings.as_slice();
        w.write_all(&(ids.len() as u32).to_le_bytes())?;
        for id in ids {
            w.write_all(&id.get().to_le_bytes())?;
        }
    }

    w.flush()?;
    let forward_offset = w.stream_position()?;

    for doc in forward.iter() {
        w.write_all(&doc.id.get().to_le_bytes())?;
        let url_bytes = doc.url.as_bytes();
        w.write_all(&(url_bytes.len() as u16).to_le_bytes())?;
        w.write_all(url_bytes)?;
        w.write_all(&doc.term_count.to_le_bytes())?;
    }
    w.flush()?;

    w.seek(SeekFrom::Start(0))?;
    let header = Header {
        term_count,
        document_count,
        inverted_offset: HEADER_LEN as u64,
        forward_offset,
    };
    w.write_all(&header.to_bytes())?;
    w.flush()?;

    Ok(())
}
