// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Loads an `index.bin` file fully into memory for read-time binary search.

use super::header::{Header, HEADER_LEN};
use crate::error::IndexError;
use crate::forward::{DocumentRecord, ForwardIndex};
use crate::types::DocId;
use std::path::Path;

#[derive(Debug, Clone)]
pub struct TermRecord {
    pub stem: Vec<u8>,
    pub doc_ids: Vec<DocId>,
}

/// A fully materialized, read-only index. Terms are stored sorted by stem
/// bytes (as written), enabling binary search.
#[derive(Debug, Clone)]
pub struct LoadedIndex {
    terms: Vec<TermRecord>,
    forward: ForwardIndex,
}

impl LoadedIndex {
    pub fn load(path: &Path) -> Result<Self, IndexError> {
        let bytes = std::fs::read(path)?;
        Self::from_bytes(&bytes)
    }

    /// Parses `bytes` as a complete `index.bin` image. Never panics on
    /// malformed input: every out-of-bounds read is reported as
    /// [`IndexError::Truncated`].
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, IndexError> {
        let header = Header::from_bytes(bytes)?;
        let inverted_start = header.inverted_offset as usize;
        let forward_start = header.forward_offset as usize;
        if inverted_start > bytes.len() || forward_start > bytes.len() {
            return Err(IndexError::Truncated("section offset out of range"));
        }

        let mut cursor = inverted_start;
        let mut terms = Vec::with_capacity(header.term_count as usize);
        for _ in 0..header.term_count {
            let term_len = read_u16(bytes, &mut cursor)? as usize;
            let stem = read_bytes(bytes, &mut cursor, term_len)?.to_vec();
            let doc_count = read_u32(bytes, &mut cursor)? as usize;
            let mut doc_ids = Vec::with_capacity(doc_count);
            for _ in 0..doc_count {
                doc_ids.push(DocId(read_u32(bytes, &mut cursor)?));
            }
            terms.push(TermRecord { stem, doc_ids });
        }

        let mut cursor = forward_start;
        let mut docs = Vec::with_capacity(header.document_count as usize);
        for _ in 0..header.document_count {
            let id = DocId(read_u32(bytes, &mut cursor)?);
            let url_len = read_u16(bytes, &mut cursor)? as usize;
            let url_bytes = read_bytes(bytes, &mut cursor, url_len)?;
            let url = String::from_utf8_lossy(url_bytes).into_owned();
            let term_count = read_u32(bytes, &mut cursor)?;
            docs.push(DocumentRecord { id, url, term_count });
        }

        Ok(LoadedIndex {
            terms,
            forward: ForwardIndex::from_records(docs),
        })
    }

    /// Binary search over the sorted in-memory term array.
    pub fn lookup_term(&self, stem: &[u8]) -> Option<&[DocId]> {
        self.terms
            .binary_search_by(|rec| rec.stem.as_slice().cmp(stem))
            .ok()
            .map(|i| self.terms[i].doc_ids.as_slice())
    }

    pub fn document_count(&self) -> usize {
        self.forward.len()
    }

    pub fn term_count(&self) -> usize {
        self.terms.len()
    }

    pub fn find_document(&self, id: DocId) -> Option<&DocumentRecord> {
        self.forward.find(id)
    }

    pub fn terms(&self) -> &[TermRecord] {
        &self.terms
    }
}

fn read_u16(bytes: &[u8], cursor: &mut usize) -> Result<u16, IndexError> {
    let slice = read_bytes(bytes, cursor, 2)?;
    Ok(u16::from_le_bytes(slice.try_into().unwrap()))
}

fn read_u32(bytes: &[u8], cursor: &mut usize) -> Result<u32, IndexError> {
    let slice = read_bytes(bytes, cursor, 4)?;
    Ok(u32::from_le_bytes(slice.try_into().unwrap()))
}

fn read_bytes<'a>(bytes: &'a [u8], cursor: &mut usize, len: usize) -> Result<&'a [u8], IndexError> {
    let end = cursor
        .checked_add(len)
        .ok_or(IndexError::Truncated("record"))?;
    if end > bytes.len() {
        return Err(IndexError::Truncated("record"));
    }
    let slice = &bytes[*cursor..end];
    *cursor = end;
    Ok(slice)
}
