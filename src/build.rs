// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Orchestrates content extraction → tokenization → dictionary
//! accumulation → forward-table append → finalize → persistence.

use crate::binary::write_index;
use crate::dict::TermDictionary;
use crate::error::BuildError;
use crate::extract::extract_documents;
use crate::forward::ForwardIndex;
use crate::tokenize::tokenize;
use crate::types::{BuildStats, DocId};
use std::io::Write;
use std::path::Path;

/// Builds an in-memory index from a raw source buffer. Document identifiers
/// are assigned by extraction order, starting at 1. A document whose
/// extraction produced a URL but zero accepted tokens is still recorded in
/// the forward index with `term_count == 0`.
pub fn build(raw: &[u8]) -> (TermDictionary, ForwardIndex, BuildStats) {
    let mut dict = TermDictionary::new();
    let mut forward = ForwardIndex::new();
    let mut stats = BuildStats::default();

    for (i, doc) in extract_documents(raw).into_iter().enumerate() {
        let doc_id = DocId((i + 1) as u32);
        let mut term_count: u32 = 0;
        let token_stats = tokenize(&doc.content, doc_id, |id, stem| {
            dict.add_term(stem, id);
            term_count += 1;
        });
        forward.add(doc_id, &doc.url, term_count);
        stats.documents += 1;
        stats.tokens_accepted += token_stats.accepted;
        stats.tokens_rejected += token_stats.rejected;
    }

    dict.finalize_all();
    stats.unique_terms = dict.len() as u32;
    (dict, forward, stats)
}

/// Reads `input` (the source XML file), builds the index, and writes it to
/// `output` in the binary format described in the persistence component.
/// When `emit_tokens` is given, also writes the intermediate `tokens.csv`
/// stream for the accepted tokens, mirroring the original two-stage
/// toolchain (diagnostic only -- the in-process build above never reads it
/// back).
pub fn build_to_file(
    input: &Path,
    output: &Path,
    emit_tokens: Option<&Path>,
) -> Result<BuildStats, BuildError> {
    let raw = std::fs::read(input).map_err(|source| BuildError::ExtractFailed {
        path: input.to_path_buf(),
        source,
    })?;

    let docs = extract_documents(&raw);
    let mut dict = TermDictionary::new();
    let mut forward = ForwardIndex::new();
    let mut stats = BuildStats::default();

    let mut csv = match emit_tokens {
        Some(path) => Some(open_tokens_csv(path)?),
        None => None,
    };

    for (i, doc) in docs.into_iter().enumerate() {
        let doc_id = DocId((i + 1) as u32);
        let mut term_count: u32 = 0;
        let token_stats = tokenize(&doc.content, doc_id, |id, stem| {
            dict.add_term(stem, id);
            term_count += 1;
            if let Some(w) = csv.as_mut() {
                let _ = writeln!(w, "{},{}", id.get(), String::from_utf8_lossy(stem));
            }
        });
        forward.add(doc_id, &doc.url, term_count);
        stats.documents += 1;
        stats.tokens_accepted += token_stats.accepted;
        stats.tokens_rejected += token_stats.rejected;
    }

    stats.unique_terms = dict.len() as u32;

    write_index(output, dict, &forward).map_err(|e| BuildError::WriteFailed {
        path: output.to_path_buf(),
        source: match e {
            crate::error::IndexError::Io(io) => io,
            other => std::io::Error::new(std::io::ErrorKind::Other, other.to_string()),
        },
    })?;

    Ok(stats)
}

fn open_tokens_csv(path: &Path) -> Result<std::io::BufWriter<std::fs::File>, BuildError> {
    let file = std::fs::File::create(path).map_err(|source| BuildError::WriteFailed {
        path: path.to_path_buf(),
        source,
    })?;
    let mut w = std::io::BufWriter::new(file);
    w.write_all(&[0xEF, 0xBB, 0xBF]).ok(); // UTF-8 BOM
    writeln!(w, "doc_id,token").ok();
    Ok(w)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_two_documents_with_expected_postings() {
        let xml = br#"
            <article><url>u1</url><content>Hello hello world</content></article>
            <article><url>u2</url><content>world peace</content></article>
        "#;
        let (dict, forward, stats) = build(xml);
        assert_eq!(stats.documents, 2);
        assert_eq!(forward.len(), 2);

        let hello = dict.get(b"hello").unwrap();
        assert_eq!(hello.postings.as_slice(), &[DocId(1)]);

        let world = dict.get(b"world").unwrap();
        assert_eq!(world.postings.as_slice(), &[DocId(1), DocId(2)]);

        let peace = dict.get(b"peace").unwrap();
        assert_eq!(peace.postings.as_slice(), &[DocId(2)]);
    }

    #[test]
    fn empty_input_yields_zero_terms_and_documents() {
        let (dict, forward, stats) = build(b"");
        assert_eq!(dict.len(), 0);
        assert_eq!(forward.len(), 0);
        assert_eq!(stats.documents, 0);
    }

    #[test]
    fn document_with_only_junk_tokens_still_recorded_with_zero_terms() {
        let xml = br#"<article><url>u1</url><content>xml www html</content></article>"#;
        let (_, forward, _) = build(xml);
        assert_eq!(forward.len(), 1);
        assert_eq!(forward.find(DocId(1)).unwrap().term_count, 0);
    }
}
