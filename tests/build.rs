// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! End-to-end build tests: real XML source on disk, through
//! `boolex::build_to_file`, reloaded from the written binary file.

use boolex::{DocId, LoadedIndex};
use std::io::Write;

const CORPUS: &[u8] = br#"
<articles>
<article id="1">
  <url>https://example.com/a</url>
  <content>Hello hello world, this is the first article.</content>
</article>
<article id="2">
  <url>https://example.com/b</url>
  <content>World peace requires more than hello.</content>
</article>
</articles>
"#;

fn write_corpus(dir: &tempfile::TempDir) -> std::path::PathBuf {
    let path = dir.path().join("corpus.xml");
    let mut f = std::fs::File::create(&path).unwrap();
    f.write_all(CORPUS).unwrap();
    path
}

#[test]
fn build_to_file_then_load_round_trips_postings() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_corpus(&dir);
    let output = dir.path().join("index.bin");

    let stats = boolex::build_to_file(&input, &output, None).unwrap();
    assert_eq!(stats.documents, 2);
    assert!(stats.unique_terms > 0);

    let index = LoadedIndex::load(&output).unwrap();
    assert_eq!(index.document_count(), 2);

    let hello = index.lookup_term(b"hello").unwrap();
    assert_eq!(hello, &[DocId(1), DocId(2)]);

    let world = index.lookup_term(b"world").unwrap();
    assert_eq!(world, &[DocId(1), DocId(2)]);

    let doc1 = index.find_document(DocId(1)).unwrap();
    assert_eq!(doc1.url, "https://example.com/a");
}

#[test]
fn emit_tokens_writes_a_csv_alongside_the_index() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_corpus(&dir);
    let output = dir.path().join("index.bin");
    let tokens = dir.path().join("tokens.csv");

    boolex::build_to_file(&input, &output, Some(&tokens)).unwrap();

    let csv = std::fs::read_to_string(&tokens).unwrap();
    assert!(csv.contains("doc_id,token"));
    assert!(csv.contains("1,hello") || csv.contains("2,hello"));
}

#[test]
fn build_on_corpus_with_no_articles_yields_empty_index() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("empty.xml");
    std::fs::write(&input, b"<articles></articles>").unwrap();
    let output = dir.path().join("index.bin");

    let stats = boolex::build_to_file(&input, &output, None).unwrap();
    assert_eq!(stats.documents, 0);
    assert_eq!(stats.unique_terms, 0);

    let index = LoadedIndex::load(&output).unwrap();
    assert_eq!(index.document_count(), 0);
    assert_eq!(index.term_count(), 0);
}
