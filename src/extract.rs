// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Content extraction from the XML-like source document.
//!
//! This is explicitly NOT core: it is a byte scanner for one fixed corpus
//! shape (`<article>...<url>...</url>...<content>...</content>...</article>`),
//! not a general XML/DOM parser. It exists so the driver has something real
//! to feed the tokenizer; document identifiers are assigned by extraction
//! order, per the data model, not by any `id` attribute in the source.

/// One extracted article: its URL and raw content bytes (still containing
/// whatever entity remnants and markup the tokenizer's junk filter will
/// later discard).
pub struct ExtractedDocument {
    pub url: String,
    pub content: Vec<u8>,
}

/// Scans `xml` for `<article>...</article>` blocks and pulls the first
/// `<url>` and `<content>` tag out of each. A block missing either tag is
/// skipped (produces no document, consistent with "a document is created
/// on first accepted token" -- a document with no content extracted
/// contributes none).
pub fn extract_documents(xml: &[u8]) -> Vec<ExtractedDocument> {
    let mut docs = Vec::new();
    let mut pos = 0;
    while let Some(article_start) = find(xml, b"<article", pos) {
        let article_end = find(xml, b"</article>", article_start)
            .map(|e| e + b"</article>".len())
            .unwrap_or(xml.len());
        let block = &xml[article_start..article_end];

        let url = extract_tag(block, b"<url>", b"</url>");
        let content = extract_tag(block, b"<content>", b"</content>");

        if let (Some(url), Some(content)) = (url, content) {
            docs.push(ExtractedDocument {
                url: String::from_utf8_lossy(url).into_owned(),
                content: content.to_vec(),
            });
        }

        pos = article_end;
    }
    docs
}

fn extract_tag<'a>(block: &'a [u8], open: &[u8], close: &[u8]) -> Option<&'a [u8]> {
    let start = find(block, open, 0)? + open.len();
    let end = find(block, close, start)?;
    Some(&block[start..end])
}

fn find(haystack: &[u8], needle: &[u8], from: usize) -> Option<usize> {
    if from > haystack.len() || needle.is_empty() {
        return None;
    }
    haystack[from..]
        .windows(needle.len())
        .position(|w| w == needle)
        .map(|p| p + from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_url_and_content_per_article() {
        let xml = br#"
            <articles>
              <article id="1"><url>http://a</url><content>Hello world</content></article>
              <article id="2"><url>http://b</url><content>World peace</content></article>
            </articles>
        "#;
        let docs = extract_documents(xml);
        assert_eq!(docs.len(), 2);
        assert_eq!(docs[0].url, "http://a");
        assert_eq!(docs[0].content, b"Hello world");
        assert_eq!(docs[1].url, "http://b");
    }

    #[test]
    fn article_missing_content_is_skipped() {
        let xml = br#"<article><url>http://a</url></article>"#;
        assert!(extract_documents(xml).is_empty());
    }

    #[test]
    fn empty_input_yields_no_documents() {
        assert!(extract_documents(b"").is_empty());
    }
}
