// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Recursive-descent parser and evaluator for the boolean query grammar:
//!
//! ```text
//! Expression := Term ( OR Term )*
//! Term       := Factor ( (AND | implicit_AND) Factor )*
//! Factor     := NOT Factor | LPAREN Expression RPAREN | WORD
//! ```
//!
//! Parsing and evaluation happen in the same pass: each `Factor` resolves
//! directly to an owned `Vec<DocId>` (a looked-up posting list, a negation,
//! or a parenthesized sub-expression), exactly as the reference parser
//! folds `intersect`/`unionLists` calls into its descent.

use super::lexer::{Lexer, Token};
use super::setops::{intersect, negate, union};
use crate::types::DocId;

/// Evaluates a query against a term lookup function and a document
/// universe size `universe` (the total document count, for negation).
///
/// `lookup` should normalize and stem the word the same way indexing did,
/// and return an empty vector for unknown terms -- this is not an error.
pub fn evaluate(query: &str, universe: u32, lookup: impl FnMut(&[u8]) -> Vec<DocId>) -> Vec<DocId> {
    let mut parser = Parser {
        lexer: Lexer::new(query),
        current: Token::End,
        universe,
        lookup,
    };
    parser.current = parser.lexer.next_token();
    parser.parse_expression()
}

struct Parser<'a, F> {
    lexer: Lexer<'a>,
    current: Token,
    universe: u32,
    lookup: F,
}

impl<F: FnMut(&[u8]) -> Vec<DocId>> Parser<'_, F> {
    fn advance(&mut self) {
        self.current = self.lexer.next_token();
    }

    fn parse_expression(&mut self) -> Vec<DocId> {
        let mut acc = self.parse_term();
        while self.current == Token::Or {
            self.advance();
            let rhs = self.parse_term();
            acc = union(&acc, &rhs);
        }
        acc
    }

    fn parse_term(&mut self) -> Vec<DocId> {
        let mut acc = self.parse_factor();
        loop {
            match self.current {
                Token::And => {
                    self.advance();
                    let rhs = self.parse_factor();
                    acc = intersect(&acc, &rhs);
                }
                Token::Word(_) | Token::Not | Token::LParen => {
                    // implicit AND: follow set is WORD | NOT | LPAREN
                    let rhs = self.parse_factor();
                    acc = intersect(&acc, &rhs);
                }
                _ => break,
            }
        }
        acc
    }

    fn parse_factor(&mut self) -> Vec<DocId> {
        match std::mem::replace(&mut self.current, Token::End) {
            Token::Not => {
                self.advance();
                let inner = self.parse_factor();
                negate(&inner, self.universe)
            }
            Token::LParen => {
                self.advance();
                let inner = self.parse_expression();
                if self.current == Token::RParen {
                    self.advance();
                }
                inner
            }
            Token::Word(w) => {
                self.advance();
                (self.lookup)(&w)
            }
            // Unbalanced parens / stray operator at factor position: the
            // parser stops here and returns an empty result for this
            // factor rather than raising an error.
            other => {
                self.current = other;
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn eval_with(query: &str, universe: u32, terms: &[(&str, &[u32])]) -> Vec<u32> {
        let table: HashMap<Vec<u8>, Vec<DocId>> = terms
            .iter()
            .map(|(k, v)| (k.as_bytes().to_vec(), v.iter().map(|&n| DocId(n)).collect()))
            .collect();
        let result = evaluate(query, universe, |w| table.get(w).cloned().unwrap_or_default());
        result.into_iter().map(|d| d.get()).collect()
    }

    #[test]
    fn intersection() {
        let r = eval_with(
            "hello && world",
            2,
            &[("hello", &[1]), ("world", &[1, 2])],
        );
        assert_eq!(r, vec![1]);
    }

    #[test]
    fn union_of_terms() {
        let r = eval_with(
            "hello || peace",
            2,
            &[("hello", &[1]), ("peace", &[2])],
        );
        assert_eq!(r, vec![1, 2]);
    }

    #[test]
    fn negation_over_universe() {
        let r = eval_with("!hello", 2, &[("hello", &[1])]);
        assert_eq!(r, vec![2]);
    }

    #[test]
    fn implicit_and_with_parens() {
        let r = eval_with(
            "world (hello || peace)",
            2,
            &[("hello", &[1]), ("world", &[1, 2]), ("peace", &[2])],
        );
        assert_eq!(r, vec![1, 2]);
    }

    #[test]
    fn unknown_term_is_empty_not_error() {
        let r = eval_with("xyzzy && world", 2, &[("world", &[1, 2])]);
        assert!(r.is_empty());
    }

    #[test]
    fn whitespace_only_query_returns_empty() {
        let r = eval_with("   ", 2, &[("world", &[1, 2])]);
        assert!(r.is_empty());
    }

    #[test]
    fn precedence_not_over_and_over_or() {
        // !a && b || c  ==  ((!a) && b) || c
        let r = eval_with(
            "!a && b || c",
            3,
            &[("a", &[1]), ("b", &[2, 3]), ("c", &[1])],
        );
        // universe {1,2,3}; !a = {2,3}; (!a)&&b = {2,3}; || c({1}) = {1,2,3}
        assert_eq!(r, vec![1, 2, 3]);
    }

    #[test]
    fn unbalanced_parens_stop_silently() {
        let r = eval_with("(hello", 2, &[("hello", &[1])]);
        assert_eq!(r, vec![1]);
    }
}
