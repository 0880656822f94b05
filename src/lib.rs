// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! A boolean (term-matching) search index over a corpus of articles.
//!
//! # Architecture
//!
//! ```text
//! ┌────────────┐   ┌───────────┐   ┌──────────┐   ┌────────────┐
//! │ extract.rs │──▶│tokenize.rs│──▶│ dict.rs  │──▶│ binary/    │
//! │ (articles) │   │(normalize,│   │ (terms,  │   │ (write,    │
//! │            │   │ junk, stem│   │ postings)│   │  read)     │
//! └────────────┘   └───────────┘   └──────────┘   └────────────┘
//!                                        │               │
//!                                        ▼               ▼
//!                                  ┌───────────┐   ┌────────────┐
//!                                  │forward.rs │   │  query/    │
//!                                  │(documents)│   │ (lexer,    │
//!                                  └───────────┘   │  parser,   │
//!                                                   │  setops)   │
//!                                                   └────────────┘
//! ```
//!
//! [`build::build`] turns a raw source buffer into an in-memory
//! [`dict::TermDictionary`] and [`forward::ForwardIndex`];
//! [`build::build_to_file`] additionally persists the result via
//! [`binary::write_index`]. [`binary::LoadedIndex::load`] reads a
//! persisted index back for [`query::evaluate`] to run boolean queries
//! against.

pub mod binary;
pub mod build;
pub mod dict;
pub mod error;
pub mod extract;
pub mod forward;
pub mod junk;
pub mod normalize;
pub mod posting;
pub mod query;
pub mod stem;
pub mod tokenize;
pub mod types;

pub use binary::LoadedIndex;
pub use build::{build, build_to_file};
pub use error::{BuildError, IndexError};
pub use query::evaluate;
pub use types::{BuildStats, DocId, Stem};
