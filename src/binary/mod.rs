// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The on-disk `index.bin` format: a 32-byte header followed by a sorted
//! inverted section and an insertion-ordered forward section.

pub mod header;
pub mod reader;
pub mod writer;

pub use header::Header;
pub use reader::{LoadedIndex, TermRecord};
pub use writer::write_index;
