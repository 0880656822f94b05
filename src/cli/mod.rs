// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Command-line surface: `build` constructs a persistent index from a
//! source document, `query` evaluates boolean expressions against one,
//! either interactively or in batch.

pub mod display;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "boolex", version, about = "Boolean term-matching search index")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build a persistent index from an XML-like source document.
    Build {
        /// Path to the source document (XML-like corpus).
        #[arg(long)]
        input: PathBuf,

        /// Path to write the resulting index.bin to.
        #[arg(long)]
        output: PathBuf,

        /// Also emit the intermediate tokens.csv stream alongside the
        /// index, for diagnostic parity with the original two-stage
        /// toolchain.
        #[arg(long)]
        emit_tokens: Option<PathBuf>,
    },

    /// Evaluate boolean queries against a persistent index.
    ///
    /// With neither `--input` nor `--output`, runs an interactive REPL.
    /// With both, runs in batch mode: one query per non-empty line of
    /// `--input`, results written to `--output`.
    Query {
        /// Path to a previously built index.bin.
        #[arg(long)]
        index: PathBuf,

        /// Batch mode: file of newline-separated queries.
        #[arg(long, requires = "output")]
        input: Option<PathBuf>,

        /// Batch mode: file to write result blocks to.
        #[arg(long, requires = "input")]
        output: Option<PathBuf>,
    },
}
