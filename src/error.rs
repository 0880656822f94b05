// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Hand-rolled error types for the two phases that can fail: building and
//! loading a persistent index. Query-time irregularities (unknown terms,
//! unbalanced parentheses) are not errors per the failure semantics in the
//! design and are never represented here.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Failures that can abort a build.
#[derive(Debug)]
pub enum BuildError {
    /// The source file could not be read.
    ExtractFailed { path: PathBuf, source: io::Error },
    /// The destination index file could not be written.
    WriteFailed { path: PathBuf, source: io::Error },
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildError::ExtractFailed { path, source } => {
                write!(f, "failed to read source file {}: {}", path.display(), source)
            }
            BuildError::WriteFailed { path, source } => {
                write!(f, "failed to write index file {}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for BuildError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BuildError::ExtractFailed { source, .. } => Some(source),
            BuildError::WriteFailed { source, .. } => Some(source),
        }
    }
}

/// Failures that can abort loading a persistent index.
#[derive(Debug)]
pub enum IndexError {
    /// The file does not start with the expected `SIDX` magic, or the
    /// version field is not 1.
    BadMagic,
    /// The file ended before a record the header promised was complete.
    Truncated(&'static str),
    Io(io::Error),
}

impl fmt::Display for IndexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndexError::BadMagic => write!(f, "not a valid index file (bad magic or version)"),
            IndexError::Truncated(what) => write!(f, "index file truncated while reading {what}"),
            IndexError::Io(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for IndexError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            IndexError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for IndexError {
    fn from(e: io::Error) -> Self {
        IndexError::Io(e)
    }
}
