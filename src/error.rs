//! Error type for EditorConfig queries

use std::io;
use std::path::PathBuf;

use crate::pattern::PatternError;

/// Errors that abort a query.
///
/// Malformed lines inside an EditorConfig file are never errors; they are
/// skipped by the parser.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The queried path could not be made absolute.
    #[error("failed to resolve absolute path for {}: {source}", path.display())]
    AbsolutePath {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// An EditorConfig file exists but could not be opened or read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A section name could not be compiled into a matcher.
    #[error("invalid section pattern {pattern:?}: {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: PatternError,
    },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
