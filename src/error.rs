//! Error kinds for the extraction and generation pipeline.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Pipeline error. Only `InputNotFound` and `Pattern` abort a run on their
/// own; the rest are recorded per file or per comment and skipped unless
/// `fail_fast` is set.
#[derive(Debug, Error)]
pub enum Error {
    #[error("input path does not exist: {}", .0.display())]
    InputNotFound(PathBuf),

    #[error("failed to read {}: {source}", path.display())]
    UnreadableFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{}: {source}", path.display())]
    MalformedComment {
        path: PathBuf,
        #[source]
        source: MalformedComment,
    },

    #[error("failed to write {}: {source}", path.display())]
    WriteFailure {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("empty file: {}", .0.display())]
    EmptyFile(PathBuf),

    #[error("invalid file pattern: {0}")]
    Pattern(#[from] glob::PatternError),
}

/// A documentation comment the extractor had to give up on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{kind} comment at line {line}")]
pub struct MalformedComment {
    /// 1-based line of the offending `/**`.
    pub line: usize,
    pub kind: MalformedKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MalformedKind {
    /// End of file reached before `*/`.
    Unterminated,
    /// Another `/**` opened before this one closed.
    Nested,
}

impl std::fmt::Display for MalformedKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MalformedKind::Unterminated => f.write_str("unterminated"),
            MalformedKind::Nested => f.write_str("nested"),
        }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
