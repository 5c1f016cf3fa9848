//! Error type for the record loader and writer.
//!
//! Index, scan and collection operations never fail: an absent lookup result
//! is `None`, not an error. Only file-backed collaborators produce [`Error`].

use std::num::ParseIntError;
use std::path::PathBuf;
use std::str::Utf8Error;

use thiserror::Error;

/// Errors surfaced by the record loader and writer.
#[derive(Error, Debug)]
pub enum Error {
    /// Opening, reading or writing a record file failed.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        /// File the operation was working on
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A record line could not be parsed into a value.
    #[error("{}:{line}: invalid record {content:?}: {source}", path.display())]
    Parse {
        /// File being loaded
        path: PathBuf,
        /// 1-based line number
        line: usize,
        /// The offending line after trimming
        content: String,
        /// Parser error
        #[source]
        source: ParseIntError,
    },

    /// A record line is not valid UTF-8.
    #[error("{}:{line}: record is not valid UTF-8: {source}", path.display())]
    Encoding {
        /// File being loaded
        path: PathBuf,
        /// 1-based line number
        line: usize,
        /// Decoder error
        #[source]
        source: Utf8Error,
    },
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result alias used by the record collaborators.
pub type Result<T> = std::result::Result<T, Error>;
