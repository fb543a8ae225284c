//! Prefix source trait
//!
//! Defines how the leading bytes of a candidate file are obtained.
//! Reading is the only fallible, blocking step of sniffing.

use crate::domain::entities::FileIdentity;
use std::io;
use thiserror::Error;

/// Errors that can occur when reading a file prefix
#[derive(Error, Debug)]
pub enum PrefixReadError {
    #[error("File not found: {0}")]
    NotFound(String),

    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    #[error("I/O error reading {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },
}

impl PrefixReadError {
    /// Maps an `io::Error` to the closest variant for `path`
    pub fn from_io(path: impl Into<String>, source: io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            io::ErrorKind::NotFound => PrefixReadError::NotFound(path),
            io::ErrorKind::PermissionDenied => PrefixReadError::PermissionDenied(path),
            _ => PrefixReadError::Io { path, source },
        }
    }
}

/// A candidate file whose prefix can be read
///
/// Implementations perform blocking I/O; the batch use case runs them on
/// the blocking thread pool.
pub trait PrefixSource: Send + Sync {
    /// Identity used to pair results with this file
    fn identity(&self) -> &FileIdentity;

    /// Media type declared by the environment, empty if none
    fn declared_type(&self) -> &str;

    /// Reads at most `max_len` leading bytes
    ///
    /// Returns fewer bytes when the file is shorter.
    fn read_prefix(&self, max_len: usize) -> Result<Vec<u8>, PrefixReadError>;
}
