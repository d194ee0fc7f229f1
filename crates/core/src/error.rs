//! Error types for nsdb
//!
//! Every fallible operation in the workspace returns [`Result`].
//! We use `thiserror` for the `Display` and `Error` implementations.

use std::io;
use thiserror::Error;

/// Result type alias for nsdb operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the namespaced store
#[derive(Debug, Error)]
pub enum Error {
    /// Namespace is absent, or present with an empty bucket
    #[error("Namespace not found: {0}")]
    NotFound(String),

    /// A bulk write supplied the same key more than once
    #[error("Duplicate key in batch: {0}")]
    DuplicateKey(String),

    /// I/O error on the backing file
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The backing file does not hold a decodable snapshot
    #[error("Corrupt snapshot: {0}")]
    CorruptSnapshot(String),

    /// Encoding the in-memory state failed
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Configuration could not be read or parsed
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl Error {
    /// Returns true for [`Error::NotFound`]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound(_))
    }

    /// Returns true for [`Error::DuplicateKey`]
    pub fn is_duplicate_key(&self) -> bool {
        matches!(self, Error::DuplicateKey(_))
    }

    /// Returns true for [`Error::CorruptSnapshot`]
    pub fn is_corrupt(&self) -> bool {
        matches!(self, Error::CorruptSnapshot(_))
    }
}

impl From<bincode::Error> for Error {
    fn from(e: bincode::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}
