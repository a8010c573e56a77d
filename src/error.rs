//! Error types shared by the record stores, billing and persistence layers.
//!
//! The interactive shell wraps these in `anyhow` so it can attach context, but
//! everything below the shell returns this enum so callers can match on the
//! failure kind (for example a missing data file on first run).

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// The main error type for bus fee manager operations.
#[derive(Error, Debug)]
pub enum Error {
    // === Store Errors ===
    /// The store could not grow to hold another record.
    #[error("no more capacity for {collection} records")]
    CapacityExhausted {
        /// Name of the collection that is full.
        collection: &'static str,
    },

    /// Loaded records broke the id invariants of their collection.
    #[error("corrupt {collection} records: {message}")]
    CorruptRecords {
        /// Name of the collection being loaded.
        collection: &'static str,
        /// Description of the broken invariant.
        message: String,
    },

    // === Billing Errors ===
    /// A student referenced a route that does not exist.
    #[error("route {route_id} not found")]
    RouteNotFound {
        /// The dangling route id.
        route_id: u32,
    },

    // === Data File Errors ===
    /// The file does not start with the data file magic.
    #[error("{path} is not a bus fee data file")]
    BadMagic {
        /// Path of the offending file.
        path: PathBuf,
    },

    /// The file was written by an unknown format version.
    #[error("{path} uses unsupported format version {version}")]
    UnsupportedVersion {
        /// Path of the offending file.
        path: PathBuf,
        /// Version found in the header.
        version: u16,
    },

    /// The file holds a different collection than the one requested.
    #[error("{path} holds {found} records, expected {expected}")]
    WrongCollection {
        /// Path of the offending file.
        path: PathBuf,
        /// Collection the caller asked for.
        expected: &'static str,
        /// Collection named in the header.
        found: &'static str,
    },

    /// The record body could not be decoded.
    #[error("failed to decode {path}: {source}")]
    Decode {
        /// Path of the offending file.
        path: PathBuf,
        /// The underlying decoder error.
        #[source]
        source: io::Error,
    },

    // === I/O Errors ===
    /// Failed to create the data directory.
    #[error("failed to create directory {path}: {source}")]
    DirectoryCreate {
        /// Path that couldn't be created.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: io::Error,
    },

    /// A file could not be opened, read or written.
    #[error("I/O error on {path}: {source}")]
    Io {
        /// Path of the file involved.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: io::Error,
    },
}

/// A specialized Result type for bus fee manager operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Wrap an I/O error with the path it happened on.
    #[must_use]
    pub fn io(path: &Path, source: io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Create a corrupt-records error.
    #[must_use]
    pub fn corrupt(collection: &'static str, message: impl Into<String>) -> Self {
        Self::CorruptRecords {
            collection,
            message: message.into(),
        }
    }

    /// True when the error is a missing file, which the loader treats as a
    /// first run rather than a failure.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Io { source, .. } if source.kind() == io::ErrorKind::NotFound)
    }
}
