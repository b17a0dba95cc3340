//! Storage error types.
//!
//! Malformed *contents* of persisted layout data are never an error; they are
//! silently repaired on load (see [`crate::layout::repair`]). The only
//! surfaced failures are genuine I/O problems while setting up the on-disk
//! storage file.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when opening the on-disk storage file.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Failed to read the storage file from disk.
    #[error("Failed to read storage file: {path}")]
    Read {
        /// Path to the file that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to create the directory that holds the storage file.
    #[error("Failed to create storage directory: {path}")]
    CreateDir {
        /// Directory that could not be created.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}
