//! Error handling utilities for the care application.
//!
//! This module provides the central error type `AppError` which represents all
//! possible error conditions that might occur in the application, as well as the
//! convenience type alias `AppResult` for functions that can return these errors.
//!
//! Note that a stored entry list that fails to parse is *not* an error: the
//! persistence layer treats it as absent and reseeds (see `journal_io`).

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Represents failures of the key-value storage backing the entry list.
///
/// # Examples
///
/// ```
/// use care::errors::StorageError;
///
/// let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
/// let error = StorageError::Serialize(source);
/// assert!(format!("{}", error).contains("serialize"));
/// ```
#[derive(Debug, Error)]
pub enum StorageError {
    /// The value could not be serialized for storage.
    #[error("Failed to serialize journal data: {0}")]
    Serialize(#[source] serde_json::Error),

    /// The storage file exists but its contents could not be read as a key-value map.
    #[error("Storage file {path} is not a valid key-value document: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The temporary file could not be moved over the storage file.
    #[error("Failed to replace storage file: {0}")]
    Persist(#[source] tempfile::PersistError),
}

/// Represents specific error cases that can occur when locking the data directory.
#[derive(Debug, Error)]
pub enum LockError {
    /// Another process already holds the lock.
    #[error("The journal at {path} is already open in another care process. Please close it and try again.")]
    FileBusy { path: PathBuf },

    /// The lock file could not be created or locked for another reason.
    #[error("Failed to acquire lock for journal data {path}: {source}. Please check file permissions and ensure the directory is accessible.")]
    AcquisitionFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

#[derive(Debug, Error)]
pub enum AppError {
    /// Errors related to configuration loading or validation.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Input/output errors from filesystem or terminal operations.
    ///
    /// This variant automatically converts from `std::io::Error` through the `From` trait.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Errors in journal logic.
    #[error("Journal logic error: {0}")]
    Journal(String),

    /// Errors raised by the storage backend.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Errors related to locking the data directory.
    #[error("File locking error: {0}")]
    Lock(#[from] LockError),
}

/// A type alias for `Result<T, AppError>` to simplify function signatures.
///
/// # Examples
///
/// ```
/// use care::errors::{AppResult, AppError};
///
/// fn might_fail() -> AppResult<String> {
///     if false {
///         return Err(AppError::Journal("Something went wrong".to_string()));
///     }
///     Ok("Operation succeeded".to_string())
/// }
/// ```
pub type AppResult<T> = Result<T, AppError>;
