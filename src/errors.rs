//! Error types for the gistmarks application.
//!
//! Tag extraction and counting never fail. These variants cover the
//! collaborators around them: reading gist records, parsing dates,
//! parsing sidebar filters and loading configuration.

use std::{io, path::PathBuf};

use thiserror::Error;

/// The main error type for the gistmarks application.
#[derive(Error, Debug)]
pub enum GistError {
    /// Errors related to file I/O operations.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Errors related to serialization/deserialization operations.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A timestamp could not be parsed as a date.
    #[error("Invalid date: {input}")]
    InvalidDate { input: String },

    /// A sidebar filter key is neither a category nor a tag.
    #[error("Invalid filter: {filter}")]
    InvalidFilter { filter: String },

    /// Errors related to configuration.
    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    /// Directory creation or access failed.
    #[error("Failed to create or access directory: {path}")]
    DirectoryError { path: PathBuf },

    /// file not found
    #[error("File not found: {file_path}")]
    FileNotFound { file_path: String },
}
