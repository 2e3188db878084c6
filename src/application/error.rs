//! Application-level errors

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the loading use-cases. Lookup misses are not errors
/// (the catalog returns `None`); only file access can fail here.
#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("could not open file '{0}'")]
    FileNotFound(PathBuf),

    #[error("I/O error reading '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for application layer operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
