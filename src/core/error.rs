//! Error types for the flatten and analyze flows
//!
//! Only the root-directory precondition is fatal. Everything below the root
//! degrades into skip records and warning logs, so this enum stays small.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FlattenError {
    /// The scan root does not exist or is not a directory
    #[error("directory not found: {0}")]
    RootNotFound(PathBuf),

    /// The scan root exists but cannot be listed
    #[error("directory not readable: {path}: {source}")]
    RootNotReadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, FlattenError>;
