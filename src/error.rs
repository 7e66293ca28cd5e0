//! Error types for archive loading, VFS traversal, and the shell surface.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while materializing the tree from a tar archive.
///
/// All of these are fatal: the shell cannot start on a partially built tree.
#[derive(Debug, Error)]
pub enum ArchiveError {
    #[error("Failed to open archive {path:?}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read archive entry: {0}")]
    Read(#[from] std::io::Error),

    #[error("Archive entry path is not valid UTF-8: {0:?}")]
    NonUtf8Path(Vec<u8>),

    #[error("Archive entry path escapes the archive root: {0}")]
    UnsafePath(String),

    #[error("Archive entry {path} is not UTF-8 text")]
    NonUtf8Content {
        path: String,
        #[source]
        source: std::string::FromUtf8Error,
    },
}

/// Recoverable per-call failures of the VFS facade.
///
/// These never abort the session; the command layer turns them into messages.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VfsError {
    #[error("No such file or directory: {0}")]
    NotFound(String),

    #[error("Not a directory: {0}")]
    NotADirectory(String),

    #[error("Is a directory: {0}")]
    IsADirectory(String),
}

/// Top-level error for startup and the CLI surface.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error(transparent)]
    Archive(#[from] ArchiveError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<config::ConfigError> for ApiError {
    fn from(err: config::ConfigError) -> Self {
        ApiError::ConfigError(err.to_string())
    }
}
