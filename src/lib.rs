//! Tarsh: a read-only shell over tar archives
//!
//! Loads a tar archive into an in-memory virtual filesystem and lets a user
//! browse it with `ls`, `cd`, `tail`, and `find`. Every command is transcribed
//! to an append-only audit log.

pub mod audit;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod tooling;
pub mod tree;
pub mod types;
pub mod vfs;

pub use error::{ApiError, ArchiveError, VfsError};
pub use vfs::VirtualFileSystem;
