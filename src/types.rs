//! Core types shared across the shell.

/// Separator between path segments inside the virtual filesystem.
pub const PATH_SEPARATOR: char = '/';

/// Absolute path of the tree root.
pub const ROOT_PATH: &str = "/";

/// Top-level archive directory the shell starts in.
pub const DEFAULT_MOUNT: &str = "fs";

/// Segment: a single non-empty path component, never containing `/`.
pub type Segment = String;
