//! Tooling & Integration Layer
//!
//! The command-line surface and the interactive prompt loop that drive a
//! VFS session.

pub mod cli;
pub mod shell;

pub use cli::{Cli, CliContext};
pub use shell::{SessionEnd, Shell};
