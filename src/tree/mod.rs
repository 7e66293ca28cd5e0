//! Virtual filesystem tree
//!
//! In-memory representation of an archive: node types, the loader that builds
//! them, lexical path normalization, and resolution of paths to nodes.

pub mod loader;
pub mod navigator;
pub mod node;
pub mod path;

pub use loader::{load, load_from_reader, LoadSummary};
pub use navigator::resolve;
pub use node::{DirectoryNode, FileNode, Node};
pub use path::normalize;
