//! Resolution of canonical paths to tree nodes

use super::node::Node;
use super::path;
use crate::error::VfsError;

/// Resolve an absolute, normalized path starting from `root`.
///
/// Zero segments resolve to `root` itself. Fails with `NotFound` when a
/// segment is missing or when a non-final segment names a file.
pub fn resolve<'a>(root: &'a Node, absolute_path: &str) -> Result<&'a Node, VfsError> {
    let mut current = root;
    for segment in path::segments(absolute_path) {
        current = match current {
            Node::Directory(dir) => dir
                .get(segment)
                .ok_or_else(|| VfsError::NotFound(absolute_path.to_string()))?,
            Node::File(_) => return Err(VfsError::NotFound(absolute_path.to_string())),
        };
    }
    Ok(current)
}
