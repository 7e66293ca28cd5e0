//! VFS facade
//!
//! Owns the loaded tree and the session cursor. Every operation normalizes its
//! path argument against the cursor and resolves it through the navigator; the
//! command layer talks to nothing else.

use crate::error::{ArchiveError, VfsError};
use crate::tree::node::{DirectoryNode, Node};
use crate::tree::{loader, navigator, path};
use crate::types::{DEFAULT_MOUNT, PATH_SEPARATOR, ROOT_PATH};
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, warn};

/// Read-only view of an archive with a current directory.
///
/// The tree is shared behind an `Arc` and never mutated after load, so
/// several sessions can browse the same archive, each with its own cursor.
#[derive(Debug, Clone)]
pub struct VirtualFileSystem {
    root: Arc<Node>,
    mount_point: String,
    cwd: String,
}

impl VirtualFileSystem {
    /// Load an archive and mount it at the default `/fs`.
    pub fn open(archive_path: &Path) -> Result<Self, ArchiveError> {
        Ok(Self::new(loader::load(archive_path)?))
    }

    /// Wrap an already built tree, mounted at `/fs`.
    pub fn new(root: Node) -> Self {
        Self::with_mount(Arc::new(root), DEFAULT_MOUNT)
    }

    /// Start a session on a shared tree with the cursor at `/<mount>`.
    ///
    /// Falls back to the root when the archive has no directory named `mount`.
    pub fn with_mount(root: Arc<Node>, mount: &str) -> Self {
        let mount_point = path::normalize(ROOT_PATH, mount);
        let cwd = match navigator::resolve(&root, &mount_point) {
            Ok(node) if node.is_directory() => mount_point.clone(),
            _ => {
                warn!(
                    mount = %mount_point,
                    "Archive has no mount directory; starting at the root"
                );
                ROOT_PATH.to_string()
            }
        };
        Self {
            root,
            mount_point,
            cwd,
        }
    }

    /// A fresh session over the same tree, cursor reset to the mount point.
    pub fn new_session(&self) -> Self {
        let mount = self.mount_point.trim_start_matches(PATH_SEPARATOR);
        Self::with_mount(Arc::clone(&self.root), mount)
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    pub fn shared_root(&self) -> Arc<Node> {
        Arc::clone(&self.root)
    }

    pub fn current_dir(&self) -> &str {
        &self.cwd
    }

    pub fn mount_point(&self) -> &str {
        &self.mount_point
    }

    /// Normalize `input` against the cursor.
    pub fn normalize(&self, input: &str) -> String {
        path::normalize(&self.cwd, input)
    }

    /// Child names of the directory at `path` (the cursor when `None`).
    ///
    /// Missing paths and files both yield an empty listing.
    pub fn list(&self, path: Option<&str>) -> Vec<&str> {
        self.try_list(path).unwrap_or_default()
    }

    /// Like [`list`](Self::list) but reports why a listing is unavailable.
    pub fn try_list(&self, path: Option<&str>) -> Result<Vec<&str>, VfsError> {
        let target = self.normalize(path.unwrap_or(""));
        match navigator::resolve(&self.root, &target)? {
            Node::Directory(dir) => Ok(dir.names().collect()),
            Node::File(_) => Err(VfsError::NotADirectory(target)),
        }
    }

    /// Move the cursor to the directory at `path`.
    ///
    /// On failure the cursor is left untouched.
    pub fn change_directory(&mut self, path: &str) -> Result<(), VfsError> {
        let target = self.normalize(path);
        match navigator::resolve(&self.root, &target)? {
            Node::Directory(_) => {
                debug!(from = %self.cwd, to = %target, "Changed directory");
                self.cwd = target;
                Ok(())
            }
            Node::File(_) => Err(VfsError::NotADirectory(target)),
        }
    }

    /// Full text of the file at `path`.
    pub fn read_file(&self, path: &str) -> Result<&str, VfsError> {
        let target = self.normalize(path);
        match navigator::resolve(&self.root, &target)? {
            Node::File(file) => Ok(file.content()),
            Node::Directory(_) => Err(VfsError::IsADirectory(target)),
        }
    }

    /// Search the whole tree for files named `filename`.
    ///
    /// Traversal is pre-order from the root in insertion order, independent of
    /// the cursor. Directories with a matching name are not reported. Paths
    /// under the mount point are reported without the mount prefix, so
    /// `/fs/dir2/file3.txt` comes back as `/dir2/file3.txt`.
    pub fn find(&self, filename: &str) -> Vec<String> {
        let mut matches = Vec::new();
        if let Node::Directory(root) = self.root.as_ref() {
            let mut prefix = Vec::new();
            collect_matches(root, &mut prefix, filename, &mut matches);
        }
        matches
            .into_iter()
            .map(|full| self.strip_mount(full))
            .collect()
    }

    fn strip_mount(&self, full: String) -> String {
        match full.strip_prefix(self.mount_point.as_str()) {
            Some(rest) if rest.starts_with(PATH_SEPARATOR) => rest.to_string(),
            _ => full,
        }
    }
}

fn collect_matches<'a>(
    dir: &'a DirectoryNode,
    prefix: &mut Vec<&'a str>,
    filename: &str,
    matches: &mut Vec<String>,
) {
    for (name, node) in dir.iter() {
        match node {
            Node::Directory(child) => {
                prefix.push(name);
                collect_matches(child, prefix, filename, matches);
                prefix.pop();
            }
            Node::File(_) if name == filename => {
                prefix.push(name);
                matches.push(path::join(prefix.as_slice()));
                prefix.pop();
            }
            Node::File(_) => {}
        }
    }
}
