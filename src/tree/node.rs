//! Filesystem node types

use crate::types::Segment;

/// File node representation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileNode {
    content: String,
}

impl FileNode {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

/// Directory node representation
///
/// Children keep the order in which they were first inserted. Re-inserting an
/// existing name replaces the node in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectoryNode {
    children: Vec<(Segment, Node)>, // (name, node) in insertion order
}

impl DirectoryNode {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&Node> {
        self.children
            .iter()
            .find(|(child, _)| child == name)
            .map(|(_, node)| node)
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Child names in insertion order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.children.iter().map(|(name, _)| name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Node)> {
        self.children.iter().map(|(name, node)| (name.as_str(), node))
    }

    /// Insert a child, returning the node it replaced.
    pub fn insert(&mut self, name: impl Into<Segment>, node: Node) -> Option<Node> {
        let name = name.into();
        match self.position(&name) {
            Some(index) => Some(std::mem::replace(&mut self.children[index].1, node)),
            None => {
                self.children.push((name, node));
                None
            }
        }
    }

    /// Get the child directory `name`, creating it when absent.
    ///
    /// A file already stored under `name` is replaced by an empty directory.
    pub fn ensure_directory(&mut self, name: &str) -> &mut DirectoryNode {
        let index = match self.position(name) {
            Some(index) => index,
            None => {
                self.children
                    .push((name.to_string(), Node::Directory(DirectoryNode::new())));
                self.children.len() - 1
            }
        };

        let slot = &mut self.children[index].1;
        if let Node::File(_) = slot {
            *slot = Node::Directory(DirectoryNode::new());
        }
        match slot {
            Node::Directory(dir) => dir,
            Node::File(_) => unreachable!("file slot was replaced by a directory"),
        }
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.children.iter().position(|(child, _)| child == name)
    }
}

/// Tree node: a directory mapping or a file payload, never both
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    File(FileNode),
    Directory(DirectoryNode),
}

impl Node {
    pub fn file(content: impl Into<String>) -> Self {
        Node::File(FileNode::new(content))
    }

    pub fn empty_directory() -> Self {
        Node::Directory(DirectoryNode::new())
    }

    pub fn is_directory(&self) -> bool {
        matches!(self, Node::Directory(_))
    }

    pub fn as_directory(&self) -> Option<&DirectoryNode> {
        match self {
            Node::Directory(dir) => Some(dir),
            Node::File(_) => None,
        }
    }

    pub fn as_file(&self) -> Option<&FileNode> {
        match self {
            Node::File(file) => Some(file),
            Node::Directory(_) => None,
        }
    }
}
