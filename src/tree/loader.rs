//! Archive loader
//!
//! Reads a tar archive once and materializes it as an in-memory tree. Entries
//! are applied in stored order; parent directories missing from the archive
//! are created on demand.

use super::node::{DirectoryNode, Node};
use crate::error::ArchiveError;
use crate::types::PATH_SEPARATOR;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tar::{Archive, EntryType};
use tracing::{debug, info, warn};

/// Counters collected while loading an archive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadSummary {
    pub files: usize,
    pub directories: usize,
    pub skipped: usize,
}

/// Load the archive at `archive_path` into a tree rooted at an unnamed directory.
pub fn load(archive_path: &Path) -> Result<Node, ArchiveError> {
    let file = File::open(archive_path).map_err(|source| ArchiveError::Open {
        path: archive_path.to_path_buf(),
        source,
    })?;
    let (root, summary) = load_from_reader(BufReader::new(file))?;
    info!(
        archive = %archive_path.display(),
        files = summary.files,
        directories = summary.directories,
        skipped = summary.skipped,
        "Loaded archive"
    );
    Ok(root)
}

/// Load a tar stream into a tree.
pub fn load_from_reader<R: Read>(reader: R) -> Result<(Node, LoadSummary), ArchiveError> {
    let mut archive = Archive::new(reader);
    let mut root = DirectoryNode::new();
    let mut summary = LoadSummary::default();

    for entry in archive.entries()? {
        let mut entry = entry?;
        let raw_path = entry.path_bytes().into_owned();
        let name = String::from_utf8(raw_path)
            .map_err(|e| ArchiveError::NonUtf8Path(e.into_bytes()))?;
        let entry_type = entry.header().entry_type();

        match entry_type {
            EntryType::Regular | EntryType::Continuous | EntryType::GNUSparse => {
                let segments = entry_segments(&name)?;
                let Some((file_name, parents)) = segments.split_last() else {
                    return Err(ArchiveError::UnsafePath(name));
                };

                let mut bytes = Vec::new();
                entry.read_to_end(&mut bytes)?;
                let content = String::from_utf8(bytes).map_err(|source| {
                    ArchiveError::NonUtf8Content {
                        path: name.clone(),
                        source,
                    }
                })?;

                let parent = walk_directories(&mut root, parents, &name);
                if let Some(previous) = parent.insert(*file_name, Node::file(content)) {
                    warn!(
                        entry = %name,
                        replaced_directory = previous.is_directory(),
                        "Archive lists path more than once; keeping the later entry"
                    );
                }
                summary.files += 1;
            }
            EntryType::Directory => {
                let segments = entry_segments(&name)?;
                walk_directories(&mut root, &segments, &name);
                summary.directories += 1;
            }
            other => {
                debug!(entry = %name, kind = ?other, "Skipping unsupported archive entry");
                summary.skipped += 1;
            }
        }
    }

    Ok((Node::Directory(root), summary))
}

/// Split an entry name into tree segments.
///
/// Empty and `.` segments are dropped so `./fs/a` and `fs//a/` load like
/// `fs/a`. A `..` segment could never be reached through the shell, so it is
/// rejected.
fn entry_segments(name: &str) -> Result<Vec<&str>, ArchiveError> {
    let mut segments = Vec::new();
    for segment in name.split(PATH_SEPARATOR) {
        match segment {
            "" | "." => {}
            ".." => return Err(ArchiveError::UnsafePath(name.to_string())),
            segment => segments.push(segment),
        }
    }
    Ok(segments)
}

/// Walk `segments` from `root`, creating directories that do not exist yet.
fn walk_directories<'a>(
    root: &'a mut DirectoryNode,
    segments: &[&str],
    entry_name: &str,
) -> &'a mut DirectoryNode {
    let mut current = root;
    for segment in segments {
        if matches!(current.get(segment), Some(Node::File(_))) {
            warn!(
                entry = %entry_name,
                segment = %segment,
                "Archive entry needs a directory where a file was stored; replacing the file"
            );
        }
        current = current.ensure_directory(segment);
    }
    current
}
