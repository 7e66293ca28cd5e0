//! Path normalization for the virtual filesystem
//!
//! Turns a possibly relative path plus the current directory into a canonical
//! absolute path. Normalization is purely lexical: it never consults the tree,
//! so a normalized path may still fail to resolve.

use crate::types::{PATH_SEPARATOR, ROOT_PATH};

/// Normalize `input` against `current_dir`.
///
/// Absolute input ignores `current_dir`. Empty and `.` segments are dropped,
/// `..` removes the previous segment and stops at the root. Never fails.
pub fn normalize(current_dir: &str, input: &str) -> String {
    let combined: Vec<&str> = if input.starts_with(PATH_SEPARATOR) {
        input.split(PATH_SEPARATOR).collect()
    } else {
        current_dir
            .split(PATH_SEPARATOR)
            .chain(input.split(PATH_SEPARATOR))
            .collect()
    };

    let mut normalized: Vec<&str> = Vec::with_capacity(combined.len());
    for segment in combined {
        match segment {
            "" | "." => {}
            ".." => {
                normalized.pop();
            }
            name => normalized.push(name),
        }
    }

    join(&normalized)
}

/// Split an absolute path into its non-empty segments.
pub fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split(PATH_SEPARATOR)
        .filter(|segment| !segment.is_empty())
}

/// Join segments into an absolute path; no segments yields the root.
pub fn join<S: AsRef<str>>(segments: &[S]) -> String {
    if segments.is_empty() {
        return ROOT_PATH.to_string();
    }
    let mut path = String::new();
    for segment in segments {
        path.push(PATH_SEPARATOR);
        path.push_str(segment.as_ref());
    }
    path
}
