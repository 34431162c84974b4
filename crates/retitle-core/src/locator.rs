//! Candidate document discovery.
//!
//! Walks a content root and yields every markdown source that is eligible
//! for title rewriting. Site tooling directories and fixed pages (home,
//! error, about, contact, legal) are never yielded.

use std::path::{Path, PathBuf};

use tracing::warn;
use walkdir::{DirEntry, WalkDir};

use crate::RetitleError;

/// File extension of candidate documents (compared case-insensitively).
pub const DOCUMENT_EXTENSION: &str = "md";

/// Directories never descended into.
pub const EXCLUDED_DIRS: &[&str] = &[".vitepress", "node_modules"];

/// Page file names that are never rewritten.
pub const EXCLUDED_FILES: &[&str] = &[
    "index.md",
    "404.md",
    "about.md",
    "contact.md",
    "privacy.md",
    "terms.md",
];

/// Lazily walk `root` and yield candidate document paths in file-name order.
///
/// Fails up front with [`RetitleError::RootNotFound`] when `root` is not an
/// existing directory; nothing is yielded in that case. Entries that cannot
/// be read during the walk are logged and skipped.
pub fn locate(root: &Path) -> Result<impl Iterator<Item = PathBuf>, RetitleError> {
    if !root.is_dir() {
        return Err(RetitleError::RootNotFound(root.to_path_buf()));
    }

    let walker = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| entry.depth() == 0 || !is_excluded_dir(entry));

    Ok(walker
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                warn!(error = %e, "skipping unreadable entry");
                None
            }
        })
        .filter(|entry| entry.file_type().is_file() && is_candidate(entry.path()))
        .map(DirEntry::into_path))
}

fn is_excluded_dir(entry: &DirEntry) -> bool {
    entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| EXCLUDED_DIRS.contains(&name))
}

/// Whether a file path names a candidate document.
pub fn is_candidate(path: &Path) -> bool {
    let has_extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(DOCUMENT_EXTENSION));
    if !has_extension {
        return false;
    }

    match path.file_name().and_then(|name| name.to_str()) {
        Some(name) => !EXCLUDED_FILES
            .iter()
            .any(|excluded| excluded.eq_ignore_ascii_case(name)),
        None => false,
    }
}
