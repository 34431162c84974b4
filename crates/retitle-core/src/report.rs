//! Batch processing: read, rewrite, optionally write back, and report.
//!
//! Per-document problems never abort the batch. A document without a
//! frontmatter title is skipped with a warning; a read or write failure is
//! logged against the file and counted. Only a missing content root stops
//! the run, before any document is touched.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{error, info, warn};

use crate::RetitleError;
use crate::frontmatter::{extract_title, replace_title};
use crate::locator::locate;
use crate::rewrite::Rulebook;

/// Whether changed titles are written back to disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Mode {
    Apply,
    DryRun,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Apply => "apply",
            Self::DryRun => "dry-run",
        }
    }
}

/// One document whose title changed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeRecord {
    pub file_path: PathBuf,
    pub old_title: String,
    pub new_title: String,
}

/// Result of processing one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Unchanged,
    /// No frontmatter block or no `title` in it.
    Skipped,
    Changed(ChangeRecord),
}

/// Aggregate of a whole run.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub mode: Mode,
    pub scanned: usize,
    pub skipped: usize,
    pub failed: usize,
    pub changed: usize,
    pub changes: Vec<ChangeRecord>,
}

impl Report {
    pub fn new(mode: Mode) -> Self {
        Self {
            mode,
            scanned: 0,
            skipped: 0,
            failed: 0,
            changed: 0,
            changes: Vec::new(),
        }
    }

    fn push(&mut self, change: ChangeRecord) {
        self.changed += 1;
        self.changes.push(change);
    }
}

/// Where documents are read from and written back to.
pub trait DocumentStore {
    fn read(&self, path: &Path) -> io::Result<String>;
    fn write(&self, path: &Path, contents: &str) -> io::Result<()>;
}

/// The local file system.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsStore;

impl DocumentStore for FsStore {
    fn read(&self, path: &Path) -> io::Result<String> {
        fs::read_to_string(path)
    }

    fn write(&self, path: &Path, contents: &str) -> io::Result<()> {
        fs::write(path, contents)
    }
}

/// Rewrite the title of one document under `root`.
///
/// The fallback classifier sees the path relative to `root`, so folders
/// above the content tree never pick the phrasing. In [`Mode::Apply`] the
/// title line is replaced in place; in [`Mode::DryRun`] nothing is written.
pub fn process_document(
    book: &Rulebook,
    store: &impl DocumentStore,
    root: &Path,
    path: &Path,
    mode: Mode,
) -> Result<Outcome, RetitleError> {
    let text = store.read(path).map_err(|e| RetitleError::io(path, e))?;

    let Some(field) = extract_title(&text) else {
        return Ok(Outcome::Skipped);
    };

    let relative = path.strip_prefix(root).unwrap_or(path);
    let new_title = book.rewrite(&field.value, relative);
    if new_title == field.value {
        return Ok(Outcome::Unchanged);
    }

    if mode == Mode::Apply {
        let updated = replace_title(&text, &field, &new_title);
        store
            .write(path, &updated)
            .map_err(|e| RetitleError::io(path, e))?;
    }

    Ok(Outcome::Changed(ChangeRecord {
        file_path: path.to_path_buf(),
        old_title: field.value,
        new_title,
    }))
}

/// Process every document yielded by `paths`, all located under `root`.
pub fn process_all(
    book: &Rulebook,
    store: &impl DocumentStore,
    root: &Path,
    paths: impl IntoIterator<Item = PathBuf>,
    mode: Mode,
) -> Report {
    let mut report = Report::new(mode);

    for path in paths {
        report.scanned += 1;
        match process_document(book, store, root, &path, mode) {
            Ok(Outcome::Changed(change)) => {
                info!(
                    path = %path.display(),
                    old = %change.old_title,
                    new = %change.new_title,
                    "title rewritten"
                );
                report.push(change);
            }
            Ok(Outcome::Unchanged) => {}
            Ok(Outcome::Skipped) => {
                warn!(path = %path.display(), "no frontmatter title, skipping");
                report.skipped += 1;
            }
            Err(e) => {
                error!(path = %path.display(), error = %e, "failed to process document");
                report.failed += 1;
            }
        }
    }

    report
}

/// Locate documents under `root` and process them all on the file system.
///
/// Fails only when `root` is missing.
pub fn run(book: &Rulebook, root: &Path, mode: Mode) -> Result<Report, RetitleError> {
    let paths = locate(root)?;
    info!(root = %root.display(), mode = mode.as_str(), "scanning documents");
    Ok(process_all(book, &FsStore, root, paths, mode))
}
