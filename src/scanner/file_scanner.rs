//! Candidate file discovery

use std::collections::BTreeSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::core::outcome::{FileType, Outcome};
use crate::error::CheckError;

/// Result of validating a single file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileOutcome {
    pub path: PathBuf,
    pub outcome: Outcome,
}

impl FileOutcome {
    pub fn is_usable(&self) -> bool {
        self.outcome.is_usable()
    }

    /// Detail text for a corrupted file, `None` when usable
    pub fn detail(&self) -> Option<String> {
        self.outcome.reason().map(|r| r.to_string())
    }
}

/// Collect files of the requested types from a directory
///
/// # Arguments
/// * `dir` - Directory to scan
/// * `file_types` - Types to look for; results are grouped in this order
/// * `recursive` - Whether to scan subdirectories recursively
///
/// # Returns
/// File paths, sorted by name within each directory. Unreadable
/// subdirectories are skipped; an unreadable `dir` is an error.
pub fn collect_files(
    dir: &Path,
    file_types: &BTreeSet<FileType>,
    recursive: bool,
) -> Result<Vec<PathBuf>, CheckError> {
    let mut files = Vec::new();

    for &file_type in file_types {
        let mut found = if recursive {
            collect_recursive(dir, file_type)?
        } else {
            collect_flat(dir, file_type)?
        };
        log::debug!("found {} {} file(s) in {}", found.len(), file_type, dir.display());
        files.append(&mut found);
    }

    Ok(files)
}

fn has_extension(path: &Path, file_type: FileType) -> bool {
    matches!(path.extension(), Some(ext) if ext == file_type.extension())
}

fn collect_recursive(dir: &Path, file_type: FileType) -> Result<Vec<PathBuf>, CheckError> {
    let mut files = Vec::new();

    for entry in WalkDir::new(dir).follow_links(false).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) if e.depth() == 0 => {
                let message = e.to_string();
                let source = e
                    .into_io_error()
                    .unwrap_or_else(|| io::Error::new(io::ErrorKind::Other, message));
                return Err(CheckError::Unreadable {
                    path: dir.to_path_buf(),
                    source,
                });
            }
            Err(e) => {
                log::warn!("Skipping unreadable entry: {}", e);
                continue;
            }
        };

        if entry.file_type().is_file() && has_extension(entry.path(), file_type) {
            files.push(entry.into_path());
        }
    }

    Ok(files)
}

fn collect_flat(dir: &Path, file_type: FileType) -> Result<Vec<PathBuf>, CheckError> {
    let entries = fs::read_dir(dir).map_err(|source| CheckError::Unreadable {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                log::warn!("Skipping unreadable entry in {}: {}", dir.display(), e);
                continue;
            }
        };
        let is_file = entry.file_type().map(|t| t.is_file()).unwrap_or(false);
        let path = entry.path();
        if is_file && has_extension(&path, file_type) {
            files.push(path);
        }
    }

    files.sort();
    Ok(files)
}
