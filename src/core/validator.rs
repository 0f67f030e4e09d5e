//! Extension-based dispatch to the per-format checks

use std::path::Path;

use super::outcome::{FileType, Outcome};
use super::pdf_check::PdfCheck;
use super::zip_check::ZipCheck;
use crate::scanner::file_scanner::FileOutcome;

/// A format-specific integrity check.
///
/// Implementations must not modify the file and must turn every failure,
/// including an open failure, into an [`Outcome`].
pub trait FileCheck {
    fn check(&self, path: &Path) -> Outcome;
}

/// Check registered for a file type
pub fn checker_for(file_type: FileType) -> &'static dyn FileCheck {
    match file_type {
        FileType::Pdf => &PdfCheck,
        FileType::Zip => &ZipCheck,
    }
}

/// Validate a single file, choosing the check by its extension
///
/// Prints a progress line to stdout before the check runs.
pub fn validate_file(path: &Path) -> FileOutcome {
    let outcome = match FileType::from_path(path) {
        Some(file_type) => {
            println!("Testing {} file {}", file_type.label(), path.display());
            checker_for(file_type).check(path)
        }
        None => {
            log::debug!("no check registered for {}", path.display());
            Outcome::underlying("unsupported file type")
        }
    };

    if let Some(reason) = outcome.reason() {
        log::warn!("{} is corrupted: {}", path.display(), reason);
    }

    FileOutcome {
        path: path.to_path_buf(),
        outcome,
    }
}

/// Validate every path in order
pub fn validate_all(paths: &[impl AsRef<Path>]) -> Vec<FileOutcome> {
    paths.iter().map(|p| validate_file(p.as_ref())).collect()
}
