//! Fatal errors and their process exit codes

use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort the whole run.
///
/// Per-file problems are never represented here; they are captured as
/// [`crate::core::outcome::Reason`] values instead.
#[derive(Debug, Error)]
pub enum CheckError {
    #[error("{0}")]
    Usage(String),

    #[error("{} does not exist", .0.display())]
    MissingDirectory(PathBuf),

    #[error("{} is not a directory", .0.display())]
    NotADirectory(PathBuf),

    #[error("cannot read directory {}: {source}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not write report to {}: {reason}", path.display())]
    ReportWrite { path: PathBuf, reason: String },
}

impl CheckError {
    /// Process exit code for this error
    pub fn exit_code(&self) -> u8 {
        match self {
            CheckError::Usage(_) => 1,
            CheckError::MissingDirectory(_) | CheckError::NotADirectory(_) => 2,
            CheckError::Unreadable { .. } => 3,
            CheckError::ReportWrite { .. } => 4,
        }
    }

    pub fn is_usage(&self) -> bool {
        matches!(self, CheckError::Usage(_))
    }
}
