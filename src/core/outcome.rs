//! File types and per-file verdicts

use std::fmt;
use std::path::Path;

/// A file type that can be requested on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FileType {
    Pdf,
    Zip,
}

impl FileType {
    pub const ALL: [FileType; 2] = [FileType::Pdf, FileType::Zip];

    /// Literal filename extension, without the leading dot
    pub fn extension(self) -> &'static str {
        match self {
            FileType::Pdf => "pdf",
            FileType::Zip => "zip",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FileType::Pdf => "PDF",
            FileType::Zip => "ZIP",
        }
    }

    /// Resolve a type from a path's extension. Matching is case-sensitive.
    pub fn from_path(path: &Path) -> Option<FileType> {
        let ext = path.extension()?.to_str()?;
        FileType::ALL.into_iter().find(|t| t.extension() == ext)
    }
}

impl fmt::Display for FileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Why a file was judged corrupted
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reason {
    /// The PDF parsed but carries no document information dictionary
    BadMetadata,
    /// First archive member that failed to read or verify
    BadMember(String),
    /// Text of the error raised while opening or parsing the file
    Underlying(String),
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reason::BadMetadata => f.write_str("Bad Metadata"),
            Reason::BadMember(name) => f.write_str(name),
            Reason::Underlying(message) => f.write_str(message),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Usable,
    Corrupted(Reason),
}

impl Outcome {
    pub fn underlying(err: impl fmt::Display) -> Self {
        Outcome::Corrupted(Reason::Underlying(err.to_string()))
    }

    pub fn is_usable(&self) -> bool {
        matches!(self, Outcome::Usable)
    }

    pub fn reason(&self) -> Option<&Reason> {
        match self {
            Outcome::Usable => None,
            Outcome::Corrupted(reason) => Some(reason),
        }
    }
}
