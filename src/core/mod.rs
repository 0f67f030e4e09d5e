//! Per-file integrity checks

pub mod outcome;
pub mod pdf_check;
pub mod validator;
pub mod zip_check;

pub use outcome::{FileType, Outcome, Reason};
pub use validator::{checker_for, validate_all, validate_file, FileCheck};
