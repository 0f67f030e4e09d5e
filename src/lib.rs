//! Archive Integrity Library
//!
//! Scans a directory for PDF and ZIP files and reports which ones can be
//! opened and verified and which are corrupted.

pub mod cli;
pub mod core;
pub mod error;
pub mod reporting;
pub mod scanner;

pub use crate::core::validator;
pub use crate::reporting::report_writer;
pub use crate::scanner::file_scanner;

use crate::cli::Config;
use crate::error::CheckError;
use crate::scanner::FileOutcome;

/// Scan the configured directory and validate every matching file
///
/// Files are checked one at a time in discovery order.
pub fn scan_and_validate(config: &Config) -> Result<Vec<FileOutcome>, CheckError> {
    let paths = scanner::collect_files(&config.directory, &config.file_types, config.recursive)?;
    log::debug!("validating {} file(s)", paths.len());
    Ok(crate::core::validate_all(&paths))
}

/// Run the whole pipeline: scan, validate, then report
///
/// With a report file configured, results go only to that file; otherwise
/// they are printed to stdout.
pub fn run(config: &Config) -> Result<Vec<FileOutcome>, CheckError> {
    let results = scan_and_validate(config)?;

    match &config.report_file {
        Some(path) => {
            reporting::write_report(path, &results).map_err(|e| CheckError::ReportWrite {
                path: path.clone(),
                reason: format!("{:#}", e),
            })?;
            println!("Report saved to {}", path.display());
        }
        None => {
            if let Err(e) = reporting::print_report(&results, &config.file_types, &config.directory)
            {
                log::warn!("{:#}", e);
            }
        }
    }

    Ok(results)
}

/// Re-export commonly used types
pub mod prelude {
    pub use crate::cli::{parse_args, Config};
    pub use crate::core::outcome::{FileType, Outcome, Reason};
    pub use crate::core::pdf_check::check_pdf;
    pub use crate::core::validator::{validate_all, validate_file, FileCheck};
    pub use crate::core::zip_check::check_zip;
    pub use crate::error::CheckError;
    pub use crate::reporting::report_writer::{print_report, write_report};
    pub use crate::scanner::file_scanner::{collect_files, FileOutcome};
    pub use crate::{run, scan_and_validate};
}
