//! Report writing functionality

use anyhow::{Context, Result};
use std::collections::BTreeSet;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::core::outcome::FileType;
use crate::scanner::file_scanner::FileOutcome;

pub const REPORT_HEADER: &str = "Filepath;Usable?;Known Errors";
const NO_ERRORS: &str = "No errors found";

/// Status and detail columns for one result
fn columns(result: &FileOutcome) -> (&'static str, String) {
    match result.detail() {
        None => ("usable", NO_ERRORS.to_string()),
        // Keep each record on a single line
        Some(detail) => ("corrupted", detail.replace(['\r', '\n'], " ")),
    }
}

/// Render results in the human-readable, tab-delimited console layout
pub fn render_console<W: Write>(
    out: &mut W,
    results: &[FileOutcome],
    file_types: &BTreeSet<FileType>,
    directory: &Path,
) -> io::Result<()> {
    let labels: Vec<&str> = file_types.iter().map(|t| t.label()).collect();
    writeln!(out, "Checked {} files in {}", labels.join(", "), directory.display())?;

    for result in results {
        let (status, detail) = columns(result);
        writeln!(out, "{}\t{}\t{}", result.path.display(), status, detail)?;
    }

    let usable = results.iter().filter(|r| r.is_usable()).count();
    writeln!(
        out,
        "Scan complete: {} usable, {} corrupted",
        usable,
        results.len() - usable
    )?;
    Ok(())
}

/// Print results to stdout
pub fn print_report(
    results: &[FileOutcome],
    file_types: &BTreeSet<FileType>,
    directory: &Path,
) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    render_console(&mut out, results, file_types, directory).context("Failed to print report")
}

/// Write validation results to a semicolon-delimited report file
///
/// # Arguments
/// * `output_path` - Path to output file
/// * `results` - Validation results to write
///
/// # Returns
/// Result indicating success or failure
pub fn write_report(output_path: &Path, results: &[FileOutcome]) -> Result<()> {
    let file = File::create(output_path)
        .with_context(|| format!("Failed to create {}", output_path.display()))?;
    let mut file = BufWriter::new(file);

    writeln!(file, "{}", REPORT_HEADER)?;
    for result in results {
        let (status, detail) = columns(result);
        writeln!(file, "{};{};{}", result.path.display(), status, detail)?;
    }

    file.flush()
        .with_context(|| format!("Failed to write {}", output_path.display()))?;
    Ok(())
}
