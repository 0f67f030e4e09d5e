//! Command-line parsing into an immutable [`Config`]

use clap::{ArgAction, Parser};
use std::collections::BTreeSet;
use std::ffi::{OsStr, OsString};
use std::path::PathBuf;

use crate::core::outcome::FileType;
use crate::error::CheckError;

pub const USAGE: &str =
    "Usage: archive_integrity [-p|--pdf] [-z|--zip] [-r|--recurse] [--report-file <path>] <directory>";

const REPORT_FLAG: &str = "--report-file";
const RECOGNIZED_FLAGS: [&str; 7] = ["-p", "--pdf", "-z", "--zip", "-r", "--recurse", REPORT_FLAG];
const HELP_FLAGS: [&str; 4] = ["-h", "--help", "-V", "--version"];

#[derive(Parser, Debug)]
#[command(name = "archive_integrity", version)]
#[command(disable_help_flag = true, disable_version_flag = true)]
#[command(about = "Report usable and corrupted PDF and ZIP files in a directory", long_about = None)]
#[command(override_usage = "archive_integrity [-p|--pdf] [-z|--zip] [-r|--recurse] [--report-file <path>] <directory>")]
pub struct Cli {
    /// Check PDF files
    #[arg(short = 'p', long = "pdf", action = ArgAction::Count)]
    pub pdf: u8,

    /// Check ZIP archives
    #[arg(short = 'z', long = "zip", action = ArgAction::Count)]
    pub zip: u8,

    /// Scan directories recursively
    #[arg(short = 'r', long = "recurse", action = ArgAction::Count)]
    pub recurse: u8,

    /// Write a semicolon-delimited report instead of printing results
    #[arg(long = "report-file", value_name = "PATH", allow_hyphen_values = true)]
    pub report_file: Option<PathBuf>,

    /// Target directory to scan
    #[arg(allow_hyphen_values = true)]
    pub directory: OsString,
}

/// Validated run configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub directory: PathBuf,
    pub file_types: BTreeSet<FileType>,
    pub recursive: bool,
    pub report_file: Option<PathBuf>,
}

fn is_flag(token: &OsStr) -> bool {
    token.to_str().map_or(false, |t| RECOGNIZED_FLAGS.contains(&t))
}

fn is_report_flag(token: &OsStr) -> bool {
    token == REPORT_FLAG
}

/// Whether the tokens ask for help or version output instead of a scan
///
/// The directory slot and the report-path slot hold values, so a help flag
/// there is a path. A lone help flag is still honoured.
pub fn help_requested(tokens: &[OsString]) -> bool {
    let is_help = |t: &OsString| t.to_str().map_or(false, |t| HELP_FLAGS.contains(&t));
    if let [only] = tokens {
        return is_help(only);
    }

    let value_slots = match tokens.len().checked_sub(3) {
        Some(slot) if is_report_flag(&tokens[slot]) => 2,
        _ => 1,
    };
    let flag_count = tokens.len().saturating_sub(value_slots);
    tokens[..flag_count].iter().any(is_help)
}

fn usage(message: impl Into<String>) -> CheckError {
    CheckError::Usage(message.into())
}

/// Enforce token positions that clap cannot express
fn check_layout(tokens: &[OsString]) -> Result<(), CheckError> {
    match tokens.len() {
        0 => return Err(usage("need file type(s) and a directory")),
        1 => return Err(usage("need at least one file type")),
        _ => {}
    }

    let last = tokens.len() - 1;
    if is_flag(&tokens[last]) {
        return Err(usage("no directory given"));
    }

    // --report-file <path> <directory> must close the argument list
    let report_slot = tokens.len().checked_sub(3);
    for (idx, token) in tokens.iter().enumerate() {
        if is_report_flag(token) && Some(idx) != report_slot {
            return Err(usage(
                "--report-file must come right before <report path> <directory>",
            ));
        }
    }
    let has_report = report_slot.map_or(false, |slot| is_report_flag(&tokens[slot]));
    if has_report && is_flag(&tokens[last - 1]) {
        return Err(usage(format!(
            "--report-file needs a path, found flag '{}'",
            tokens[last - 1].to_string_lossy()
        )));
    }

    let report_path = if has_report { Some(last - 1) } else { None };
    for (idx, token) in tokens.iter().enumerate().take(last) {
        if Some(idx) != report_path && !is_flag(token) {
            let token = token.to_string_lossy();
            return Err(usage(format!("unrecognized argument '{}'", token)));
        }
    }

    Ok(())
}

fn is_quote(c: char) -> bool {
    c == '"' || c == '\''
}

/// Strip quote characters a shell may have passed through literally
fn strip_quotes(raw: &OsStr) -> PathBuf {
    match raw.to_str() {
        Some(text) => PathBuf::from(text.trim_matches(is_quote)),
        None => strip_quote_bytes(raw),
    }
}

#[cfg(unix)]
fn strip_quote_bytes(raw: &OsStr) -> PathBuf {
    use std::os::unix::ffi::OsStrExt;

    let mut bytes = raw.as_bytes();
    while let [b'"' | b'\'', rest @ ..] = bytes {
        bytes = rest;
    }
    while let [rest @ .., b'"' | b'\''] = bytes {
        bytes = rest;
    }
    PathBuf::from(OsStr::from_bytes(bytes))
}

#[cfg(not(unix))]
fn strip_quote_bytes(raw: &OsStr) -> PathBuf {
    PathBuf::from(raw)
}

/// Parse command-line tokens (without the program name) into a [`Config`]
///
/// # Returns
/// A usage error (exit code 1) for malformed arguments, or a directory
/// error (exit code 2) when the target is missing or not a directory
pub fn parse_args(tokens: &[OsString]) -> Result<Config, CheckError> {
    check_layout(tokens)?;

    let argv = std::iter::once(OsString::from("archive_integrity")).chain(tokens.iter().cloned());
    let cli = Cli::try_parse_from(argv).map_err(|e| {
        let rendered = e.to_string();
        let first = rendered.lines().next().unwrap_or_default();
        usage(first.trim_start_matches("error: ").to_string())
    })?;

    let mut file_types = BTreeSet::new();
    if cli.pdf > 0 {
        file_types.insert(FileType::Pdf);
    }
    if cli.zip > 0 {
        file_types.insert(FileType::Zip);
    }
    if file_types.is_empty() {
        return Err(usage("need at least one file type (-p/--pdf or -z/--zip)"));
    }

    let directory = strip_quotes(&cli.directory);
    if !directory.exists() {
        return Err(CheckError::MissingDirectory(directory));
    }
    if !directory.is_dir() {
        return Err(CheckError::NotADirectory(directory));
    }

    Ok(Config {
        directory,
        file_types,
        recursive: cli.recurse > 0,
        report_file: cli.report_file,
    })
}
