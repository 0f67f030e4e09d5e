//! End-to-end tests running the built binary
//!
//! Checks the exit codes and the diagnostics printed for fatal errors.

use std::ffi::OsStr;
use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn run_binary(args: &[&OsStr]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_archive_integrity"))
        .args(args)
        .output()
        .expect("failed to launch binary")
}

fn run_with(args: &[&str]) -> Output {
    let args: Vec<&OsStr> = args.iter().map(OsStr::new).collect();
    run_binary(&args)
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn path_str(path: &Path) -> &str {
    path.to_str().unwrap()
}

#[test]
fn test_no_arguments_prints_usage() {
    let output = run_with(&[]);

    assert_eq!(output.status.code(), Some(1));
    let err = stderr(&output);
    assert!(err.contains("need file type(s) and a directory"));
    assert!(err.contains("Usage: archive_integrity"));
}

#[test]
fn test_missing_file_type_prints_usage() {
    let dir = TempDir::new().unwrap();

    let output = run_with(&["-r", path_str(dir.path())]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Usage: archive_integrity"));
}

#[test]
fn test_missing_directory_exits_with_code_2() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("missing");

    let output = run_with(&["-p", path_str(&missing)]);

    assert_eq!(output.status.code(), Some(2));
    let err = stderr(&output);
    assert!(err.contains("does not exist"));
    assert!(!err.contains("Usage:"));
}

#[test]
fn test_help_flag_as_directory_exits_with_code_2() {
    let output = run_with(&["-p", "-h"]);

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("does not exist"));
}

#[test]
fn test_lone_help_flag_prints_help() {
    let output = run_with(&["--help"]);

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("--report-file"));
}

#[test]
fn test_unwritable_report_exits_with_code_4() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("broken.pdf"), b"").unwrap();
    let report = dir.path().join("no_such_dir").join("report.csv");

    let output = run_with(&["-p", "--report-file", path_str(&report), path_str(dir.path())]);

    assert_eq!(output.status.code(), Some(4));
    assert!(stderr(&output).contains("report.csv"));
    assert!(stdout(&output).contains("Testing PDF file"));
}

#[test]
fn test_report_file_run_succeeds() {
    let dir = TempDir::new().unwrap();
    let scan_root = dir.path().join("scan");
    fs::create_dir(&scan_root).unwrap();
    fs::write(scan_root.join("broken.zip"), b"not a zip").unwrap();
    let report = dir.path().join("report.csv");

    let output = run_with(&["--zip", "--report-file", path_str(&report), path_str(&scan_root)]);

    assert_eq!(output.status.code(), Some(0));
    let content = fs::read_to_string(&report).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines[0], "Filepath;Usable?;Known Errors");
    assert!(lines[1].starts_with(&format!("{};corrupted;", scan_root.join("broken.zip").display())));
    assert!(!stdout(&output).contains("\tcorrupted\t"));
}

#[test]
fn test_console_run_succeeds() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("broken.pdf"), b"").unwrap();

    let output = run_with(&["-p", path_str(dir.path())]);

    assert_eq!(output.status.code(), Some(0));
    let out = stdout(&output);
    assert!(out.contains("Checked PDF files in"));
    assert!(out.contains("broken.pdf\tcorrupted\t"));
    assert!(out.contains("Scan complete: 0 usable, 1 corrupted"));
}

#[cfg(target_os = "linux")]
#[test]
fn test_non_utf8_directory_does_not_abort() {
    use std::os::unix::ffi::OsStrExt;

    let dir = TempDir::new().unwrap();
    let target = dir.path().join(OsStr::from_bytes(b"pd_\xff"));
    fs::create_dir(&target).unwrap();

    let output = run_binary(&[OsStr::new("-p"), target.as_os_str()]);

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("Scan complete: 0 usable, 0 corrupted"));
}
