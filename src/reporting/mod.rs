//! Console and file reports

pub mod report_writer;

pub use report_writer::{print_report, render_console, write_report, REPORT_HEADER};
