//! Command-line interface

pub mod args;

pub use args::{help_requested, parse_args, Cli, Config, USAGE};
