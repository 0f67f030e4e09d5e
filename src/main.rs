use clap::CommandFactory;
use std::ffi::OsString;
use std::process::ExitCode;

use archive_integrity::cli::{self, Cli};
use archive_integrity::error::CheckError;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<OsString> = std::env::args_os().skip(1).collect();

    if cli::help_requested(&args) {
        return print_help(&args);
    }

    let config = match cli::parse_args(&args) {
        Ok(config) => config,
        Err(e) => return fail(&e),
    };

    match archive_integrity::run(&config) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => fail(&e),
    }
}

fn fail(err: &CheckError) -> ExitCode {
    eprintln!("error: {}", err);
    if err.is_usage() {
        eprintln!("{}", cli::USAGE);
    }
    ExitCode::from(err.exit_code())
}

fn print_help(args: &[OsString]) -> ExitCode {
    let mut command = Cli::command();
    if args.iter().any(|a| a == "-V" || a == "--version") {
        print!("{}", command.render_version());
        return ExitCode::SUCCESS;
    }
    match command.print_help() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
