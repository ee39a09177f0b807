//! cfnew: interactive scaffolder for competitive-programming problem folders.
//!
//! This is the main entry point for the `cfnew` CLI. It parses arguments,
//! sets up logging, runs the workflow, and maps the outcome to an exit code.

mod cli;
mod commands;
pub mod config;
pub mod error;
pub mod exit_codes;
pub mod fs;
pub mod problem;
pub mod prompt;
pub mod scaffold;

#[cfg(test)]
mod test_support;

use cli::Cli;
use std::io::IsTerminal;
use std::process::ExitCode;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    init_tracing(cli.verbose, cli.quiet);

    match commands::run(cli) {
        Ok(code) => ExitCode::from(exit_codes::to_exit_byte(code)),
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::from(exit_codes::to_exit_byte(err.exit_code()))
        }
    }
}

/// Logs go to stderr so prompts on stdout stay readable.
fn init_tracing(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
            1 => EnvFilter::new("info"),
            2 => EnvFilter::new("debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .with_ansi(std::io::stderr().is_terminal())
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}
