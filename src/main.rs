//! licensescheck: license header and source hygiene gate.
//!
//! This is the main entry point for the `licensescheck` CLI. It parses
//! arguments, runs the check over every configured root, and exits with the
//! number of violations found (or the fatal code when the run aborts).

mod checks;
mod cli;
mod commands;
pub mod config;
pub mod error;
pub mod exit_codes;
mod fix;
pub mod fs;
mod licenses;
mod walk;

#[cfg(test)]
mod test_support;

use cli::Cli;
use std::process::ExitCode;

fn main() -> ExitCode {
    // Set RUST_LOG=debug for walk and repair tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse_args();

    match commands::run(cli) {
        Ok(errors) => ExitCode::from(exit_codes::from_tally(errors) as u8),
        Err(err) => {
            // Print the fatal error to stderr
            eprintln!("Error: {}", err);

            ExitCode::from(err.exit_code() as u8)
        }
    }
}
