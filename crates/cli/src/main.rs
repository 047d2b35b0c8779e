//! envscope - resolve scoped .env configuration from the command line.
//!
//! Responsibilities:
//! - Parse command-line arguments.
//! - Initialize env-filtered logging on stderr.
//! - Dispatch to command execution and exit with a structured code.
//!
//! Invariants:
//! - stdout carries resolved values only; all diagnostics go to stderr,
//!   so output stays safe to capture in shell substitutions.

mod args;
mod commands;
mod error;

use args::Cli;
use clap::Parser;
use error::ExitCode;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    match commands::run(&cli) {
        Ok(code) => std::process::exit(code.as_i32()),
        Err(error) => {
            eprintln!("envscope: {error:#}");
            std::process::exit(ExitCode::GeneralError.as_i32());
        }
    }
}
