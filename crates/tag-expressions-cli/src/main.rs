//! Command line front end for tag expressions.
//!
//! `tag-expr format` prints the canonical form of an expression,
//! `tag-expr eval` evaluates it against tags given with `--tag`, and
//! `tag-expr tags` lists the tags it mentions. Evaluation exits with status 0
//! when the expression holds and 1 when it does not; syntax and
//! configuration errors exit with status 2.

use std::io::Write;
use std::process::ExitCode;

use clap::Parser;

mod cli;
mod config;
mod error;
mod logging;

use cli::{Cli, Outcome};
use config::CliConfig;
use logging::init_logging;

const FAILURE: u8 = 2;

fn main() -> ExitCode {
    let args = Cli::parse();

    let config = match CliConfig::from_env() {
        Ok(config) => config.apply_overrides(args.log_level),
        Err(e) => {
            init_logging(&CliConfig::default());
            report(&e);
            return ExitCode::from(FAILURE);
        }
    };
    init_logging(&config);

    match cli::run(&args.command) {
        Ok(Outcome::Success) => ExitCode::SUCCESS,
        Ok(Outcome::NoMatch) => ExitCode::FAILURE,
        Err(e) => {
            report(&e);
            ExitCode::from(FAILURE)
        }
    }
}

fn report(error: &dyn std::fmt::Display) {
    tracing::debug!(error = %error, "command failed");
    let _ = writeln!(std::io::stderr(), "{error}");
}
