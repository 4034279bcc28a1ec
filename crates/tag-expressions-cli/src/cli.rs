//! Command dispatch and formatting for the `tag-expr` entrypoint.

use std::io::{self, Write};

use clap::{Args, Parser, Subcommand};
use eyre::{Context, Result};
use serde::Serialize;
use tag_expressions::Expression;

use crate::config::LogLevel;

/// Format and evaluate boolean tag expressions.
#[derive(Parser, Debug)]
#[command(name = "tag-expr", version, about)]
pub(crate) struct Cli {
    /// Log level (trace, debug, info, warn, error).
    #[arg(long, global = true)]
    pub(crate) log_level: Option<LogLevel>,
    #[command(subcommand)]
    pub(crate) command: Commands,
}

/// Supported commands.
#[derive(Subcommand, Debug)]
pub(crate) enum Commands {
    /// Print the canonical, fully parenthesised form of an expression.
    Format {
        /// The tag expression.
        expression: String,
    },
    /// Evaluate an expression against a set of tags.
    Eval(EvalArgs),
    /// List the tags an expression mentions.
    Tags {
        /// The tag expression.
        expression: String,
    },
}

#[derive(Args, Debug)]
pub(crate) struct EvalArgs {
    /// The tag expression.
    pub(crate) expression: String,
    /// A tag attached to the test; repeat for several tags.
    #[arg(long = "tag", short = 't')]
    pub(crate) tags: Vec<String>,
    /// Emit JSON instead of `true`/`false`.
    #[arg(long)]
    pub(crate) json: bool,
}

/// Result of a successful command, mapped to the process exit status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Outcome {
    /// The command completed; for `eval`, the expression held.
    Success,
    /// `eval` completed and the expression did not hold.
    NoMatch,
}

#[derive(Serialize)]
struct EvalReport<'a> {
    expression: String,
    tags: &'a [String],
    result: bool,
}

pub(crate) fn run(command: &Commands) -> Result<Outcome> {
    let mut stdout = io::stdout();
    let outcome = execute(command, &mut stdout)?;
    stdout.flush().wrap_err("failed to flush stdout")?;
    Ok(outcome)
}

fn execute(command: &Commands, writer: &mut dyn Write) -> Result<Outcome> {
    match command {
        Commands::Format { expression } => {
            let expr = parse(expression)?;
            writeln!(writer, "{expr}").wrap_err("failed to write canonical form")?;
            Ok(Outcome::Success)
        }
        Commands::Eval(args) => handle_eval(args, writer),
        Commands::Tags { expression } => {
            let expr = parse(expression)?;
            for tag in expr.literals() {
                writeln!(writer, "{tag}").wrap_err_with(|| format!("failed to write tag {tag}"))?;
            }
            Ok(Outcome::Success)
        }
    }
}

fn handle_eval(args: &EvalArgs, writer: &mut dyn Write) -> Result<Outcome> {
    let expr = parse(&args.expression)?;
    let result = expr.evaluate(&args.tags);
    tracing::debug!(expression = %expr, tags = ?args.tags, result, "evaluated");
    if args.json {
        let report = EvalReport {
            expression: expr.to_string(),
            tags: &args.tags,
            result,
        };
        serde_json::to_writer(&mut *writer, &report)
            .wrap_err("failed to serialize evaluation to JSON")?;
        writer
            .write_all(b"\n")
            .wrap_err("failed to terminate JSON output with newline")?;
    } else {
        writeln!(writer, "{result}").wrap_err("failed to write evaluation result")?;
    }
    Ok(if result {
        Outcome::Success
    } else {
        Outcome::NoMatch
    })
}

fn parse(expression: &str) -> Result<Expression> {
    let expr = tag_expressions::parse(expression)?;
    tracing::debug!(input = expression, canonical = %expr, "parsed tag expression");
    Ok(expr)
}
