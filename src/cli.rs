//! CLI interface for the rover.
//!
//! Each subcommand is non-interactive: arguments in, structured output out.
//! JSON goes to stdout; a one-line human summary goes to stderr.
//!
//! - `rover execute`: run commands described by flags.
//! - `rover run`: run a JSON request document from a file or stdin.
//! - `rover world`: describe the configured world.

mod format;

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::{info, warn};

use crate::config::Config;
use crate::model::Position;
use crate::request::{self, ExecuteRequest, InitialPayload, PointPayload, RequestError};
use crate::response::{ExecutionResponse, WorldResponse};

use format::format_run;

/// Rover: drive a rover across a bounded grid.
#[derive(Debug, Parser)]
#[command(name = "rover", after_long_help = USAGE_HELP)]
pub struct Cli {
    /// Config file to use instead of `~/.rover/config.toml`.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Pretty-print JSON output.
    #[arg(long, global = true)]
    pretty: bool,

    #[command(subcommand)]
    pub command: Command,
}

const USAGE_HELP: &str = r#"Examples:
  rover execute --x 0 --y 0 --direction n --commands ffrff
  rover execute --x 0 --y 0 --direction N --commands FFFF --obstacle 0,2
  echo '{"initial":{"x":0,"y":0,"direction":"S"},"commands":"F"}' | rover run

Commands are F (forward), L (turn left) and R (turn right), case-insensitive.
A run stops at the first command whose target cell is off the grid or blocked.

Exit status: 0 on a completed or aborted run, 2 when the request is
rejected by validation, 1 on any other error."#;

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run a command string from a start cell and heading.
    #[command(allow_negative_numbers = true)]
    Execute {
        /// Starting x coordinate.
        #[arg(long)]
        x: i64,

        /// Starting y coordinate.
        #[arg(long)]
        y: i64,

        /// Starting heading: N, E, S or W.
        #[arg(long)]
        direction: String,

        /// Command string, e.g. `FFRFF`.
        #[arg(long)]
        commands: String,

        /// Blocked cell as `x,y`. Can be specified multiple times.
        #[arg(long = "obstacle")]
        obstacles: Vec<Position>,
    },

    /// Run a JSON execute request.
    ///
    /// Reads `{"initial": {"x", "y", "direction"}, "commands", "obstacles"}`
    /// from FILE, or from stdin when FILE is omitted or `-`.
    Run {
        /// Request document to read.
        file: Option<PathBuf>,
    },

    /// Print the configured world size and viewport.
    World,
}

/// How a successful invocation ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The request ran (whether or not the rover was stopped).
    Done,

    /// The request was rejected before running; the error document was printed.
    Rejected,
}

/// Run the CLI, returning an error message on failure.
pub fn run(cli: Cli, config: &Config) -> Result<Outcome, String> {
    let pretty = cli.pretty;

    match cli.command {
        Command::Execute {
            x,
            y,
            direction,
            commands,
            obstacles,
        } => {
            let request = ExecuteRequest {
                initial: Some(InitialPayload {
                    x: Some(x),
                    y: Some(y),
                    direction: Some(direction),
                }),
                commands: Some(commands),
                obstacles: obstacles.into_iter().map(PointPayload::from).collect(),
            };
            cmd_execute(config, request, pretty)
        }
        Command::Run { file } => {
            let json = read_input(file.as_deref())?;
            let request = ExecuteRequest::from_json(&json).map_err(|e| e.to_string())?;
            cmd_execute(config, request, pretty)
        }
        Command::World => {
            emit(&WorldResponse::from(config), pretty)?;
            Ok(Outcome::Done)
        }
    }
}

fn cmd_execute(config: &Config, request: ExecuteRequest, pretty: bool) -> Result<Outcome, String> {
    match request::execute(config, request) {
        Ok(response) => {
            report(&response);
            emit(&response, pretty)?;
            Ok(Outcome::Done)
        }
        Err(RequestError::Invalid(errors)) => {
            warn!(fields = ?errors.fields().collect::<Vec<_>>(), "request rejected");
            emit(&errors, pretty)?;
            Ok(Outcome::Rejected)
        }
        Err(e) => Err(e.to_string()),
    }
}

fn report(response: &ExecutionResponse) {
    info!(
        aborted = response.aborted,
        executed = response.executed_commands,
        "run finished"
    );
    eprintln!("{}", format_run(response));
}

/// Print `value` as JSON on stdout.
fn emit(value: &impl Serialize, pretty: bool) -> Result<(), String> {
    let json = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
    .map_err(|e| format!("failed to serialize output: {e}"))?;

    println!("{json}");
    Ok(())
}

/// Read the request document from `path`, or stdin for `None` / `-`.
fn read_input(path: Option<&Path>) -> Result<String, String> {
    match path {
        Some(path) if path != Path::new("-") => fs::read_to_string(path)
            .map_err(|e| format!("failed to read {}: {e}", path.display())),
        _ => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .map_err(|e| format!("failed to read stdin: {e}"))?;
            Ok(buf)
        }
    }
}
