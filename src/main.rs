mod cli;
mod config;
mod model;
mod processor;
mod request;
mod response;
mod world;

use std::io;
use std::process;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use cli::{Cli, Outcome};
use config::Config;

fn main() {
    let cli = Cli::parse();

    let config = match Config::load(cli.config.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load config: {e}");
            process::exit(1);
        }
    };

    init_logging(&config);

    match cli::run(cli, &config) {
        Ok(Outcome::Done) => {}
        Ok(Outcome::Rejected) => process::exit(2),
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    }
}

/// Log to stderr so stdout stays clean JSON.
///
/// `ROVER_LOG` takes precedence over the configured `log-level`.
fn init_logging(config: &Config) {
    let filter = EnvFilter::try_from_env("ROVER_LOG")
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}
