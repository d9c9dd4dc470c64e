//! Trebuchet commute simulator.

use clap::Parser;
use std::process::ExitCode;
use trebuchet::{Cli, init_tracing, run};
use tracing::{error, info};

fn main() -> ExitCode {
    init_tracing();

    let cli = Cli::parse();
    info!(ants = cli.ants, "Starting trebuchet");

    match run(&cli) {
        Ok(outcome) => {
            info!(%outcome, "Run finished");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "Run failed");
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
