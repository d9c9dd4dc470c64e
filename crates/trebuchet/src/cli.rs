//! Command-line interface.

use crate::console::TerminalConsole;
use crate::narrator::Narrator;
use clap::Parser;
use trebuchet_core::{AssemblyStateMachine, LaunchOutcome, RandomFlavor};
use trebuchet_error::TrebuchetResult;
use tracing::info;

/// Ants in the colony when none are requested.
pub const DEFAULT_ANTS: u64 = 175_000;

/// Command-line arguments.
#[derive(Parser, Debug)]
#[command(name = "trebuchet")]
#[command(about = "Build a trebuchet out of junk and commute by air")]
#[command(version)]
pub struct Cli {
    /// Number of ants hauling the counterweight
    #[arg(
        short,
        long,
        env = "TREBUCHET_ANTS",
        default_value_t = DEFAULT_ANTS,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub ants: u64,
}

/// Runs the full cycle once on the terminal.
///
/// # Errors
///
/// Returns the first assembly or console error.
#[tracing::instrument(skip_all, fields(ants = cli.ants))]
pub fn run(cli: &Cli) -> TrebuchetResult<LaunchOutcome> {
    info!("Gathering parts");
    let machine = AssemblyStateMachine::new(cli.ants)?;

    let mut narrator = Narrator::new(machine, TerminalConsole::new(), RandomFlavor::new());
    narrator.complete_cycle()
}
