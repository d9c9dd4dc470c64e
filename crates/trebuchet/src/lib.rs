//! Build a trebuchet out of junk and commute by air.
//!
//! This crate wires the assembly state machine from `trebuchet_core` to a
//! terminal: [`Narrator`] runs the scripted sequence against any [`Console`],
//! and [`run`] does so on the real terminal with the options from [`Cli`].

mod cli;
mod console;
mod narrator;
mod observability;
pub mod text;

pub use cli::{Cli, DEFAULT_ANTS, run};
pub use console::{Console, TerminalConsole};
pub use narrator::Narrator;
pub use observability::init_tracing;
