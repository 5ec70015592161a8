//! Binary crate for the `weather-dash` terminal dashboard.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - The interactive ratatui dashboard and its views
//! - Interactive configuration

use clap::Parser;

mod cli;
mod logging;
mod tui;

fn main() -> anyhow::Result<()> {
    let cmd = cli::Cli::parse();
    cmd.run()
}
