//! Sections CLI — inspect grouped JSON documents.
//!
//! Loads one or more documents, composes them through a stage builder and
//! prints the flattened groups or the position of a value.

mod commands;

use clap::Parser;
use color_eyre::eyre::Result;

use commands::Cli;

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    commands::init_tracing(&cli);
    commands::run(cli)
}
