//! wireup - a codemod CLI for dead dashboard buttons
//!
//! wireup provides:
//! - Page discovery under an app directory by filename pattern
//! - Detection of add-buttons that lack click handlers
//! - A rewrite pass that wires each button to a placeholder modal
//! - Unified output format (summary/jsonl/json/md)

use anyhow::Result;
use clap::Parser;

mod buttons;
mod cli;
mod core;
mod pages;
mod rewrite;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli::run(cli)
}
