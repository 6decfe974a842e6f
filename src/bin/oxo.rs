//! Tic-Tac-Toe move engine CLI
//!
//! Offers a self-verification command and a board-in, board-out interface
//! for driving games from scripts or a serving layer.

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = oxo::cli::Cli::parse();
    oxo::cli::execute(cli)
}
