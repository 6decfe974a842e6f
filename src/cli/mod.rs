//! Command-line interface for the move engine
//!
//! Three commands: `verify` runs the exhaustive never-loses check, `new`
//! prints a fresh board, and `respond` answers a submitted board the way
//! the serving layer would.

pub mod output;

use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use rand::{SeedableRng, rngs::StdRng};

use crate::{Board, Outcome, Turn, Verdict, game, lines, verification};

#[derive(Parser, Debug)]
#[command(name = "oxo")]
#[command(version, about = "Tic-Tac-Toe move engine", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Prove the engine never loses by exhausting the game tree
    Verify,

    /// Start a fresh game and print the empty board
    New {
        /// Emit the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Submit a board holding the remote player's latest move and get the
    /// engine's reply
    Respond {
        /// Board as nine cells of 'X', 'O' or '.' in row-major order
        #[arg(long)]
        board: String,

        /// Seed for reproducible tie-breaking
        #[arg(long)]
        seed: Option<u64>,

        /// Emit the result as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Dispatch a parsed command line
pub fn execute(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Verify => verify(),
        Commands::New { json } => new_game(json),
        Commands::Respond { board, seed, json } => respond(&board, seed, json),
    }
}

fn verify() -> Result<()> {
    output::print_section("Exhaustive self-check");
    let spinner = output::create_spinner("Simulating every reachable game...");
    let verdict = verification::verify_never_loses()?;
    spinner.finish_and_clear();

    match verdict {
        Verdict::Pass { states_checked } => {
            println!("PASS: the engine is never beaten");
            output::print_kv("States checked", &output::format_number(states_checked));
            Ok(())
        }
        Verdict::Fail { trace } => bail!("engine lost after move sequence {trace:?}"),
    }
}

fn new_game(json: bool) -> Result<()> {
    let board = Board::new();
    let turn = Turn {
        board,
        outcome: lines::detect(&board),
        reply: None,
    };
    print_turn(&turn, json)
}

fn respond(board: &str, seed: Option<u64>, json: bool) -> Result<()> {
    let board = Board::from_string(board)?;
    let turn = match seed {
        Some(value) => game::respond(&board, &mut StdRng::seed_from_u64(value))?,
        None => game::respond_default(&board)?,
    };
    print_turn(&turn, json)
}

fn print_turn(turn: &Turn, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(turn)?);
        return Ok(());
    }

    println!("{}", turn.board);
    if let Some(position) = turn.reply {
        output::print_kv("Engine move", &position.to_string());
    }
    output::print_kv("Outcome", &describe(turn.outcome));
    Ok(())
}

fn describe(outcome: Outcome) -> String {
    match outcome {
        Outcome::InProgress => "in progress".to_string(),
        Outcome::Tie => "tie".to_string(),
        Outcome::Win { player, .. } => format!("{} wins", player.to_cell().to_char()),
    }
}
