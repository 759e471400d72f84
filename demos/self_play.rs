//! Terminal front end that lets the computer play.
//!
//! Configured through the environment:
//! - `TTT_COMPUTER`: `none`, `X`, `O` or `both` (default `both`)
//! - `TTT_SEED`: seed for tie-breaks; thread RNG when unset
//! - `TTT_TIE_BREAK`: `random` or `first` (default `random`)
//! - `RUST_LOG`: tracing filter, e.g. `tictactoe_minimax=debug`
//!
//! Marks not assigned to the computer are played by a scripted human who always takes the
//! lowest free cell.

use anyhow::{Context, Result, bail};
use std::env;
use tictactoe_minimax::Outcome;
use tictactoe_minimax::minimax::{Searcher, TieBreak};
use tictactoe_minimax::moves::legal_moves;
use tictactoe_minimax::random::{RandomGenerator, SeededGenerator, StandardRandomGenerator};
use tictactoe_minimax::session::{ComputerAssignment, Session};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let computer: ComputerAssignment = env_or("TTT_COMPUTER", "both")?
        .parse()
        .context("TTT_COMPUTER must be none, X, O or both")?;
    let tie_break: TieBreak = env_or("TTT_TIE_BREAK", "random")?
        .parse()
        .context("TTT_TIE_BREAK must be random or first")?;

    let outcome = match env::var("TTT_SEED") {
        Ok(seed) => {
            let seed: u64 = seed.parse().context("TTT_SEED must be an unsigned integer")?;
            play(SeededGenerator::new(seed), tie_break, computer)?
        }
        Err(_) => play(StandardRandomGenerator, tie_break, computer)?,
    };

    if computer == ComputerAssignment::Both && outcome != Outcome::Draw {
        bail!("two perfect players must draw, got {outcome:?}");
    }
    Ok(())
}

fn env_or(key: &str, default: &str) -> Result<String> {
    match env::var(key) {
        Ok(value) => Ok(value),
        Err(env::VarError::NotPresent) => Ok(default.to_string()),
        Err(error) => Err(error).with_context(|| format!("reading {key}")),
    }
}

fn play<K: RandomGenerator>(
    random: K,
    tie_break: TieBreak,
    computer: ComputerAssignment,
) -> Result<Outcome> {
    let searcher = Searcher::builder()
        .with_random_generator(random)
        .with_tie_break(tie_break)
        .build();
    let mut session = Session::with_searcher(searcher);
    session.set_computer_assignment(computer);
    info!(%computer, %tie_break, "starting game");

    while !session.is_game_over() {
        let Some(&position) = legal_moves(session.board()).first() else {
            bail!("game in progress on a full board");
        };
        println!("{}\n{}\n", session.board(), session.message());
        session.try_move(position)?;
    }

    println!("{}\n{}", session.board(), session.message());
    Ok(session.outcome())
}
