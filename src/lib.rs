//! A small tic-tac-toe engine with perfect computer players.
//!
//! The crate models the 3×3 board, the rules that decide a winner or a draw, an exhaustive
//! minimax search with alpha-beta pruning, and a [`Session`](session::Session) that alternates
//! turns and lets the computer play any mark it has been assigned.
//!
//! # Example
//!
//! ```rust
//! use tictactoe_minimax::session::{ComputerAssignment, Session};
//! use tictactoe_minimax::Outcome;
//!
//! // Let the computer play both sides of a fresh game
//! let mut session = Session::new().with_computer(ComputerAssignment::Both);
//! session.new_game();
//!
//! // Perfect play from both sides always ends in a draw
//! assert_eq!(session.outcome(), Outcome::Draw);
//! assert_eq!(session.message(), "It's a cat's game");
//! ```

use derive_more::Display;
use serde::{Deserialize, Serialize};

/// The 9-cell board value type and its pure move application.
pub mod board;
/// A shared-ownership handle for presentation layers.
pub mod context;
/// Error types.
pub mod error;
/// Minimax search with alpha-beta pruning and tie-break selection.
pub mod minimax;
/// Legal move enumeration and successor boards.
pub mod moves;
/// Traits and implementations for random number generation.
pub mod random;
/// Win, draw and outcome detection.
pub mod rules;
/// The mutable game session and its turn controller.
pub mod session;

/// A player's symbol.
#[derive(Debug, Display, PartialEq, Eq, Hash, Copy, Clone, Serialize, Deserialize)]
pub enum Mark {
    /// Always moves first.
    #[display("X")]
    X,
    /// Moves second.
    #[display("O")]
    O,
}

impl Mark {
    /// Returns the other mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// Classification of a board, always derived from its cells.
#[derive(Debug, PartialEq, Eq, Copy, Clone, Serialize, Deserialize)]
pub enum Outcome {
    /// Nobody has three in a row and there are empty cells left.
    InProgress,
    /// The mark completed a line.
    Won(Mark),
    /// The board is full without a line.
    Draw,
}

impl Outcome {
    /// Returns `true` for `Won` and `Draw`.
    pub fn is_terminal(self) -> bool {
        !matches!(self, Outcome::InProgress)
    }
}
