//! Error types surfaced by the board, the session and the session context.

use derive_more::{Display, Error};

/// Why a move was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// The position is not one of the nine cells.
    #[display("position {position} is outside the board")]
    OutOfRange {
        /// Requested position.
        position: usize,
    },
    /// The target cell already holds a mark.
    #[display("cell {position} is already occupied")]
    Occupied {
        /// Requested position.
        position: usize,
    },
    /// The game has already been won or drawn.
    #[display("the game is over")]
    GameOver,
}

/// Failure to read a board from its text form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum BoardParseError {
    /// A character that is neither a mark, an empty marker nor a separator.
    #[display("unexpected character {character:?} at offset {offset}")]
    InvalidCharacter {
        /// Offending character.
        character: char,
        /// Byte offset in the input.
        offset: usize,
    },
    /// The input did not describe exactly nine cells.
    #[display("expected 9 cells, found {found}")]
    WrongCellCount {
        /// Number of cells read.
        found: usize,
    },
}

/// Misuse of [`crate::context::GameContext`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum ContextError {
    /// The session was requested before one was provided.
    #[display("game session accessed outside of an active game context")]
    NoActiveSession,
}
