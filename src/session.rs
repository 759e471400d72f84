use crate::board::Board;
use crate::error::MoveError;
use crate::minimax::Searcher;
use crate::random::{RandomGenerator, StandardRandomGenerator};
use crate::rules::outcome;
use crate::{Mark, Outcome};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};
use tracing::{debug, info, instrument};

/// Which marks, if any, the computer plays.
#[derive(
    Debug,
    PartialEq,
    Eq,
    Copy,
    Clone,
    Default,
    Display,
    EnumString,
    EnumIter,
    Serialize,
    Deserialize,
)]
#[strum(ascii_case_insensitive)]
pub enum ComputerAssignment {
    /// Both marks are played by humans.
    #[default]
    #[strum(to_string = "none", serialize = "")]
    None,
    /// The computer plays X.
    #[strum(to_string = "X")]
    X,
    /// The computer plays O.
    #[strum(to_string = "O")]
    O,
    /// The computer plays both marks.
    #[strum(to_string = "both")]
    Both,
}

impl ComputerAssignment {
    /// Returns `true` if the computer moves for `mark`.
    pub fn controls(self, mark: Mark) -> bool {
        matches!(
            (self, mark),
            (ComputerAssignment::Both, _)
                | (ComputerAssignment::X, Mark::X)
                | (ComputerAssignment::O, Mark::O)
        )
    }
}

/// Read-only view of a session for presentation layers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub board: Board,
    pub current_player: Mark,
    pub outcome: Outcome,
    pub message: String,
    pub computer: ComputerAssignment,
    pub game_over: bool,
}

/// A single game of tic-tac-toe and its turn controller.
///
/// The session owns the current board and decides whose turn it is. Every successful
/// transition (a move, a new game, a new computer assignment) is followed by [`Session::settle`],
/// which plays computer-controlled turns until a human is on turn or the game is over.
///
/// Presentation layers read the state through the accessors and never judge legality or
/// outcomes themselves.
#[derive(Debug, Clone)]
pub struct Session<K: RandomGenerator = StandardRandomGenerator> {
    board: Board,
    current_player: Mark,
    outcome: Outcome,
    message: String,
    computer: ComputerAssignment,
    searcher: Searcher<K>,
}

impl Default for Session<StandardRandomGenerator> {
    fn default() -> Self {
        Self::new()
    }
}

impl Session<StandardRandomGenerator> {
    /// Creates a session with a fresh game, no computer players and random tie-breaks.
    pub fn new() -> Self {
        Self::with_searcher(Searcher::default())
    }
}

impl<K: RandomGenerator> Session<K> {
    /// Creates a session that picks computer moves with `searcher`.
    pub fn with_searcher(searcher: Searcher<K>) -> Self {
        Self {
            board: Board::new(),
            current_player: Mark::X,
            outcome: Outcome::InProgress,
            message: turn_message(Mark::X),
            computer: ComputerAssignment::None,
            searcher,
        }
    }

    /// Sets the computer assignment, playing any computer turn that is due.
    pub fn with_computer(mut self, computer: ComputerAssignment) -> Self {
        self.set_computer_assignment(computer);
        self
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The mark on turn. After the game ends this is the mark that moved last.
    pub fn current_player(&self) -> Mark {
        self.current_player
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Human-readable status line.
    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn computer(&self) -> ComputerAssignment {
        self.computer
    }

    pub fn is_game_over(&self) -> bool {
        self.outcome.is_terminal()
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            board: self.board,
            current_player: self.current_player,
            outcome: self.outcome,
            message: self.message.clone(),
            computer: self.computer,
            game_over: self.is_game_over(),
        }
    }

    /// Starts over with an empty board and X on turn. The computer assignment is kept.
    #[instrument(skip(self))]
    pub fn new_game(&mut self) {
        self.board = Board::new();
        self.current_player = Mark::X;
        self.outcome = Outcome::InProgress;
        self.message = turn_message(Mark::X);
        info!(computer = %self.computer, "new game");
        self.settle();
    }

    /// Plays the mark on turn at `position`, then lets the computer answer.
    ///
    /// Requests on a finished game, off the board or on an occupied cell are ignored.
    pub fn request_move(&mut self, position: usize) {
        if let Err(error) = self.try_move(position) {
            debug!(position, %error, "ignored move request");
        }
    }

    /// Like [`Session::request_move`], but reports why a request was rejected.
    ///
    /// Returns the outcome once every computer turn that followed has been played.
    ///
    /// # Errors
    ///
    /// `MoveError::GameOver` once the game is won or drawn, otherwise whatever
    /// [`Board::apply`] rejects the position with. The session is unchanged on error.
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub fn try_move(&mut self, position: usize) -> Result<Outcome, MoveError> {
        self.play(position)?;
        self.settle();
        Ok(self.outcome)
    }

    /// Changes which marks the computer plays.
    ///
    /// Moves already made stay as they are; if the computer now owns the mark on turn it
    /// moves immediately.
    #[instrument(skip(self))]
    pub fn set_computer_assignment(&mut self, computer: ComputerAssignment) {
        self.computer = computer;
        self.settle();
    }

    /// Plays computer turns while the game is running and the mark on turn belongs to the
    /// computer. Calling it on a settled session does nothing.
    pub fn settle(&mut self) {
        while !self.is_game_over() && self.computer.controls(self.current_player) {
            let Some(position) = self.searcher.pick_move(&self.board, self.current_player) else {
                break;
            };
            let played = self.play(position);
            debug_assert!(played.is_ok(), "search chose unplayable cell {position}");
            if played.is_err() {
                break;
            }
        }
    }

    fn play(&mut self, position: usize) -> Result<(), MoveError> {
        if self.is_game_over() {
            return Err(MoveError::GameOver);
        }

        let mark = self.current_player;
        self.board = self.board.apply(position, mark)?;
        self.outcome = outcome(&self.board);
        debug!(position, %mark, "move applied");

        match self.outcome {
            Outcome::Won(winner) => {
                self.message = format!("{winner} won");
                info!(%winner, "game won");
            }
            Outcome::Draw => {
                self.message = "It's a cat's game".to_string();
                info!("game drawn");
            }
            Outcome::InProgress => {
                self.current_player = mark.opponent();
                self.message = turn_message(self.current_player);
            }
        }
        Ok(())
    }
}

fn turn_message(mark: Mark) -> String {
    format!("Your turn {mark}")
}
