use crate::Mark;
use crate::error::{BoardParseError, MoveError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of cells on the board.
pub const CELL_COUNT: usize = 9;

/// Contents of a single cell.
#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Nobody has played here yet.
    #[default]
    Empty,
    /// The cell holds a mark.
    Marked(Mark),
}

impl Cell {
    /// Returns the mark in this cell, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Marked(mark) => Some(mark),
        }
    }
}

/// A tic-tac-toe board.
///
/// The board is a 9-element array in row-major order:
///
/// ```text
/// 0 | 1 | 2
/// 3 | 4 | 5
/// 6 | 7 | 8
/// ```
///
/// `Board` is a `Copy` value. Playing a move never changes the board it is called on;
/// [`Board::apply`] returns the next board instead.
#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone, Default, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; CELL_COUNT],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a board from explicit cells.
    pub fn from_cells(cells: [Cell; CELL_COUNT]) -> Self {
        Self { cells }
    }

    /// Returns all cells in row-major order.
    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    /// Returns the cell at `position`, or `None` when the position is off the board.
    pub fn get(&self, position: usize) -> Option<Cell> {
        self.cells.get(position).copied()
    }

    /// Returns `true` if `position` is on the board and nobody has played there.
    pub fn is_empty_at(&self, position: usize) -> bool {
        matches!(self.get(position), Some(Cell::Empty))
    }

    /// Returns the board after `mark` is played at `position`.
    ///
    /// # Errors
    ///
    /// `MoveError::OutOfRange` if `position` is not in `0..9`, `MoveError::Occupied` if the
    /// cell is taken.
    pub fn apply(&self, position: usize, mark: Mark) -> Result<Board, MoveError> {
        match self.get(position) {
            None => Err(MoveError::OutOfRange { position }),
            Some(Cell::Marked(_)) => Err(MoveError::Occupied { position }),
            Some(Cell::Empty) => {
                let mut next = *self;
                next.cells[position] = Cell::Marked(mark);
                Ok(next)
            }
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cells) in self.cells.chunks(3).enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            for (col, cell) in cells.iter().enumerate() {
                if col > 0 {
                    write!(f, "|")?;
                }
                match cell {
                    Cell::Empty => write!(f, ".")?,
                    Cell::Marked(mark) => write!(f, "{mark}")?,
                }
            }
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = BoardParseError;

    /// Reads nine cells: `X`/`O` (any case) for marks, `.`, `-` or `_` for empty cells.
    /// Whitespace, `|` and `/` are skipped, so the `Display` form parses back.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = [Cell::Empty; CELL_COUNT];
        let mut found = 0;
        for (offset, character) in s.char_indices() {
            let cell = match character {
                'X' | 'x' => Cell::Marked(Mark::X),
                'O' | 'o' => Cell::Marked(Mark::O),
                '.' | '-' | '_' => Cell::Empty,
                '|' | '/' => continue,
                c if c.is_whitespace() => continue,
                _ => return Err(BoardParseError::InvalidCharacter { character, offset }),
            };
            if found < CELL_COUNT {
                cells[found] = cell;
            }
            found += 1;
        }

        if found != CELL_COUNT {
            return Err(BoardParseError::WrongCellCount { found });
        }
        Ok(Self { cells })
    }
}
