use crate::board::{Board, Cell};
use crate::{Mark, Outcome};

/// The eight winning lines: rows, then columns, then diagonals.
pub const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Returns the mark of the first line in [`LINES`] holding three equal marks.
pub fn winner(board: &Board) -> Option<Mark> {
    let cells = board.cells();
    LINES.iter().find_map(|&[a, b, c]| {
        let mark = cells[a].mark()?;
        (cells[b] == cells[a] && cells[c] == cells[a]).then_some(mark)
    })
}

/// Returns `true` when no cell is empty.
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|cell| *cell != Cell::Empty)
}

/// Classifies the board. A completed line wins even on a full board.
pub fn outcome(board: &Board) -> Outcome {
    if let Some(mark) = winner(board) {
        Outcome::Won(mark)
    } else if is_full(board) {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}
