use crate::Mark;
use crate::board::{Board, Cell};

/// Returns the indices of all empty cells in ascending order.
pub fn legal_moves(board: &Board) -> Vec<usize> {
    board
        .cells()
        .iter()
        .enumerate()
        .filter(|(_, cell)| **cell == Cell::Empty)
        .map(|(position, _)| position)
        .collect()
}

/// Returns the board after `mark` is played at a position already known to be legal.
///
/// Only the search calls this, with positions taken from [`legal_moves`].
pub fn successor(board: &Board, position: usize, mark: Mark) -> Board {
    debug_assert!(
        board.is_empty_at(position),
        "successor called for illegal position {position}"
    );
    let mut cells = *board.cells();
    cells[position] = Cell::Marked(mark);
    Board::from_cells(cells)
}
