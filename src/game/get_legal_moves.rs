use crate::game::board::{Board, COLS};

/// Returns the columns, left to right, whose top cell is still empty.
/// An empty vector means the board is full.
pub fn get_legal_moves(board: &Board) -> Vec<usize> {
    (0..COLS)
        .filter(|&column| !board.is_column_full(column))
        .collect()
}
