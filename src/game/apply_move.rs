use crate::game::board::{Board, COLS, ROWS};
use crate::{ConnectFourError, IllegalMoveReason, Result};

/// Drops the current player's disc into `column` and hands the turn over.
///
/// Returns the row the disc landed in. On error the board is left untouched.
pub fn apply_move(board: &mut Board, column: usize) -> Result<usize> {
    if column >= COLS {
        return Err(ConnectFourError::IllegalMove {
            column,
            reason: IllegalMoveReason::OutOfRange,
        });
    }

    let row = (0..ROWS)
        .rev()
        .find(|&row| board.cells[row][column].is_none())
        .ok_or(ConnectFourError::IllegalMove {
            column,
            reason: IllegalMoveReason::ColumnFull,
        })?;

    board.cells[row][column] = Some(board.current_player);
    board.current_player = board.current_player.opponent();
    Ok(row)
}
