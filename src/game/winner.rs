use crate::game::board::{Board, Player, COLS, ROWS};

/// Line orientations as (row step, column step): horizontal, vertical,
/// down-right diagonal, down-left diagonal.
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

fn cell_at(board: &Board, row: isize, column: isize) -> Option<Player> {
    if row < 0 || column < 0 {
        return None;
    }
    board.cell(row as usize, column as usize)
}

/// Scans every window of four cells in all four orientations.
pub fn winner(board: &Board) -> Option<Player> {
    for row in 0..ROWS as isize {
        for column in 0..COLS as isize {
            let Some(player) = cell_at(board, row, column) else {
                continue;
            };
            for (dr, dc) in DIRECTIONS {
                if (1..4).all(|k| cell_at(board, row + k * dr, column + k * dc) == Some(player)) {
                    return Some(player);
                }
            }
        }
    }
    None
}

/// True if the disc at `(row, column)` is part of a four-in-a-row.
///
/// Cheaper than [`winner`] when only the last drop can have created a line.
pub fn wins_through(board: &Board, row: usize, column: usize) -> bool {
    let Some(player) = board.cell(row, column) else {
        return false;
    };
    let (row, column) = (row as isize, column as isize);

    DIRECTIONS.iter().any(|&(dr, dc)| {
        let run = |sign: isize| {
            (1..4)
                .take_while(|&k| {
                    cell_at(board, row + sign * k * dr, column + sign * k * dc) == Some(player)
                })
                .count()
        };
        1 + run(1) + run(-1) >= 4
    })
}

/// A board is terminal once someone has four in a row or no column is open.
pub fn is_terminal(board: &Board) -> bool {
    winner(board).is_some() || board.is_full()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::board::create_board_empty;

    #[test]
    fn test_no_winner_on_empty_board() {
        let board = create_board_empty();
        assert_eq!(winner(&board), None);
        assert!(!is_terminal(&board));
    }

    #[test]
    fn test_horizontal_win() {
        let board = Board::from_rows([
            ".......",
            ".......",
            ".......",
            ".......",
            "..OOO..",
            ".XXXX..",
        ])
        .unwrap();
        assert_eq!(winner(&board), Some(Player::X));
        assert!(is_terminal(&board));
        assert!(wins_through(&board, 5, 4));
        assert!(wins_through(&board, 5, 1));
        assert!(!wins_through(&board, 4, 3));
    }

    #[test]
    fn test_vertical_win() {
        let board = Board::from_rows([
            ".......",
            ".......",
            "......O",
            "X.....O",
            "X.....O",
            "XX....O",
        ])
        .unwrap();
        assert_eq!(winner(&board), Some(Player::O));
        assert!(is_terminal(&board));
        assert!(wins_through(&board, 2, 6));
        assert!(!wins_through(&board, 3, 0));
    }

    #[test]
    fn test_down_right_diagonal_win() {
        // X from (2,0) to (5,3)
        let board = Board::from_rows([
            ".......",
            ".......",
            "X......",
            "OX.....",
            "OOX....",
            "XOOX.X.",
        ])
        .unwrap();
        assert_eq!(winner(&board), Some(Player::X));
        assert!(wins_through(&board, 2, 0));
        assert!(wins_through(&board, 4, 2));
    }

    #[test]
    fn test_down_left_diagonal_win() {
        // O from (2,6) to (5,3)
        let board = Board::from_rows([
            ".......",
            ".......",
            "......O",
            ".....OX",
            "....OXX",
            "...OXXO",
        ])
        .unwrap();
        assert_eq!(winner(&board), Some(Player::O));
        assert!(wins_through(&board, 5, 3));
        assert!(wins_through(&board, 3, 5));
    }

    #[test]
    fn test_three_in_a_row_is_not_a_win() {
        let board = Board::from_rows([
            ".......",
            ".......",
            ".......",
            ".......",
            "OOO....",
            "XXX....",
        ])
        .unwrap();
        assert_eq!(winner(&board), None);
        assert!(!is_terminal(&board));
        assert!(!wins_through(&board, 5, 2));
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        let board = Board::from_rows([
            "OXOOXXO",
            "XOXXOXX",
            "OXOOOXO",
            "XOXXXOX",
            "XOOOXOO",
            "XOOXXXO",
        ])
        .unwrap();
        assert_eq!(winner(&board), None);
        assert!(board.is_full());
        assert!(is_terminal(&board));
    }

    #[test]
    fn test_winner_is_pure() {
        let board = Board::from_rows([
            ".......",
            ".......",
            ".......",
            ".......",
            "..OOO..",
            ".XXXX..",
        ])
        .unwrap();
        assert_eq!(winner(&board), winner(&board));
        assert_eq!(is_terminal(&board), is_terminal(&board));
    }

    #[test]
    fn test_wins_through_empty_cell_is_false() {
        let board = create_board_empty();
        assert!(!wins_through(&board, 5, 3));
    }
}
