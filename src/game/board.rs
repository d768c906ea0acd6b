//! Connect-4 board value.
//!
//! The grid is stored row-major with row 0 at the top, so a disc dropped into a
//! column lands on the highest free row index:
//! ```text
//! Row 0: . . . . . . .   <- Top
//! ...
//! Row 5: . . . . . . .   <- Bottom
//!        1 2 3 4 5 6 7
//! ```
use crate::{ConnectFourError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

pub const ROWS: usize = 6;
pub const COLS: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Player::X => 'X',
            Player::O => 'O',
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "BoardRepr")]
pub struct Board {
    pub(crate) cells: [[Option<Player>; COLS]; ROWS],
    pub(crate) current_player: Player,
}

/// Unchecked wire form, validated on the way into `Board`.
#[derive(Deserialize)]
struct BoardRepr {
    cells: [[Option<Player>; COLS]; ROWS],
    current_player: Player,
}

impl TryFrom<BoardRepr> for Board {
    type Error = ConnectFourError;

    fn try_from(repr: BoardRepr) -> Result<Self> {
        let board = Board {
            cells: repr.cells,
            current_player: repr.current_player,
        };
        board.validate()?;
        Ok(board)
    }
}

pub fn create_board_empty() -> Board {
    Board {
        cells: [[None; COLS]; ROWS],
        current_player: Player::X,
    }
}

impl Default for Board {
    fn default() -> Self {
        create_board_empty()
    }
}

impl Board {
    /// Player whose disc goes in next.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Content of a cell, `None` when empty or outside the grid.
    pub fn cell(&self, row: usize, column: usize) -> Option<Player> {
        if row < ROWS && column < COLS {
            self.cells[row][column]
        } else {
            None
        }
    }

    /// Out-of-range columns count as full.
    pub fn is_column_full(&self, column: usize) -> bool {
        column >= COLS || self.cells[0][column].is_some()
    }

    pub fn is_full(&self) -> bool {
        (0..COLS).all(|column| self.is_column_full(column))
    }

    pub fn disc_count(&self) -> usize {
        self.cells.iter().flatten().filter(|cell| cell.is_some()).count()
    }

    /// Builds a board from six row strings, top row first.
    ///
    /// `X` and `O` are discs, `.` (or a space) is empty. The player to move is
    /// derived from the disc counts since X always starts: equal counts means X
    /// moves, one extra X means O moves. Floating discs are rejected.
    pub fn from_rows(rows: [&str; ROWS]) -> Result<Board> {
        let mut board = create_board_empty();

        for (row, line) in rows.iter().enumerate() {
            let symbols: Vec<char> = line.chars().collect();
            if symbols.len() != COLS {
                return Err(ConnectFourError::InvalidBoard(format!(
                    "row {} has {} cells, expected {}",
                    row,
                    symbols.len(),
                    COLS
                )));
            }
            for (column, symbol) in symbols.into_iter().enumerate() {
                board.cells[row][column] = match symbol {
                    'X' | 'x' => Some(Player::X),
                    'O' | 'o' => Some(Player::O),
                    '.' | ' ' => None,
                    other => {
                        return Err(ConnectFourError::InvalidBoard(format!(
                            "unexpected symbol '{}' at row {}, column {}",
                            other, row, column
                        )))
                    }
                };
            }
        }

        board.current_player = board.player_to_move()?;
        board.validate()?;
        Ok(board)
    }

    /// Checks that no disc floats and that the player to move matches the
    /// disc counts.
    pub fn validate(&self) -> Result<()> {
        for column in 0..COLS {
            for row in 0..ROWS - 1 {
                if self.cells[row][column].is_some() && self.cells[row + 1][column].is_none() {
                    return Err(ConnectFourError::InvalidBoard(format!(
                        "floating disc at row {}, column {}",
                        row, column
                    )));
                }
            }
        }

        let expected = self.player_to_move()?;
        if self.current_player != expected {
            return Err(ConnectFourError::InvalidBoard(format!(
                "{} to move but the disc counts give the turn to {}",
                self.current_player, expected
            )));
        }
        Ok(())
    }

    fn player_to_move(&self) -> Result<Player> {
        let x_count = self.count_of(Player::X);
        let o_count = self.count_of(Player::O);
        if x_count == o_count {
            Ok(Player::X)
        } else if x_count == o_count + 1 {
            Ok(Player::O)
        } else {
            Err(ConnectFourError::InvalidBoard(format!(
                "impossible disc counts: {} X against {} O",
                x_count, o_count
            )))
        }
    }

    fn count_of(&self, player: Player) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| **cell == Some(player))
            .count()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            for cell in row {
                let symbol = cell.map(Player::symbol).unwrap_or('.');
                write!(f, " {} ", symbol)?;
            }
            writeln!(f)?;
        }
        for column in 1..=COLS {
            write!(f, " {} ", column)?;
        }
        writeln!(f)
    }
}
