pub mod apply_move;
pub mod board;
pub mod get_legal_moves;
pub mod simulate_game;
pub mod winner;

pub use apply_move::apply_move;
pub use board::{create_board_empty, Board, Player, COLS, ROWS};
pub use get_legal_moves::get_legal_moves;
pub use simulate_game::{outcome_score, simulate_game};
pub use winner::{is_terminal, winner, wins_through};
