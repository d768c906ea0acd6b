use rand::seq::IndexedRandom;
use rand::Rng;

use crate::game::apply_move::apply_move;
use crate::game::board::{Board, Player};
use crate::game::get_legal_moves::get_legal_moves;
use crate::game::winner::{winner, wins_through};

/// Playout outcome from X's point of view: +1 win, -1 loss, 0 draw.
pub fn outcome_score(winner: Option<Player>) -> f64 {
    match winner {
        Some(Player::X) => 1.0,
        Some(Player::O) => -1.0,
        None => 0.0,
    }
}

/// Plays uniformly random legal moves on a copy of `board` until the game ends.
///
/// Only the disc just dropped can complete a line, so the loop checks that
/// cell instead of rescanning the whole grid after every move.
pub fn simulate_game<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> f64 {
    if let Some(player) = winner(board) {
        return outcome_score(Some(player));
    }

    let mut simulated = *board;
    loop {
        let legal_moves = get_legal_moves(&simulated);
        let Some(&column) = legal_moves.choose(rng) else {
            return outcome_score(None);
        };
        let mover = simulated.current_player();
        let Ok(row) = apply_move(&mut simulated, column) else {
            // legal moves never name a full column
            return outcome_score(None);
        };
        if wins_through(&simulated, row, column) {
            return outcome_score(Some(mover));
        }
    }
}
