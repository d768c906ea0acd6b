//! Monte Carlo Tree Search move selection.
//!
//! Each decision grows a fresh [`SearchTree`] rooted at the current board for
//! a fixed number of iterations, then plays the most visited root child. The
//! tree is dropped as soon as the [`MctsResult`] snapshot has been taken.
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};

use crate::game::board::Board;
use crate::game::get_legal_moves::get_legal_moves;
use crate::game::winner::is_terminal;
use crate::mcts::hyperparameters::MctsHyperparameters;
use crate::mcts::mcts_result::{ChildStats, MctsResult};
use crate::mcts::selection::DEFAULT_EXPLORATION_CONSTANT;
use crate::mcts::tree::SearchTree;
use crate::{ConnectFourError, Result};

/// Picks a column for the player to move with `num_simulations` iterations
/// and the default exploration constant.
pub fn choose_move<R: Rng + ?Sized>(
    board: &Board,
    num_simulations: usize,
    rng: &mut R,
) -> Result<MctsResult> {
    let hyperparams = MctsHyperparameters {
        num_simulations,
        exploration_constant: DEFAULT_EXPLORATION_CONSTANT,
        seed: None,
    };
    choose_move_with(board, &hyperparams, rng)
}

/// Picks a column for the player to move. Fails with
/// [`ConnectFourError::GameOver`] if `board` is already terminal.
pub fn choose_move_with<R: Rng + ?Sized>(
    board: &Board,
    hyperparams: &MctsHyperparameters,
    rng: &mut R,
) -> Result<MctsResult> {
    let tree = build_search_tree(board, hyperparams, rng)?;
    let result = summarize(&tree, hyperparams.num_simulations, rng)?;

    log::debug!(
        "MCTS picked column {} ({} visits on root, {} nodes)",
        result.best_column,
        result.root_visits,
        result.tree_size
    );
    for child in &result.children {
        log::trace!("{}", child);
    }
    Ok(result)
}

/// Runs the full search and hands back the grown tree.
pub fn build_search_tree<R: Rng + ?Sized>(
    board: &Board,
    hyperparams: &MctsHyperparameters,
    rng: &mut R,
) -> Result<SearchTree> {
    if is_terminal(board) {
        return Err(ConnectFourError::GameOver);
    }
    hyperparams.validate()?;

    let mut tree = SearchTree::new(*board);
    for _ in 0..hyperparams.num_simulations {
        tree.run_iteration(hyperparams.exploration_constant, rng);
    }
    Ok(tree)
}

fn summarize<R: Rng + ?Sized>(
    tree: &SearchTree,
    iterations: usize,
    rng: &mut R,
) -> Result<MctsResult> {
    let root = tree.get(tree.root());
    let children: Vec<ChildStats> = root
        .children
        .iter()
        .map(|&id| tree.get(id))
        .filter_map(|child| {
            child.move_that_led_here.map(|column| ChildStats {
                column,
                visits: child.visit_count,
                average_score: child.average_score(),
                win_rate: child.win_rate(),
            })
        })
        .collect();

    let best = tree
        .most_visited_root_child()
        .and_then(|id| tree.get(id).move_that_led_here);

    let (best_column, used_fallback) = match best {
        Some(column) => (column, false),
        None => {
            log::warn!(
                "{}; falling back to a random legal column",
                ConnectFourError::EmptySearch
            );
            let column = get_legal_moves(&root.board)
                .choose(rng)
                .copied()
                .ok_or(ConnectFourError::GameOver)?;
            (column, true)
        }
    };

    Ok(MctsResult {
        best_column,
        children,
        root_visits: root.visit_count,
        iterations,
        tree_size: tree.len(),
        used_fallback,
    })
}

/// Stateful wrapper owning its configuration and random generator.
#[derive(Debug)]
pub struct MctsEngine {
    hyperparams: MctsHyperparameters,
    rng: StdRng,
}

impl MctsEngine {
    /// Seeds the generator from `hyperparams.seed`, or from the OS if unset.
    pub fn new(hyperparams: MctsHyperparameters) -> Result<Self> {
        hyperparams.validate()?;
        let rng = match hyperparams.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Ok(MctsEngine { hyperparams, rng })
    }

    pub fn hyperparameters(&self) -> &MctsHyperparameters {
        &self.hyperparams
    }

    pub fn choose_move(&mut self, board: &Board) -> Result<MctsResult> {
        choose_move_with(board, &self.hyperparams, &mut self.rng)
    }
}
