//! MCTS node structures
//!
//! Nodes live in the arena owned by [`crate::mcts::tree::SearchTree`] and
//! refer to each other through [`NodeId`] handles: children are listed in
//! creation order, and the parent handle is only walked by backpropagation.

use crate::game::board::{Board, Player};
use crate::game::get_legal_moves::get_legal_moves;
use crate::game::winner::is_terminal;

/// Index into the node arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// A node in the MCTS tree
#[derive(Debug, Clone)]
pub struct SearchNode {
    /// Board reached at this node
    pub board: Board,

    /// Legal moves not yet expanded into children
    pub untried_moves: Vec<usize>,

    /// Child handles, in creation order
    pub children: Vec<NodeId>,

    /// Parent handle (`None` for the root)
    pub parent: Option<NodeId>,

    /// Number of times this node has been visited
    pub visit_count: u32,

    /// Sum of playout outcomes, seen from `player_just_moved`
    pub total_score: f64,

    /// Playouts won by `player_just_moved` (diagnostic only)
    pub win_count: u32,

    /// Column played from the parent to reach this node (`None` for the root)
    pub move_that_led_here: Option<usize>,

    /// Player who dropped the disc leading here
    pub player_just_moved: Player,

    terminal: bool,
}

impl SearchNode {
    /// Snapshots `board` with every legal move still untried.
    pub fn new(board: Board, parent: Option<NodeId>, move_that_led_here: Option<usize>) -> Self {
        SearchNode {
            board,
            untried_moves: get_legal_moves(&board),
            children: Vec::new(),
            parent,
            visit_count: 0,
            total_score: 0.0,
            win_count: 0,
            move_that_led_here,
            player_just_moved: board.current_player().opponent(),
            terminal: is_terminal(&board),
        }
    }

    pub fn is_terminal(&self) -> bool {
        self.terminal
    }

    pub fn is_fully_expanded(&self) -> bool {
        self.untried_moves.is_empty()
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Mean score, 0.0 while unvisited
    pub fn average_score(&self) -> f64 {
        if self.visit_count == 0 {
            0.0
        } else {
            self.total_score / self.visit_count as f64
        }
    }

    /// Fraction of playouts won by `player_just_moved`, 0.0 while unvisited
    pub fn win_rate(&self) -> f64 {
        if self.visit_count == 0 {
            0.0
        } else {
            self.win_count as f64 / self.visit_count as f64
        }
    }
}
