//! UCB1 child selection
//!
//! score = total_score / visits + c × sqrt(ln(N_parent) / visits)
//!
//! Children that were never visited are returned before any scoring, so the
//! formula never divides by zero.

use crate::mcts::node::{NodeId, SearchNode};
use crate::mcts::tree::SearchTree;

/// Exploration constant used when none is configured (≈ √2)
pub const DEFAULT_EXPLORATION_CONSTANT: f64 = 1.414;

/// UCB1 score of a visited child.
pub fn ucb1_score(child: &SearchNode, parent_visits: u32, exploration_constant: f64) -> f64 {
    let visits = child.visit_count as f64;
    let exploit = child.total_score / visits;
    let explore = exploration_constant * ((parent_visits as f64).ln() / visits).sqrt();
    exploit + explore
}

/// Selects the child of `node_id` with the highest UCB1 score.
///
/// The first unvisited child wins outright; otherwise ties keep the earliest
/// child in creation order. Returns `None` if the node has no children.
pub fn select_child(
    tree: &SearchTree,
    node_id: NodeId,
    exploration_constant: f64,
) -> Option<NodeId> {
    let node = tree.get(node_id);
    let parent_visits = node.visit_count;

    let mut best: Option<(NodeId, f64)> = None;
    for &child_id in &node.children {
        let child = tree.get(child_id);
        if child.visit_count == 0 {
            return Some(child_id);
        }
        let score = ucb1_score(child, parent_visits, exploration_constant);
        match best {
            Some((_, best_score)) if score <= best_score => {}
            _ => best = Some((child_id, score)),
        }
    }

    best.map(|(id, _)| id)
}
