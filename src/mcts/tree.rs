//! MCTS tree with arena allocation.
//!
//! Every node of one search lives in a single `Vec`; nodes point at each other
//! with [`NodeId`] indices. The root is always at index 0. Dropping the tree
//! releases the whole search at once.

use rand::Rng;

use crate::game::apply_move::apply_move;
use crate::game::board::{Board, Player};
use crate::game::simulate_game::simulate_game;
use crate::mcts::node::{NodeId, SearchNode};
use crate::mcts::selection::select_child;

#[derive(Debug, Clone)]
pub struct SearchTree {
    nodes: Vec<SearchNode>,
}

impl SearchTree {
    /// Creates a tree holding only a root for `board`.
    pub fn new(board: Board) -> Self {
        SearchTree {
            nodes: vec![SearchNode::new(board, None, None)],
        }
    }

    #[inline]
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    #[inline]
    pub fn get(&self, id: NodeId) -> &SearchNode {
        &self.nodes[id.0]
    }

    #[inline]
    pub fn get_mut(&mut self, id: NodeId) -> &mut SearchNode {
        &mut self.nodes[id.0]
    }

    /// Number of nodes in the arena.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Never true: the root is allocated on construction.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn nodes(&self) -> &[SearchNode] {
        &self.nodes
    }

    /// Allocates a node for `board` and links it under `parent`.
    pub fn create_node(&mut self, board: Board, parent: NodeId, column: usize) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(SearchNode::new(board, Some(parent), Some(column)));
        self.get_mut(parent).children.push(id);
        id
    }

    /// Expands one uniformly chosen untried move of `node_id`.
    ///
    /// Returns `None` when every legal move already has a child or the rules
    /// reject the pick, which then stays untried.
    pub fn expand_node<R: Rng + ?Sized>(&mut self, node_id: NodeId, rng: &mut R) -> Option<NodeId> {
        let node = self.get_mut(node_id);
        if node.untried_moves.is_empty() {
            return None;
        }
        let pick = rng.random_range(0..node.untried_moves.len());
        let column = node.untried_moves[pick];

        let mut board = node.board;
        if let Err(err) = apply_move(&mut board, column) {
            log::error!("untried move rejected by the rules: {}", err);
            return None;
        }
        node.untried_moves.swap_remove(pick);
        Some(self.create_node(board, node_id, column))
    }

    /// Adds `result` (X's point of view) to every node from `node_id` up to the root.
    ///
    /// Each node scores the outcome for the player who moved into it.
    pub fn backpropagate(&mut self, node_id: NodeId, result: f64) {
        let mut current = Some(node_id);
        while let Some(id) = current {
            let node = self.get_mut(id);
            let score = match node.player_just_moved {
                Player::X => result,
                Player::O => -result,
            };
            node.visit_count += 1;
            node.total_score += score;
            if score > 0.0 {
                node.win_count += 1;
            }
            current = node.parent;
        }
    }

    /// Runs one selection / expansion / simulation / backpropagation cycle.
    ///
    /// Returns the node the playout was started from.
    pub fn run_iteration<R: Rng + ?Sized>(&mut self, exploration_constant: f64, rng: &mut R) -> NodeId {
        let mut node_id = self.root();
        loop {
            let node = self.get(node_id);
            if !node.is_fully_expanded() || node.is_leaf() || node.is_terminal() {
                break;
            }
            match select_child(self, node_id, exploration_constant) {
                Some(child) => node_id = child,
                None => break,
            }
        }

        if !self.get(node_id).is_terminal() {
            if let Some(child) = self.expand_node(node_id, rng) {
                node_id = child;
            }
        }

        let result = simulate_game(&self.get(node_id).board, rng);
        self.backpropagate(node_id, result);
        node_id
    }

    /// Root child with the most visits; ties keep the earliest child.
    pub fn most_visited_root_child(&self) -> Option<NodeId> {
        let mut best: Option<(NodeId, u32)> = None;
        for &child_id in &self.get(self.root()).children {
            let visits = self.get(child_id).visit_count;
            match best {
                Some((_, best_visits)) if visits <= best_visits => {}
                _ => best = Some((child_id, visits)),
            }
        }
        best.map(|(id, _)| id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::board::{create_board_empty, COLS};
    use crate::game::get_legal_moves::get_legal_moves;
    use crate::mcts::selection::DEFAULT_EXPLORATION_CONSTANT;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn assert_partition(tree: &SearchTree) {
        for node in tree.nodes() {
            let mut seen: Vec<usize> = node.untried_moves.clone();
            seen.extend(
                node.children
                    .iter()
                    .filter_map(|&child| tree.get(child).move_that_led_here),
            );
            seen.sort_unstable();
            assert_eq!(seen, get_legal_moves(&node.board));
        }
    }

    #[test]
    fn test_new_tree_has_root_only() {
        let tree = SearchTree::new(create_board_empty());
        assert_eq!(tree.len(), 1);
        assert!(!tree.is_empty());
        assert_eq!(tree.root(), NodeId(0));
        assert_eq!(tree.get(tree.root()).parent, None);
    }

    #[test]
    fn test_expand_node_moves_one_untried_move() {
        let mut tree = SearchTree::new(create_board_empty());
        let mut rng = StdRng::seed_from_u64(42);
        let root = tree.root();

        let child = tree.expand_node(root, &mut rng).unwrap();
        let column = tree.get(child).move_that_led_here.unwrap();

        assert_eq!(tree.len(), 2);
        assert_eq!(tree.get(root).children, vec![child]);
        assert_eq!(tree.get(root).untried_moves.len(), 6);
        assert!(!tree.get(root).untried_moves.contains(&column));
        assert_eq!(tree.get(child).parent, Some(root));
        assert_eq!(tree.get(child).player_just_moved, Player::X);
        assert_eq!(tree.get(child).board.current_player(), Player::O);
        assert_eq!(tree.get(child).board.cell(5, column), Some(Player::X));
        assert_partition(&tree);
    }

    #[test]
    fn test_expand_node_exhausts_untried_moves() {
        let mut tree = SearchTree::new(create_board_empty());
        let mut rng = StdRng::seed_from_u64(7);
        let root = tree.root();

        for _ in 0..7 {
            assert!(tree.expand_node(root, &mut rng).is_some());
        }
        assert_eq!(tree.expand_node(root, &mut rng), None);
        assert_eq!(tree.get(root).children.len(), 7);
        assert_partition(&tree);
    }

    #[test]
    fn test_rejected_untried_move_stays_untried() {
        let mut tree = SearchTree::new(create_board_empty());
        let mut rng = StdRng::seed_from_u64(3);
        let root = tree.root();
        tree.get_mut(root).untried_moves = vec![COLS];

        assert_eq!(tree.expand_node(root, &mut rng), None);
        assert_eq!(tree.get(root).untried_moves, vec![COLS]);
        assert!(tree.get(root).children.is_empty());
        assert_eq!(tree.len(), 1);
    }

    #[test]
    fn test_backpropagate_flips_perspective() {
        let mut tree = SearchTree::new(create_board_empty());
        let mut rng = StdRng::seed_from_u64(1);
        let root = tree.root();
        let x_child = tree.expand_node(root, &mut rng).unwrap();
        let o_grandchild = tree.expand_node(x_child, &mut rng).unwrap();

        tree.backpropagate(o_grandchild, 1.0);

        let grandchild = tree.get(o_grandchild);
        assert_eq!(grandchild.player_just_moved, Player::O);
        assert_eq!(grandchild.visit_count, 1);
        assert_eq!(grandchild.total_score, -1.0);
        assert_eq!(grandchild.win_count, 0);

        let child = tree.get(x_child);
        assert_eq!(child.visit_count, 1);
        assert_eq!(child.total_score, 1.0);
        assert_eq!(child.win_count, 1);

        let root_node = tree.get(root);
        assert_eq!(root_node.visit_count, 1);
        assert_eq!(root_node.total_score, -1.0);
    }

    #[test]
    fn test_backpropagate_draw_counts_visit_only() {
        let mut tree = SearchTree::new(create_board_empty());
        let mut rng = StdRng::seed_from_u64(2);
        let child = tree.expand_node(tree.root(), &mut rng).unwrap();

        tree.backpropagate(child, 0.0);

        for id in [child, tree.root()] {
            assert_eq!(tree.get(id).visit_count, 1);
            assert_eq!(tree.get(id).total_score, 0.0);
            assert_eq!(tree.get(id).win_count, 0);
        }
    }

    #[test]
    fn test_partition_holds_through_search() {
        let mut tree = SearchTree::new(create_board_empty());
        let mut rng = StdRng::seed_from_u64(99);

        for iteration in 1..=300u32 {
            tree.run_iteration(DEFAULT_EXPLORATION_CONSTANT, &mut rng);
            assert_eq!(tree.get(tree.root()).visit_count, iteration);
            assert_partition(&tree);
        }
    }

    #[test]
    fn test_one_node_added_per_iteration_until_terminal() {
        let mut tree = SearchTree::new(create_board_empty());
        let mut rng = StdRng::seed_from_u64(4);
        for iteration in 1..=50 {
            tree.run_iteration(DEFAULT_EXPLORATION_CONSTANT, &mut rng);
            assert_eq!(tree.len(), iteration + 1);
        }
    }

    #[test]
    fn test_terminal_root_is_simulated_without_expansion() {
        let board = Board::from_rows([
            ".......",
            ".......",
            ".......",
            ".......",
            "..OOO..",
            ".XXXX..",
        ])
        .unwrap();
        let mut tree = SearchTree::new(board);
        let mut rng = StdRng::seed_from_u64(4);

        let simulated = tree.run_iteration(DEFAULT_EXPLORATION_CONSTANT, &mut rng);
        assert_eq!(simulated, tree.root());
        assert_eq!(tree.len(), 1);
        // X won, and X is the player who just moved into the root
        assert_eq!(tree.get(tree.root()).total_score, 1.0);
    }

    #[test]
    fn test_most_visited_root_child_tie_break() {
        let mut tree = SearchTree::new(create_board_empty());
        let mut rng = StdRng::seed_from_u64(8);
        let root = tree.root();
        assert_eq!(tree.most_visited_root_child(), None);

        let first = tree.expand_node(root, &mut rng).unwrap();
        let second = tree.expand_node(root, &mut rng).unwrap();
        let third = tree.expand_node(root, &mut rng).unwrap();
        tree.get_mut(first).visit_count = 4;
        tree.get_mut(second).visit_count = 9;
        tree.get_mut(third).visit_count = 9;

        assert_eq!(tree.most_visited_root_child(), Some(second));
    }
}
