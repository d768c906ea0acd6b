pub mod algorithm;
pub mod hyperparameters;
pub mod mcts_result;
pub mod node;
pub mod selection;
pub mod tree;

pub use algorithm::{build_search_tree, choose_move, choose_move_with, MctsEngine};
pub use hyperparameters::{MctsHyperparameters, DEFAULT_SIMULATIONS};
pub use mcts_result::{ChildStats, MctsResult};
pub use node::{NodeId, SearchNode};
pub use selection::{select_child, ucb1_score, DEFAULT_EXPLORATION_CONSTANT};
pub use tree::SearchTree;
