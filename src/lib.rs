//! # Connect Four MCTS Library
//!
//! A Connect-4 implementation with an AI opponent driven by Monte Carlo Tree Search.
//!
//! ## Features
//!
//! - **Game Engine**: board representation, legal moves, gravity drops, win/draw detection
//! - **AI Engine**: UCB1 Monte Carlo Tree Search over uniformly random playouts,
//!   backed by an arena of nodes rebuilt for every decision
//! - **Diagnostics**: per-column visit/score/win-rate summaries returned with each move
//!
//! ## Usage
//!
//! ```rust
//! use connect_four_mcts::{create_board_empty, choose_move};
//! use rand::SeedableRng;
//!
//! let board = create_board_empty();
//! let mut rng = rand::rngs::StdRng::seed_from_u64(7);
//! let result = choose_move(&board, 200, &mut rng).unwrap();
//! assert!(result.best_column < connect_four_mcts::COLS);
//! ```

// ============================================================================
// PUBLIC API MODULES
// ============================================================================

/// Core game logic and rules
pub mod game;

/// Monte Carlo Tree Search AI engine
pub mod mcts;

/// Logger bootstrap shared by the binaries
pub mod logging;

// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================

/// Game rules facade
pub use game::*;

/// MCTS AI engine exports
pub use mcts::*;

// ============================================================================
// ERROR TYPES
// ============================================================================

/// Why a column cannot receive a disc.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IllegalMoveReason {
    OutOfRange,
    ColumnFull,
}

impl std::fmt::Display for IllegalMoveReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IllegalMoveReason::OutOfRange => write!(f, "out of range"),
            IllegalMoveReason::ColumnFull => write!(f, "full"),
        }
    }
}

/// Main error type for the Connect Four library
#[derive(Debug, thiserror::Error)]
pub enum ConnectFourError {
    #[error("Illegal move: column {column} is {reason}")]
    IllegalMove {
        column: usize,
        reason: IllegalMoveReason,
    },

    #[error("Search error: root has no expanded children")]
    EmptySearch,

    #[error("Game over: no move can be searched from a terminal board")]
    GameOver,

    #[error("Invalid board: {0}")]
    InvalidBoard(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ConnectFourError {
    /// True for the errors a move-input layer should recover from by re-prompting.
    pub fn is_illegal_move(&self) -> bool {
        matches!(self, ConnectFourError::IllegalMove { .. })
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, ConnectFourError>;

// ============================================================================
// LIBRARY VERSION INFO
// ============================================================================

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Library description
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
