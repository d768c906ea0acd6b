//! MCTS Hyperparameters Configuration
//!
//! The search has a single strength knob, the simulation budget. The
//! exploration constant and the optional RNG seed complete the configuration.
//! Values can be loaded from a JSON file; missing fields fall back to defaults.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::mcts::selection::DEFAULT_EXPLORATION_CONSTANT;
use crate::{ConnectFourError, Result};

/// Default number of iterations per decision
pub const DEFAULT_SIMULATIONS: usize = 10_000;

/// MCTS hyperparameters configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MctsHyperparameters {
    /// Iterations run for every move decision
    /// Default: 10000
    pub num_simulations: usize,

    /// UCB1 exploration constant `c`
    /// Default: 1.414
    pub exploration_constant: f64,

    /// Seed for reproducible searches (`None` draws from the OS)
    pub seed: Option<u64>,
}

impl Default for MctsHyperparameters {
    fn default() -> Self {
        Self {
            num_simulations: DEFAULT_SIMULATIONS,
            exploration_constant: DEFAULT_EXPLORATION_CONSTANT,
            seed: None,
        }
    }
}

impl MctsHyperparameters {
    /// Loads and validates hyperparameters from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let params: MctsHyperparameters = serde_json::from_str(&content)?;
        params.validate()?;
        log::debug!(
            "Loaded MCTS hyperparameters from {}: {}",
            path.as_ref().display(),
            params.to_config_string()
        );
        Ok(params)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.exploration_constant.is_finite() || self.exploration_constant < 0.0 {
            return Err(ConnectFourError::Config(format!(
                "exploration constant must be a non-negative number, got {}",
                self.exploration_constant
            )));
        }
        Ok(())
    }

    /// Create a configuration string for logging
    pub fn to_config_string(&self) -> String {
        let seed = match self.seed {
            Some(seed) => seed.to_string(),
            None => "os".to_string(),
        };
        format!(
            "sims[{}]_c[{:.3}]_seed[{}]",
            self.num_simulations, self.exploration_constant, seed
        )
    }
}
