use serde::{Deserialize, Serialize};
use std::fmt;

/// Statistics of one root child, i.e. one candidate column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChildStats {
    pub column: usize,
    pub visits: u32,
    /// Mean playout score for the player making this move, in [-1, 1]
    pub average_score: f64,
    /// Fraction of playouts won by the player making this move
    pub win_rate: f64,
}

/// Outcome of one move decision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MctsResult {
    pub best_column: usize,
    /// Root children in creation order
    pub children: Vec<ChildStats>,
    pub root_visits: u32,
    pub iterations: usize,
    /// Nodes allocated during the search, root included
    pub tree_size: usize,
    /// True when the root ended the search without children and a random
    /// legal column was returned instead
    pub used_fallback: bool,
}

impl MctsResult {
    pub fn stats_for(&self, column: usize) -> Option<&ChildStats> {
        self.children.iter().find(|child| child.column == column)
    }
}

impl fmt::Display for ChildStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Col {}: visits = {}, avgScore = {:.2}, win% = {:.1}%",
            self.column + 1,
            self.visits,
            self.average_score,
            100.0 * self.win_rate
        )
    }
}

impl fmt::Display for MctsResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- MCTS Debug ---")?;
        for child in &self.children {
            writeln!(f, "{}", child)?;
        }
        write!(
            f,
            "best column {} after {} iterations ({} nodes){}",
            self.best_column + 1,
            self.iterations,
            self.tree_size,
            if self.used_fallback { ", random fallback" } else { "" }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> MctsResult {
        MctsResult {
            best_column: 3,
            children: vec![
                ChildStats {
                    column: 3,
                    visits: 60,
                    average_score: 0.25,
                    win_rate: 0.6,
                },
                ChildStats {
                    column: 0,
                    visits: 40,
                    average_score: -0.1,
                    win_rate: 0.4,
                },
            ],
            root_visits: 100,
            iterations: 100,
            tree_size: 101,
            used_fallback: false,
        }
    }

    #[test]
    fn test_display_uses_one_based_columns() {
        let rendered = sample().to_string();
        assert!(rendered.contains("Col 4: visits = 60, avgScore = 0.25, win% = 60.0%"));
        assert!(rendered.contains("Col 1: visits = 40, avgScore = -0.10, win% = 40.0%"));
        assert!(rendered.ends_with("best column 4 after 100 iterations (101 nodes)"));
    }

    #[test]
    fn test_stats_for_column() {
        let result = sample();
        assert_eq!(result.stats_for(0).map(|s| s.visits), Some(40));
        assert!(result.stats_for(6).is_none());
    }

    #[test]
    fn test_json_export() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["best_column"], 3);
        assert_eq!(json["children"][1]["visits"], 40);
        assert_eq!(json["used_fallback"], false);
    }
}
