// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Strategy Selection
//!
//! Which engine a solve runs, plus the knobs shared by both. The exact
//! engine is the default: it is complete, and its node budget keeps the
//! worst case bounded. The heuristic engine trades completeness for speed
//! on roomy instances.

use seatwise_backtrack::solver::DEFAULT_NODE_BUDGET;

/// The engine a solve dispatches to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    /// The exact backtracking engine.
    #[default]
    Exact,
    /// The greedy seeding and repair engine.
    HeuristicRepair,
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Strategy::Exact => write!(f, "exact"),
            Strategy::HeuristicRepair => write!(f, "heuristic-repair"),
        }
    }
}

/// Configuration for one solve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolverConfig {
    strategy: Strategy,
    seed: u64,
    node_budget: u64,
}

impl SolverConfig {
    /// Creates the default configuration: exact strategy, seed zero, the
    /// default node budget.
    pub fn new() -> Self {
        Self {
            strategy: Strategy::default(),
            seed: 0,
            node_budget: DEFAULT_NODE_BUDGET,
        }
    }

    /// Sets the strategy.
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Sets the random seed. The same seed makes a solve reproducible.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Sets the node budget of the exact engine.
    pub fn with_node_budget(mut self, node_budget: u64) -> Self {
        self.node_budget = node_budget;
        self
    }

    /// Returns the strategy.
    #[inline]
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Returns the random seed.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Returns the node budget of the exact engine.
    #[inline]
    pub fn node_budget(&self) -> u64 {
        self.node_budget
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for SolverConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "SolverConfig(strategy: {}, seed: {}, budget: {})",
            self.strategy, self.seed, self.node_budget
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SolverConfig::default();
        assert_eq!(config.strategy(), Strategy::Exact);
        assert_eq!(config.seed(), 0);
        assert_eq!(config.node_budget(), DEFAULT_NODE_BUDGET);
    }

    #[test]
    fn test_builder_style_setters() {
        let config = SolverConfig::new()
            .with_strategy(Strategy::HeuristicRepair)
            .with_seed(17)
            .with_node_budget(500);

        assert_eq!(config.strategy(), Strategy::HeuristicRepair);
        assert_eq!(config.seed(), 17);
        assert_eq!(config.node_budget(), 500);
    }

    #[test]
    fn test_strategy_display() {
        assert_eq!(Strategy::Exact.to_string(), "exact");
        assert_eq!(Strategy::HeuristicRepair.to_string(), "heuristic-repair");
    }
}
