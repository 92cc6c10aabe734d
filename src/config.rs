//! Search configuration parameters.
//!
//! A search is parametrized by the goal state rather than hard-coding it, so
//! "breadth-first search towards a different goal" is just another config.

use crate::engine::State;
use crate::solver::Strategy;

/// Search configuration parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchConfig {
    /// The state to reach. Compared against the full tile sequence.
    pub goal: State,

    /// Frontier discipline and cost model.
    pub strategy: Strategy,

    /// Optional cap on the number of node expansions.
    /// `None` runs until the goal is found or the frontier is exhausted.
    pub expansion_limit: Option<usize>,
}

impl SearchConfig {
    /// Create a breadth-first config towards `goal` with no expansion limit.
    pub fn new(goal: State) -> Self {
        Self {
            goal,
            strategy: Strategy::BreadthFirst,
            expansion_limit: None,
        }
    }

    /// Create a config towards the canonical goal `[0, 1, ..., n*n - 1]`.
    pub fn canonical(side: usize) -> crate::error::Result<Self> {
        Ok(Self::new(State::goal(side)?))
    }

    /// Replace the strategy.
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Stop after `limit` expansions.
    pub fn with_expansion_limit(mut self, limit: usize) -> Self {
        self.expansion_limit = Some(limit);
        self
    }

    /// Returns `true` once `expanded` has reached the configured limit.
    pub fn limit_reached(&self, expanded: usize) -> bool {
        self.expansion_limit.is_some_and(|limit| expanded >= limit)
    }
}
