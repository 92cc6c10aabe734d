//! # Tile Solver Library
//!
//! This library provides a state-space search engine for `n x n` sliding-tile
//! puzzles: exhaustive state enumeration, a structural filter over states, a
//! blank-moving transition function and four search strategies (breadth-first,
//! depth-first, uniform-cost and weighted uniform-cost).
//!
//! It is used by three binaries:
//! - `search_solver`: Solves a start state towards a goal with a chosen strategy.
//! - `state_sampler`: Enumerates all states of a grid and samples valid ones.
//! - `row_walker`: Runs the strict-move random walk until every row is divisible.
//!
//! ## Modules
//! - `engine`: The state model (`State`, `Action`) and the transition functions.
//! - `predicate`: The odd-adjacency filter and the row-divisibility test.
//! - `enumerate`: Lazy enumeration of every permutation of tile labels.
//! - `sampling`: Random sampling of filtered states without replacement.
//! - `solver`: The search engine (`search`, `Strategy`, `SearchResult`).
//! - `config`: `SearchConfig`, which parametrizes a search by goal, strategy and limit.
//! - `walk`: The strict-move row-divisibility walk.
//! - `utils`: Parsing states from text.
//! - `error`: The `PuzzleError` type.

pub mod config;
pub mod engine;
pub mod enumerate;
pub mod error;
pub mod predicate;
pub mod sampling;
pub mod solver;
pub mod utils;
pub mod walk;

pub use config::SearchConfig;
pub use engine::{apply_action, Action, State};
pub use enumerate::enumerate_states;
pub use error::{PuzzleError, Result};
pub use predicate::has_adjacent_odd_conflict;
pub use sampling::sample_k_valid_states;
pub use solver::{search, SearchResult, Strategy};
