//! Exhaustive enumeration of puzzle states.
//!
//! There are `(n*n)!` states for an `n x n` grid: 24 for 2x2, 362,880 for 3x3 and
//! about 2.1e13 for 4x4. [`enumerate_states`] therefore refuses `n >= 4`; callers who
//! really want that must go through [`enumerate_states_confirmed`].
use crate::engine::{State, MAX_SIDE};
use crate::error::{PuzzleError, Result};
use log::warn;

/// Smallest grid side that requires explicit confirmation to enumerate.
pub const CONFIRMATION_SIDE: usize = 4;

/// Lazy iterator over every permutation of `0..n*n`, produced with Heap's algorithm.
///
/// Each call to `next` performs a single swap on an internal buffer and yields a copy
/// of it as a [`State`]. The order is fixed for a given `n` but is not otherwise
/// meaningful. To restart, create a new enumerator.
#[derive(Clone, Debug)]
pub struct StateEnumerator {
    side: usize,
    tiles: Vec<u8>,
    counters: Vec<usize>,
    cursor: usize,
    started: bool,
}

impl StateEnumerator {
    fn new(side: usize) -> Self {
        let len = side * side;
        StateEnumerator {
            side,
            tiles: (0..len).map(|t| t as u8).collect(),
            counters: vec![0; len],
            cursor: 1,
            started: false,
        }
    }

    /// The grid side this enumerator was created for.
    pub fn side(&self) -> usize {
        self.side
    }

    fn current(&self) -> State {
        State::from_permutation(self.tiles.clone().into_boxed_slice(), self.side)
    }
}

impl Iterator for StateEnumerator {
    type Item = State;

    fn next(&mut self) -> Option<State> {
        if !self.started {
            self.started = true;
            return Some(self.current());
        }

        let len = self.tiles.len();
        while self.cursor < len {
            let i = self.cursor;
            if self.counters[i] < i {
                if i % 2 == 0 {
                    self.tiles.swap(0, i);
                } else {
                    self.tiles.swap(self.counters[i], i);
                }
                self.counters[i] += 1;
                self.cursor = 1;
                return Some(self.current());
            }
            self.counters[i] = 0;
            self.cursor += 1;
        }
        None
    }
}

/// Enumerates every state of an `n x n` grid.
///
/// # Returns
/// * `Ok(StateEnumerator)` for `1 <= n <= 3`.
/// * `Err(PuzzleError::InvalidSize)` for `n == 0`.
/// * `Err(PuzzleError::EnumerationTooLarge)` for `n >= 4`.
///
/// # Examples
/// ```
/// use tile_solver::enumerate::enumerate_states;
/// assert_eq!(enumerate_states(2).unwrap().count(), 24);
/// assert!(enumerate_states(4).is_err());
/// ```
pub fn enumerate_states(side: usize) -> Result<StateEnumerator> {
    if side >= CONFIRMATION_SIDE {
        if side > MAX_SIDE {
            return Err(PuzzleError::InvalidSize(side));
        }
        return Err(PuzzleError::EnumerationTooLarge { side });
    }
    enumerate_states_confirmed(side)
}

/// Enumerates every state of an `n x n` grid without the size guard.
///
/// The caller takes responsibility for the `(n*n)!` cardinality.
pub fn enumerate_states_confirmed(side: usize) -> Result<StateEnumerator> {
    if side == 0 || side > MAX_SIDE {
        return Err(PuzzleError::InvalidSize(side));
    }
    if side >= CONFIRMATION_SIDE {
        warn!(
            "enumerating all {}x{} states ({} permutations)",
            side,
            side,
            state_count(side).map_or_else(|| "more than 2^128".to_string(), |c| c.to_string())
        );
    }
    Ok(StateEnumerator::new(side))
}

/// Number of states of an `n x n` grid, `(n*n)!`, or `None` if it overflows `u128`.
pub fn state_count(side: usize) -> Option<u128> {
    (1..=(side * side) as u128).try_fold(1u128, |acc, k| acc.checked_mul(k))
}
