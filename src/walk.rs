//! Random walk with the strict transition until every row is divisible by a divisor.
//!
//! Each step draws one of the four actions uniformly and applies it with
//! [`apply_action_strict`], so only odd tiles ever slide. A refused move still
//! counts as a step and repeats the current state in the recorded path.
use crate::engine::{apply_action_strict, Action, State};
use crate::error::{PuzzleError, Result};
use crate::predicate::rows_divisible_by;
use log::debug;
use rand::Rng;

/// Default step budget for [`row_divisibility_walk`] callers that have no better bound.
pub const DEFAULT_MAX_STEPS: usize = 100_000;

/// The trace of a finished walk.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Walk {
    /// The state in which every row is divisible.
    pub final_state: State,
    /// Number of actions drawn, including refused ones.
    pub steps: usize,
    /// Every state visited, starting with the start state. Always `steps + 1` long.
    pub path: Vec<State>,
}

/// Walks randomly from `start` until [`rows_divisible_by`] holds.
///
/// # Returns
/// * `Ok(Walk)` once every row is divisible by `divisor`; a start that already
///   satisfies it yields a zero-step walk.
/// * `Err(PuzzleError::WalkLimit)` after `max_steps` steps without success. From some
///   states no odd tile can ever reach the blank, so an unbounded walk could run forever.
///
/// # Panics
/// Panics if `divisor` is zero.
pub fn row_divisibility_walk<R>(
    start: &State,
    divisor: u64,
    max_steps: usize,
    rng: &mut R,
) -> Result<Walk>
where
    R: Rng + ?Sized,
{
    let mut state = start.clone();
    let mut path = vec![state.clone()];

    while !rows_divisible_by(&state, divisor) {
        if path.len() > max_steps {
            debug!("walk gave up after {} steps", max_steps);
            return Err(PuzzleError::WalkLimit(max_steps));
        }
        let action = Action::ALL[rng.gen_range(0..Action::ALL.len())];
        state = apply_action_strict(&state, action);
        path.push(state.clone());
    }

    let steps = path.len() - 1;
    debug!("walk settled after {} steps", steps);
    Ok(Walk {
        final_state: state,
        steps,
        path,
    })
}
