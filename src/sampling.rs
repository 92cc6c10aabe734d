use crate::engine::State;
use crate::error::{PuzzleError, Result};
use crate::predicate::has_adjacent_odd_conflict;
use log::debug;
use rand::Rng;

/// Draws `k` states that pass [`has_adjacent_odd_conflict`], uniformly at random and
/// without replacement.
///
/// Every draw is removed from the pool whether or not it passes the predicate, so the
/// loop runs at most `states.len()` times.
///
/// # Arguments
/// * `states`: The candidate pool. It is consumed.
/// * `k`: How many valid states to return. `k == 0` returns an empty vector.
/// * `rng`: Source of randomness. Pass a seeded `SmallRng` for reproducible draws.
///
/// # Returns
/// * `Ok(Vec<State>)` with exactly `k` valid states, in draw order.
/// * `Err(PuzzleError::Exhaustion)` if the pool runs dry first.
///
/// # Examples
/// ```
/// use rand::rngs::SmallRng;
/// use rand::SeedableRng;
/// use tile_solver::enumerate::enumerate_states;
/// use tile_solver::sampling::sample_k_valid_states;
///
/// let pool: Vec<_> = enumerate_states(2).unwrap().collect();
/// let mut rng = SmallRng::seed_from_u64(7);
/// let picked = sample_k_valid_states(pool, 3, &mut rng).unwrap();
/// assert_eq!(picked.len(), 3);
/// ```
pub fn sample_k_valid_states<R>(mut states: Vec<State>, k: usize, rng: &mut R) -> Result<Vec<State>>
where
    R: Rng + ?Sized,
{
    let pool_size = states.len();
    let mut chosen = Vec::with_capacity(k);

    while chosen.len() < k {
        if states.is_empty() {
            debug!(
                "sampling exhausted a pool of {} after finding {} of {} valid states",
                pool_size,
                chosen.len(),
                k
            );
            return Err(PuzzleError::Exhaustion {
                requested: k,
                found: chosen.len(),
            });
        }
        let idx = rng.gen_range(0..states.len());
        let candidate = states.swap_remove(idx);
        if has_adjacent_odd_conflict(&candidate) {
            chosen.push(candidate);
        }
    }

    debug!(
        "sampled {} valid states, {} candidates left in the pool",
        chosen.len(),
        states.len()
    );
    Ok(chosen)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enumerate::enumerate_states;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn pool(side: usize) -> Vec<State> {
        enumerate_states(side).unwrap().collect()
    }

    #[test]
    fn test_sample_returns_valid_distinct_states() {
        let mut rng = SmallRng::seed_from_u64(514514);
        let picked = sample_k_valid_states(pool(3), 10, &mut rng).unwrap();
        assert_eq!(picked.len(), 10);
        assert!(picked.iter().all(has_adjacent_odd_conflict));
        let distinct: HashSet<&State> = picked.iter().collect();
        assert_eq!(distinct.len(), 10);
    }

    #[test]
    fn test_sample_is_deterministic_with_seed() {
        let a = sample_k_valid_states(pool(2), 4, &mut SmallRng::seed_from_u64(1)).unwrap();
        let b = sample_k_valid_states(pool(2), 4, &mut SmallRng::seed_from_u64(1)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_sample_exhaustion_terminates() {
        // On a 2x2 grid the odd tiles 1 and 3 are only accepted on a diagonal,
        // so 8 of the 24 states are valid.
        let valid_count = pool(2).iter().filter(|s| has_adjacent_odd_conflict(s)).count();
        assert_eq!(valid_count, 8);

        let mut rng = SmallRng::seed_from_u64(3);
        let result = sample_k_valid_states(pool(2), 9, &mut rng);
        assert_eq!(
            result,
            Err(PuzzleError::Exhaustion {
                requested: 9,
                found: 8
            })
        );
    }

    #[test]
    fn test_sample_entire_valid_set() {
        let mut rng = SmallRng::seed_from_u64(11);
        let picked = sample_k_valid_states(pool(2), 8, &mut rng).unwrap();
        assert_eq!(picked.len(), 8);
    }

    #[test]
    fn test_sample_empty_pool_and_zero_k() {
        let mut rng = SmallRng::seed_from_u64(0);
        assert_eq!(sample_k_valid_states(Vec::new(), 0, &mut rng), Ok(Vec::new()));
        assert!(matches!(
            sample_k_valid_states(Vec::new(), 1, &mut rng),
            Err(PuzzleError::Exhaustion { requested: 1, found: 0 })
        ));
    }
}
