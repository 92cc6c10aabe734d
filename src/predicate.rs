use crate::engine::State;

/// Checks whether any two odd tiles sit next to each other.
///
/// For every odd tile, its up/down/left/right neighbours (no wrap-around at the
/// grid edges) are inspected. If one of them is also odd the state is rejected.
///
/// # Returns
/// `true` only if no odd tile has an odd neighbour anywhere on the grid, which is
/// the acceptance test used when filtering enumerated states. `false` as soon as
/// one conflicting pair is found.
///
/// # Examples
/// ```
/// use tile_solver::engine::State;
/// use tile_solver::predicate::has_adjacent_odd_conflict;
///
/// // Odd tiles 1 and 3 sit on a diagonal: accepted.
/// let diagonal = State::new(vec![1, 0, 2, 3]).unwrap();
/// assert!(has_adjacent_odd_conflict(&diagonal));
///
/// // Odd tiles 1 and 3 share a row: rejected.
/// let same_row = State::new(vec![1, 3, 0, 2]).unwrap();
/// assert!(!has_adjacent_odd_conflict(&same_row));
/// ```
pub fn has_adjacent_odd_conflict(state: &State) -> bool {
    let tiles = state.tiles();
    tiles.iter().enumerate().all(|(idx, &tile)| {
        tile % 2 == 0 || state.neighbors(idx).all(|n| tiles[n] % 2 == 0)
    })
}

/// Reads one grid row as a base-10 number: the first column is the most significant digit.
///
/// Tiles are treated as digits even when they exceed 9, so for a 3x3 row
/// `[7, 2, 4]` the value is `7 * 100 + 2 * 10 + 4 = 724`.
pub fn row_value(state: &State, row: usize) -> u64 {
    (0..state.side()).fold(0u64, |acc, col| {
        acc.wrapping_mul(10)
            .wrapping_add(state.tile_at(row, col) as u64)
    })
}

/// Returns `true` if every row, read through [`row_value`], is divisible by `divisor`.
///
/// # Panics
/// Panics if `divisor` is zero.
pub fn rows_divisible_by(state: &State, divisor: u64) -> bool {
    assert!(divisor > 0, "divisor must be positive");
    (0..state.side()).all(|row| row_value(state, row) % divisor == 0)
}
