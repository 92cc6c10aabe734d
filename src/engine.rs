//! Core state model for sliding-tile puzzles.
//!
//! This module defines the puzzle's fundamental components:
//! - `Action`: The four directions the blank can move in.
//! - `State`: An immutable, validated `n x n` tile configuration.
//! - The transition functions `apply_action`, `apply_action_gated` and
//!   `apply_action_strict`, which never fail: an inapplicable move returns
//!   the input state unchanged.
use crate::error::{PuzzleError, Result};
use std::fmt;

/// The label of the blank cell.
pub const BLANK: u8 = 0;

/// Largest supported grid side. Tiles are stored as `u8`, so `n * n` must not exceed 256.
pub const MAX_SIDE: usize = 16;

/// A direction in which the blank cell moves.
///
/// Moving the blank `North` is the same as sliding the tile above it down
/// into the blank.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Action {
    /// The blank moves one row up.
    North,
    /// The blank moves one row down.
    South,
    /// The blank moves one column left.
    West,
    /// The blank moves one column right.
    East,
}

impl Action {
    /// Every action, in the order children are generated during search.
    pub const ALL: [Action; 4] = [Action::North, Action::South, Action::West, Action::East];

    /// Returns the action that undoes this one.
    ///
    /// # Examples
    ///
    /// ```
    /// use tile_solver::engine::Action;
    /// assert_eq!(Action::North.opposite(), Action::South);
    /// assert_eq!(Action::East.opposite(), Action::West);
    /// ```
    pub fn opposite(&self) -> Self {
        match self {
            Action::North => Action::South,
            Action::South => Action::North,
            Action::West => Action::East,
            Action::East => Action::West,
        }
    }

    /// One-letter code used when printing action sequences.
    pub fn to_char(&self) -> char {
        match self {
            Action::North => 'N',
            Action::South => 'S',
            Action::West => 'W',
            Action::East => 'E',
        }
    }

    /// Step cost used by weighted uniform-cost search.
    pub fn weight(&self) -> f64 {
        self.weight_half_units() as f64 / 2.0
    }

    /// The weight expressed in exact half-units (N=3, S=1, W=2, E=4).
    pub(crate) fn weight_half_units(&self) -> u32 {
        match self {
            Action::North => 3,
            Action::South => 1,
            Action::West => 2,
            Action::East => 4,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match *self {
            Action::North => "North",
            Action::South => "South",
            Action::West => "West",
            Action::East => "East",
        };
        write!(f, "{}", s)
    }
}

/// A puzzle configuration: a row-major permutation of `0..n*n`, where `0` is the blank.
///
/// A `State` can only be built through [`State::new`] (or [`State::goal`]), which
/// checks the permutation invariant, so every value of this type is valid.
/// States compare, order and hash by their tile sequence. The derived ordering is
/// lexicographic over tiles because `tiles` is the first field.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct State {
    tiles: Box<[u8]>,
    side: usize,
    blank: usize,
}

impl State {
    /// Builds a state from a row-major tile sequence.
    ///
    /// # Returns
    /// * `Ok(State)` if `tiles` has a perfect-square length `n * n` with `1 <= n <= 16`
    ///   and contains every value of `0..n*n` exactly once.
    /// * `Err(PuzzleError::InvalidState)` otherwise.
    ///
    /// # Examples
    /// ```
    /// use tile_solver::engine::State;
    /// let state = State::new(vec![1, 2, 0, 3]).unwrap();
    /// assert_eq!(state.side(), 2);
    /// assert_eq!(state.blank_index(), 2);
    ///
    /// assert!(State::new(vec![1, 2, 3]).is_err()); // not a square
    /// assert!(State::new(vec![0, 1, 1, 3]).is_err()); // duplicate tile
    /// ```
    pub fn new(tiles: Vec<u8>) -> Result<Self> {
        let len = tiles.len();
        let side = integer_sqrt(len);
        if len == 0 || side * side != len {
            return Err(PuzzleError::InvalidState(format!(
                "length {} is not a positive perfect square",
                len
            )));
        }
        if side > MAX_SIDE {
            return Err(PuzzleError::InvalidState(format!(
                "side {} exceeds the maximum of {}",
                side, MAX_SIDE
            )));
        }

        let mut seen = vec![false; len];
        for (i, &tile) in tiles.iter().enumerate() {
            let t = tile as usize;
            if t >= len {
                return Err(PuzzleError::InvalidState(format!(
                    "tile {} at index {} is outside 0..{}",
                    tile, i, len
                )));
            }
            if seen[t] {
                return Err(PuzzleError::InvalidState(format!(
                    "tile {} appears more than once",
                    tile
                )));
            }
            seen[t] = true;
        }

        Ok(Self::from_permutation(tiles.into_boxed_slice(), side))
    }

    /// Builds a state from tiles already known to be a permutation of `0..side*side`.
    pub(crate) fn from_permutation(tiles: Box<[u8]>, side: usize) -> Self {
        debug_assert_eq!(tiles.len(), side * side);
        let blank = tiles
            .iter()
            .position(|&t| t == BLANK)
            .unwrap_or_default();
        State { tiles, side, blank }
    }

    /// The canonical ordered state `[0, 1, ..., n*n - 1]`, with the blank in the top-left corner.
    pub fn goal(side: usize) -> Result<Self> {
        if side == 0 || side > MAX_SIDE {
            return Err(PuzzleError::InvalidSize(side));
        }
        let tiles: Box<[u8]> = (0..side * side).map(|t| t as u8).collect();
        Ok(Self::from_permutation(tiles, side))
    }

    /// The grid side length `n`.
    pub fn side(&self) -> usize {
        self.side
    }

    /// The number of cells, `n * n`.
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Always false; a valid state has at least one cell.
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// The row-major tile sequence.
    pub fn tiles(&self) -> &[u8] {
        &self.tiles
    }

    /// Index of the blank cell in the row-major sequence.
    pub fn blank_index(&self) -> usize {
        self.blank
    }

    /// Returns the tile at the specified row and column.
    ///
    /// # Panics
    /// Panics if `row` or `col` is not below `side()`.
    pub fn tile_at(&self, row: usize, col: usize) -> u8 {
        assert!(row < self.side && col < self.side, "({}, {}) is off the grid", row, col);
        self.tiles[row * self.side + col]
    }

    /// Index of the cell adjacent to `idx` in direction `action`, if it lies on the grid.
    ///
    /// There is no wrap-around: West of column 0 and East of the last column are off-grid,
    /// as are North of row 0 and South of the last row.
    pub fn neighbor(&self, idx: usize, action: Action) -> Option<usize> {
        let n = self.side;
        let (row, col) = (idx / n, idx % n);
        match action {
            Action::North if row > 0 => Some(idx - n),
            Action::South if row + 1 < n => Some(idx + n),
            Action::West if col > 0 => Some(idx - 1),
            Action::East if col + 1 < n => Some(idx + 1),
            _ => None,
        }
    }

    /// The up/down/left/right neighbours of `idx` that lie on the grid.
    pub fn neighbors(&self, idx: usize) -> impl Iterator<Item = usize> + '_ {
        Action::ALL
            .into_iter()
            .filter_map(move |action| self.neighbor(idx, action))
    }

    /// Returns a copy of this state with cells `a` and `b` swapped.
    fn swapped(&self, a: usize, b: usize) -> Self {
        let mut tiles = self.tiles.clone();
        tiles.swap(a, b);
        let blank = if self.blank == a {
            b
        } else if self.blank == b {
            a
        } else {
            self.blank
        };
        State {
            tiles,
            side: self.side,
            blank,
        }
    }
}

impl fmt::Display for State {
    /// Prints one grid row per line; the blank is shown as `.`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = (self.len() - 1).to_string().len();
        for (r, row) in self.tiles.chunks(self.side).enumerate() {
            for (c, &tile) in row.iter().enumerate() {
                if c > 0 {
                    write!(f, " ")?;
                }
                if tile == BLANK {
                    write!(f, "{:>width$}", ".", width = width)?;
                } else {
                    write!(f, "{:>width$}", tile, width = width)?;
                }
            }
            if r + 1 < self.side {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

fn integer_sqrt(value: usize) -> usize {
    let mut root = (value as f64).sqrt() as usize;
    while root * root > value {
        root -= 1;
    }
    while (root + 1) * (root + 1) <= value {
        root += 1;
    }
    root
}

/// Moves the blank one cell in direction `action`.
///
/// The blank swaps places with its neighbour in that direction. If the neighbour
/// would be off the grid, the input state is returned unchanged; search relies on
/// comparing the result with the input to recognise such dead edges.
///
/// # Examples
/// ```
/// use tile_solver::engine::{apply_action, Action, State};
/// let state = State::new(vec![1, 2, 0, 3]).unwrap();
///
/// let moved = apply_action(&state, Action::North);
/// assert_eq!(moved.tiles(), &[0, 2, 1, 3]);
///
/// // Blank is already in the bottom row.
/// assert_eq!(apply_action(&state, Action::South), state);
/// ```
pub fn apply_action(state: &State, action: Action) -> State {
    apply_action_gated(state, action, |_| true)
}

/// Like [`apply_action`], but the move also requires `gate` to accept the value of
/// the tile that would slide into the blank. A refused move is a no-op.
pub fn apply_action_gated<G>(state: &State, action: Action, gate: G) -> State
where
    G: Fn(u8) -> bool,
{
    let idx = state.blank_index();
    match state.neighbor(idx, action) {
        Some(target) if gate(state.tiles[target]) => state.swapped(idx, target),
        _ => state.clone(),
    }
}

/// Gate that only lets odd-valued tiles slide into the blank.
pub fn odd_tile_gate(tile: u8) -> bool {
    tile % 2 == 1
}

/// The strict transition: a move is only applied when the neighbouring tile is odd.
///
/// This is a special case used by the row-divisibility walk
/// ([`crate::walk::row_divisibility_walk`]); search always uses [`apply_action`].
pub fn apply_action_strict(state: &State, action: Action) -> State {
    apply_action_gated(state, action, odd_tile_gate)
}

/// Replays `actions` from `start` with the canonical transition and returns the final state.
pub fn replay(start: &State, actions: &[Action]) -> State {
    actions
        .iter()
        .fold(start.clone(), |state, &action| apply_action(&state, action))
}
