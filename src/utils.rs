use crate::engine::State;
use crate::error::{PuzzleError, Result};

/// Parses a tile list such as `"4,0,2,1,3,7,6,8,5"` or `"4 0 2 1 3 7 6 8 5"` into a `State`.
///
/// Tiles may be separated by commas, whitespace, or both. Surrounding brackets
/// (`[...]`) are ignored so that printed tile lists can be pasted back in.
///
/// # Returns
/// * `Ok(State)` if every token is an integer in `0..=255` and the tiles form a valid state.
/// * `Err(PuzzleError::InvalidState)` if a token is not a number or the tiles are not a
///   permutation of `0..n*n` for a perfect square `n*n`.
///
/// # Examples
/// ```
/// use tile_solver::utils::state_from_str;
///
/// let state = state_from_str("[1, 2, 0, 3]").unwrap();
/// assert_eq!(state.tiles(), &[1, 2, 0, 3]);
///
/// assert!(state_from_str("1,2,x,3").is_err());
/// assert!(state_from_str("1,2,3").is_err());
/// ```
pub fn state_from_str(s: &str) -> Result<State> {
    let trimmed = s.trim().trim_start_matches('[').trim_end_matches(']');
    let tiles = parse_tiles(trimmed)?;
    State::new(tiles)
}

/// Parses grid rows, one string per row, into a `State`.
///
/// Each row holds whitespace- or comma-separated tiles, and every row must have as
/// many tiles as there are rows. Blank lines are skipped, which lets a board file be
/// passed through `str::lines` directly.
///
/// # Examples
/// ```
/// use tile_solver::utils::state_from_rows;
///
/// let state = state_from_rows(&["4 0 2", "1 3 7", "6 8 5"]).unwrap();
/// assert_eq!(state.side(), 3);
/// assert_eq!(state.tile_at(1, 2), 7);
///
/// assert!(state_from_rows(&["0 1", "2"]).is_err());
/// ```
pub fn state_from_rows(rows: &[&str]) -> Result<State> {
    let rows: Vec<&str> = rows
        .iter()
        .map(|row| row.trim())
        .filter(|row| !row.is_empty())
        .collect();

    let mut tiles = Vec::with_capacity(rows.len() * rows.len());
    for (r, row) in rows.iter().enumerate() {
        let row_tiles = parse_tiles(row)?;
        if row_tiles.len() != rows.len() {
            return Err(PuzzleError::InvalidState(format!(
                "Row {} has {} tiles (expected {})",
                r,
                row_tiles.len(),
                rows.len()
            )));
        }
        tiles.extend(row_tiles);
    }
    State::new(tiles)
}

/// Parses a state from text that is either a single tile list or a grid of rows.
pub fn state_from_text(text: &str) -> Result<State> {
    let lines: Vec<&str> = text.lines().filter(|l| !l.trim().is_empty()).collect();
    if lines.len() > 1 {
        state_from_rows(&lines)
    } else {
        state_from_str(text)
    }
}

fn parse_tiles(s: &str) -> Result<Vec<u8>> {
    s.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(|token| {
            token.parse::<u8>().map_err(|_| {
                PuzzleError::InvalidState(format!("Unrecognized tile '{}'", token))
            })
        })
        .collect()
}
