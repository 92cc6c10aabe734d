use thiserror::Error;

/// Errors reported by the tile solver.
///
/// An unreachable goal is not an error; searches report it as
/// [`SearchResult::NotFound`](crate::solver::SearchResult::NotFound).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PuzzleError {
    #[error("Invalid state: {0}")]
    InvalidState(String),

    #[error("Invalid grid side {0}: expected 1..=16")]
    InvalidSize(usize),

    #[error("Refusing to enumerate every {side}x{side} state without explicit confirmation")]
    EnumerationTooLarge { side: usize },

    #[error("Candidate pool exhausted: found {found} of {requested} valid states")]
    Exhaustion { requested: usize, found: usize },

    #[error("Walk did not settle within {0} steps")]
    WalkLimit(usize),
}

/// Convenience Result type for tile solver operations
pub type Result<T> = std::result::Result<T, PuzzleError>;
