//! Error types for the solver and its input boundary.

use thiserror::Error;

/// A grid that cannot be a sliding-tile puzzle state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PuzzleError {
    #[error("puzzle dimension must be greater than 1, got {0}")]
    Dimension(usize),

    #[error("puzzle must have {expected} rows, got {found}")]
    RowCount { expected: usize, found: usize },

    #[error("row {row} must have {expected} cells, got {found}")]
    RowLength {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("tile {value} is out of range for a {size}x{size} puzzle")]
    OutOfRange { value: u32, size: usize },

    #[error("tile {0} appears more than once")]
    Duplicate(u32),
}

/// Failures raised by the search driver.
///
/// Exhausting the frontier is not an error; it is reported as
/// [`SearchStatus::Unsolvable`](crate::search::SearchStatus::Unsolvable).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("initial state is {initial}x{initial} but goal is {goal}x{goal}")]
    DimensionMismatch { initial: usize, goal: usize },

    #[error("heuristic was built for a {heuristic}x{heuristic} goal but goal is {goal}x{goal}")]
    HeuristicMismatch { heuristic: usize, goal: usize },

    #[error("pop from empty frontier")]
    EmptyFrontier,
}

/// Rejected user input at the command-line boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("the number of tiles must be n^2 - 1 for some integer n > 1 (eg 8, 15, 24), got {0}")]
    TileCount(usize),

    #[error("'{0}' is not a number")]
    NotANumber(String),

    #[error("unknown search method '{0}', expected 1 (none), 2 (misplaced) or 3 (manhattan)")]
    Method(String),

    #[error(transparent)]
    Puzzle(#[from] PuzzleError),
}

pub type Result<T, E = SearchError> = std::result::Result<T, E>;
