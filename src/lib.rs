//! Best-first solver for the n×n sliding-tile puzzle.
//!
//! The search core (`puzzle`, `heuristic`, `node`, `expand`, `frontier`,
//! `closed`, `search`, `stats`) is pure and synchronous. `input` and
//! `render` are the console boundary used by the binary.
//!
//! ```
//! use slider_search::{solve, HeuristicKind, Puzzle};
//!
//! let start = Puzzle::from_rows(&[vec![1, 2, 3], vec![4, 5, 6], vec![7, 0, 8]]).unwrap();
//! let outcome = solve(&start, HeuristicKind::Manhattan).unwrap();
//! assert!(outcome.is_solved());
//! assert_eq!(outcome.depth(), 1);
//! ```

pub mod closed;
pub mod error;
pub mod expand;
pub mod frontier;
pub mod heuristic;
pub mod input;
pub mod node;
pub mod puzzle;
pub mod render;
pub mod search;
pub mod stats;

pub use error::{InputError, PuzzleError, SearchError};
pub use heuristic::{Heuristic, HeuristicKind, ManhattanDistance, MisplacedTiles, Zero};
pub use puzzle::{Fingerprint, Move, Puzzle};
pub use search::{
    best_first, search, search_observed, solve, NoopObserver, SearchObserver, SearchOutcome,
    SearchStatus, TracingObserver,
};
pub use stats::SearchStats;
