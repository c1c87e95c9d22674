//! Remaining-cost estimators.
//!
//! All three are admissible and consistent under unit move cost, so the
//! driver returns optimal solutions with any of them.

use std::fmt;

use clap::ValueEnum;

use crate::puzzle::Puzzle;

/// Estimates the number of moves from a state to the goal.
pub trait Heuristic {
    fn estimate(&self, state: &Puzzle) -> u32;

    /// Dimension of the goal this estimator was built for, if it has one.
    fn goal_size(&self) -> Option<usize> {
        None
    }
}

/// Always 0; turns best-first search into uniform-cost search.
#[derive(Debug, Clone, Copy, Default)]
pub struct Zero;

impl Heuristic for Zero {
    fn estimate(&self, _state: &Puzzle) -> u32 {
        0
    }
}

/// Counts non-blank tiles that are not on their goal cell.
#[derive(Debug, Clone)]
pub struct MisplacedTiles {
    goal: Puzzle,
}

impl MisplacedTiles {
    pub fn new(goal: &Puzzle) -> Self {
        Self { goal: goal.clone() }
    }
}

impl Heuristic for MisplacedTiles {
    fn estimate(&self, state: &Puzzle) -> u32 {
        state
            .cells()
            .iter()
            .zip(self.goal.cells())
            .filter(|&(&tile, &target)| tile != 0 && tile != target)
            .count() as u32
    }

    fn goal_size(&self) -> Option<usize> {
        Some(self.goal.size())
    }
}

/// Sum of row plus column displacement of every non-blank tile.
#[derive(Debug, Clone)]
pub struct ManhattanDistance {
    size: usize,
    /// `positions[tile]` is the goal `(row, col)` of `tile`.
    positions: Vec<(usize, usize)>,
}

impl ManhattanDistance {
    pub fn new(goal: &Puzzle) -> Self {
        let size = goal.size();
        let mut positions = vec![(0, 0); goal.cells().len()];
        for (i, &tile) in goal.cells().iter().enumerate() {
            positions[tile as usize] = (i / size, i % size);
        }
        Self { size, positions }
    }
}

impl Heuristic for ManhattanDistance {
    fn estimate(&self, state: &Puzzle) -> u32 {
        let size = state.size();
        let mut distance = 0;
        for (i, &tile) in state.cells().iter().enumerate() {
            if tile != 0 {
                let (target_row, target_col) = self.positions[tile as usize];
                distance += (i / size).abs_diff(target_row) + (i % size).abs_diff(target_col);
            }
        }
        distance as u32
    }

    fn goal_size(&self) -> Option<usize> {
        Some(self.size)
    }
}

/// Which estimator a search run uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum HeuristicKind {
    /// Uniform cost search.
    #[value(alias = "ucs", alias = "1")]
    None,
    /// A* with the misplaced tile count.
    #[value(alias = "2")]
    Misplaced,
    /// A* with the Manhattan distance sum.
    #[value(alias = "3")]
    Manhattan,
}

impl fmt::Display for HeuristicKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            HeuristicKind::None => "Uniform Cost Search",
            HeuristicKind::Misplaced => "A* with Misplaced Tile Heuristic",
            HeuristicKind::Manhattan => "A* with Manhattan Distance Heuristic",
        };
        write!(f, "{}", s)
    }
}
