//! Search nodes and their frontier ordering key.

use std::cmp::Ordering;

use crate::puzzle::Puzzle;

/// A state reached at path cost `g` with heuristic estimate `h`.
#[derive(Debug, Clone)]
pub struct SearchNode {
    pub state: Puzzle,
    /// Moves from the initial state.
    pub g: u32,
    pub h: u32,
    /// Index of the move that produced this node in the run's trail arena
    /// (`None` for the root).
    pub(crate) trail: Option<usize>,
}

impl SearchNode {
    pub fn root(state: Puzzle, h: u32) -> Self {
        Self {
            state,
            g: 0,
            h,
            trail: None,
        }
    }

    pub fn f(&self) -> u32 {
        self.g + self.h
    }
}

/// Frontier ordering: lower `f` first, then lower `h`, then earlier
/// insertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriorityKey {
    pub f: u32,
    pub h: u32,
    pub seq: u64,
}

impl PriorityKey {
    pub fn new(node: &SearchNode, seq: u64) -> Self {
        Self {
            f: node.f(),
            h: node.h,
            seq,
        }
    }
}

impl PartialOrd for PriorityKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PriorityKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.f
            .cmp(&other.f)
            .then(self.h.cmp(&other.h))
            .then(self.seq.cmp(&other.seq))
    }
}
