//! Fingerprints of states that have already been expanded.

use std::collections::HashSet;

use crate::puzzle::{Fingerprint, Puzzle};

/// Grows monotonically for the lifetime of one search run.
#[derive(Debug, Default)]
pub struct ClosedSet {
    seen: HashSet<Fingerprint>,
}

impl ClosedSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `false` if the fingerprint was already present.
    pub fn insert(&mut self, fingerprint: Fingerprint) -> bool {
        self.seen.insert(fingerprint)
    }

    pub fn contains(&self, fingerprint: &Fingerprint) -> bool {
        self.seen.contains(fingerprint)
    }

    pub fn contains_state(&self, state: &Puzzle) -> bool {
        self.seen.contains(state.cells())
    }

    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}
