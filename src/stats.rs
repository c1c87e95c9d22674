//! Per-run search counters.

/// Counters for a single search run, returned by value in the outcome.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Popped non-goal nodes that were expanded.
    pub nodes_expanded: u64,
    /// Largest frontier size sampled at the top of an iteration.
    pub max_queue_size: usize,
    /// `g` of the most recently popped node.
    pub solution_depth: u32,
}

impl SearchStats {
    pub fn record_frontier_size(&mut self, size: usize) {
        self.max_queue_size = self.max_queue_size.max(size);
    }

    pub fn record_pop(&mut self, g: u32) {
        self.solution_depth = g;
    }

    pub fn record_expansion(&mut self) {
        self.nodes_expanded += 1;
    }
}
