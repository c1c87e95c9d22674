//! Best-first search driver.
//!
//! One loop serves uniform-cost search and both A* variants; the only
//! thing that changes between them is the [`Heuristic`] passed in.

use tracing::{debug, debug_span, trace};

use crate::closed::ClosedSet;
use crate::error::{Result, SearchError};
use crate::expand;
use crate::frontier::Frontier;
use crate::heuristic::{Heuristic, HeuristicKind, ManhattanDistance, MisplacedTiles, Zero};
use crate::node::SearchNode;
use crate::puzzle::{Move, Puzzle};
use crate::stats::SearchStats;

/// How a run terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchStatus {
    Solved,
    /// The frontier ran dry without reaching the goal.
    Unsolvable,
}

#[derive(Debug, Clone)]
pub struct SearchOutcome {
    pub status: SearchStatus,
    /// The goal state on success.
    pub final_state: Option<Puzzle>,
    /// Blank moves leading from the initial state to `final_state`.
    pub moves: Vec<Move>,
    pub stats: SearchStats,
}

impl SearchOutcome {
    pub fn is_solved(&self) -> bool {
        self.status == SearchStatus::Solved
    }

    /// Solution length when solved, otherwise the last depth explored.
    pub fn depth(&self) -> u32 {
        self.stats.solution_depth
    }
}

/// Hooks into the search loop. Every method defaults to doing nothing.
pub trait SearchObserver {
    /// A node left the frontier.
    fn on_pop(&mut self, _node: &SearchNode) {}

    /// A popped node whose state had already been expanded was dropped.
    fn on_stale(&mut self, _node: &SearchNode) {}

    /// A node is about to be expanded.
    fn on_expand(&mut self, _node: &SearchNode) {}

    /// A generated child was dropped because its state is closed.
    fn on_skip(&mut self, _state: &Puzzle) {}

    fn on_solved(&mut self, _node: &SearchNode, _stats: &SearchStats) {}

    fn on_exhausted(&mut self, _stats: &SearchStats) {}
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl SearchObserver for NoopObserver {}

/// Reports the search trace as `tracing` events.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl SearchObserver for TracingObserver {
    fn on_pop(&mut self, node: &SearchNode) {
        trace!(
            g = node.g,
            h = node.h,
            f = node.f(),
            "best state to explore:\n{}",
            node.state
        );
    }

    fn on_stale(&mut self, node: &SearchNode) {
        trace!(g = node.g, "popped state was already expanded");
    }

    fn on_skip(&mut self, _state: &Puzzle) {
        trace!("child state skipped because of repeated state");
    }

    fn on_solved(&mut self, node: &SearchNode, stats: &SearchStats) {
        debug!(
            depth = node.g,
            nodes_expanded = stats.nodes_expanded,
            max_queue_size = stats.max_queue_size,
            "goal state reached"
        );
    }

    fn on_exhausted(&mut self, stats: &SearchStats) {
        debug!(
            depth = stats.solution_depth,
            nodes_expanded = stats.nodes_expanded,
            max_queue_size = stats.max_queue_size,
            "frontier exhausted"
        );
    }
}

/// Solves `initial` toward the canonical goal of the same size.
pub fn solve(initial: &Puzzle, kind: HeuristicKind) -> Result<SearchOutcome> {
    search(initial, &Puzzle::goal(initial.size()), kind)
}

pub fn search(
    initial: &Puzzle,
    goal: &Puzzle,
    kind: HeuristicKind,
) -> Result<SearchOutcome> {
    search_observed(initial, goal, kind, &mut TracingObserver)
}

pub fn search_observed(
    initial: &Puzzle,
    goal: &Puzzle,
    kind: HeuristicKind,
    observer: &mut dyn SearchObserver,
) -> Result<SearchOutcome> {
    let _span = debug_span!("search", size = initial.size(), method = %kind).entered();

    match kind {
        HeuristicKind::None => best_first(initial, goal, &Zero, observer),
        HeuristicKind::Misplaced => {
            best_first(initial, goal, &MisplacedTiles::new(goal), observer)
        }
        HeuristicKind::Manhattan => {
            best_first(initial, goal, &ManhattanDistance::new(goal), observer)
        }
    }
}

/// Generic best-first search from `initial` to `goal`.
///
/// Each iteration samples the frontier size, pops the minimal `(f, h)`
/// node, stops if it is the goal, and otherwise closes and expands it.
/// Children whose state is already closed are never pushed. Duplicates
/// that are still open are allowed in the frontier and dropped when
/// popped after their state was closed, so every state is expanded at
/// most once.
///
/// Returns an optimal solution when `heuristic` is consistent. Fails with
/// `DimensionMismatch` or `HeuristicMismatch` when `initial`, `goal` and the
/// heuristic's goal disagree on the board size.
pub fn best_first<H, O>(
    initial: &Puzzle,
    goal: &Puzzle,
    heuristic: &H,
    observer: &mut O,
) -> Result<SearchOutcome>
where
    H: Heuristic + ?Sized,
    O: SearchObserver + ?Sized,
{
    if initial.size() != goal.size() {
        return Err(SearchError::DimensionMismatch {
            initial: initial.size(),
            goal: goal.size(),
        });
    }
    if let Some(size) = heuristic.goal_size().filter(|&size| size != goal.size()) {
        return Err(SearchError::HeuristicMismatch {
            heuristic: size,
            goal: goal.size(),
        });
    }

    let mut frontier = Frontier::new();
    let mut closed = ClosedSet::new();
    let mut stats = SearchStats::default();
    // (parent trail index, move) for every pushed child
    let mut trail: Vec<(Option<usize>, Move)> = Vec::new();

    frontier.push(SearchNode::root(
        initial.clone(),
        heuristic.estimate(initial),
    ));

    loop {
        stats.record_frontier_size(frontier.len());
        if frontier.is_empty() {
            observer.on_exhausted(&stats);
            return Ok(SearchOutcome {
                status: SearchStatus::Unsolvable,
                final_state: None,
                moves: Vec::new(),
                stats,
            });
        }

        let node = frontier.pop()?;
        stats.record_pop(node.g);
        observer.on_pop(&node);

        if node.state == *goal {
            observer.on_solved(&node, &stats);
            let moves = unwind(&trail, node.trail);
            return Ok(SearchOutcome {
                status: SearchStatus::Solved,
                final_state: Some(node.state),
                moves,
                stats,
            });
        }

        if !closed.insert(node.state.fingerprint()) {
            observer.on_stale(&node);
            continue;
        }

        observer.on_expand(&node);
        stats.record_expansion();

        for (dir, next) in expand::neighbors(&node.state) {
            if closed.contains_state(&next) {
                observer.on_skip(&next);
                continue;
            }
            trail.push((node.trail, dir));
            let h = heuristic.estimate(&next);
            frontier.push(SearchNode {
                state: next,
                g: node.g + 1,
                h,
                trail: Some(trail.len() - 1),
            });
        }
    }
}

fn unwind(trail: &[(Option<usize>, Move)], mut at: Option<usize>) -> Vec<Move> {
    let mut moves = Vec::new();
    while let Some(i) = at {
        let (parent, dir) = trail[i];
        moves.push(dir);
        at = parent;
    }
    moves.reverse();
    moves
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::puzzle::Fingerprint;
    use std::collections::HashSet;

    #[derive(Default)]
    struct Recorder {
        expanded: Vec<Fingerprint>,
        skipped: usize,
        stale: usize,
    }

    impl SearchObserver for Recorder {
        fn on_expand(&mut self, node: &SearchNode) {
            self.expanded.push(node.state.fingerprint());
        }

        fn on_skip(&mut self, _state: &Puzzle) {
            self.skipped += 1;
        }

        fn on_stale(&mut self, _node: &SearchNode) {
            self.stale += 1;
        }
    }

    fn one_move_away() -> Puzzle {
        Puzzle::from_rows(&[vec![1, 2, 3], vec![4, 5, 6], vec![7, 0, 8]]).unwrap()
    }

    #[test]
    fn one_move_from_goal_with_manhattan() {
        let goal = Puzzle::goal(3);
        let outcome = search(&one_move_away(), &goal, HeuristicKind::Manhattan).unwrap();

        assert!(outcome.is_solved());
        assert_eq!(outcome.depth(), 1);
        assert_eq!(outcome.final_state, Some(goal));
        assert_eq!(outcome.moves, vec![Move::Right]);
        assert_eq!(outcome.stats.nodes_expanded, 1);
        // root, then its three children
        assert_eq!(outcome.stats.max_queue_size, 3);
    }

    #[test]
    fn already_solved_expands_nothing() {
        for kind in [HeuristicKind::None, HeuristicKind::Misplaced, HeuristicKind::Manhattan] {
            let outcome = solve(&Puzzle::goal(4), kind).unwrap();
            assert!(outcome.is_solved());
            assert!(outcome.moves.is_empty());
            assert_eq!(
                outcome.stats,
                SearchStats {
                    nodes_expanded: 0,
                    max_queue_size: 1,
                    solution_depth: 0,
                }
            );
        }
    }

    #[test]
    fn moves_replay_to_goal() {
        let start = Puzzle::from_rows(&[vec![4, 1, 3], vec![7, 2, 6], vec![0, 5, 8]]).unwrap();
        let outcome = solve(&start, HeuristicKind::Manhattan).unwrap();
        assert!(outcome.is_solved());
        assert_eq!(outcome.moves.len() as u32, outcome.depth());

        let mut replay = start.clone();
        for dir in &outcome.moves {
            assert!(replay.apply_move(*dir));
        }
        assert!(replay.is_goal());
    }

    #[test]
    fn two_by_two_wrong_parity_exhausts_frontier() {
        let start = Puzzle::from_rows(&[vec![2, 1], vec![3, 0]]).unwrap();
        let mut recorder = Recorder::default();
        let outcome = best_first(&start, &Puzzle::goal(2), &Zero, &mut recorder).unwrap();

        assert_eq!(outcome.status, SearchStatus::Unsolvable);
        assert_eq!(outcome.final_state, None);
        assert!(outcome.moves.is_empty());
        // 4!/2 reachable states, each expanded once
        assert_eq!(outcome.stats.nodes_expanded, 12);
        assert_eq!(recorder.expanded.len(), 12);
        assert!(recorder.skipped > 0);
    }

    #[test]
    fn no_state_is_expanded_twice() {
        let start = Puzzle::from_rows(&[vec![8, 6, 7], vec![2, 5, 4], vec![3, 0, 1]]).unwrap();
        let mut recorder = Recorder::default();
        let outcome = best_first(
            &start,
            &Puzzle::goal(3),
            &MisplacedTiles::new(&Puzzle::goal(3)),
            &mut recorder,
        )
        .unwrap();

        assert!(outcome.is_solved());
        assert_eq!(outcome.depth(), 31);
        let unique: HashSet<&Fingerprint> = recorder.expanded.iter().collect();
        assert_eq!(unique.len(), recorder.expanded.len());
        assert_eq!(recorder.expanded.len() as u64, outcome.stats.nodes_expanded);
        // open duplicates are popped after their state closed and dropped
        assert!(recorder.stale > 0);
    }

    #[test]
    fn runs_are_deterministic() {
        let start = Puzzle::from_rows(&[vec![0, 1, 3], vec![4, 2, 5], vec![7, 8, 6]]).unwrap();
        let a = solve(&start, HeuristicKind::Misplaced).unwrap();
        let b = solve(&start, HeuristicKind::Misplaced).unwrap();
        assert_eq!(a.stats, b.stats);
        assert_eq!(a.moves, b.moves);
        assert_eq!(a.depth(), 4);
    }

    #[test]
    fn mismatched_goal_is_rejected() {
        let err = search(&Puzzle::goal(3), &Puzzle::goal(4), HeuristicKind::None).unwrap_err();
        assert_eq!(err, SearchError::DimensionMismatch { initial: 3, goal: 4 });
    }

    #[test]
    fn heuristic_for_another_board_is_rejected() {
        let goal = Puzzle::goal(4);
        let err = best_first(
            &Puzzle::goal(4),
            &goal,
            &ManhattanDistance::new(&Puzzle::goal(3)),
            &mut NoopObserver,
        )
        .unwrap_err();
        assert_eq!(err, SearchError::HeuristicMismatch { heuristic: 3, goal: 4 });

        let err = best_first(
            &Puzzle::goal(3),
            &Puzzle::goal(3),
            &MisplacedTiles::new(&goal),
            &mut NoopObserver,
        )
        .unwrap_err();
        assert_eq!(err, SearchError::HeuristicMismatch { heuristic: 4, goal: 3 });
    }
}
