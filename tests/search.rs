use std::collections::{HashMap, HashSet, VecDeque};

use rand::{rngs::StdRng, SeedableRng};
use slider_search::expand::neighbors;
use slider_search::{
    best_first, search, solve, Heuristic, HeuristicKind, ManhattanDistance, MisplacedTiles,
    NoopObserver, Puzzle, SearchStatus, Zero,
};

const KINDS: [HeuristicKind; 3] = [
    HeuristicKind::None,
    HeuristicKind::Misplaced,
    HeuristicKind::Manhattan,
];

/// Exact distance to the goal of every state within `limit` moves of it.
fn distances_from_goal(size: usize, limit: u32) -> HashMap<Puzzle, u32> {
    let goal = Puzzle::goal(size);
    let mut dist = HashMap::from([(goal.clone(), 0)]);
    let mut queue = VecDeque::from([goal]);

    while let Some(state) = queue.pop_front() {
        let d = dist[&state];
        if d == limit {
            continue;
        }
        for (_, next) in neighbors(&state) {
            if !dist.contains_key(&next) {
                dist.insert(next.clone(), d + 1);
                queue.push_back(next);
            }
        }
    }
    dist
}

#[test]
fn end_to_end_one_move() {
    let start = Puzzle::from_rows(&[vec![1, 2, 3], vec![4, 5, 6], vec![7, 0, 8]]).unwrap();
    let goal = Puzzle::goal(3);
    let outcome = search(&start, &goal, HeuristicKind::Manhattan).unwrap();

    assert!(outcome.is_solved());
    assert_eq!(outcome.depth(), 1);
    assert_eq!(outcome.final_state.as_ref(), Some(&goal));
}

#[test]
fn every_method_matches_breadth_first_depth() {
    let dist = distances_from_goal(3, 6);
    let mut states: Vec<(&Puzzle, &u32)> = dist.iter().collect();
    states.sort_by(|a, b| a.0.cells().cmp(b.0.cells()));

    for (state, &expected) in states.into_iter().step_by(7) {
        for kind in KINDS {
            let outcome = solve(state, kind).unwrap();
            assert!(outcome.is_solved(), "{kind} failed on\n{state}");
            assert_eq!(outcome.depth(), expected, "{kind} on\n{state}");
            assert_eq!(outcome.moves.len() as u32, expected);
        }
    }
}

#[test]
fn heuristics_are_ordered_and_admissible() {
    let goal = Puzzle::goal(3);
    let misplaced = MisplacedTiles::new(&goal);
    let manhattan = ManhattanDistance::new(&goal);

    for (state, &d) in &distances_from_goal(3, 12) {
        let m = misplaced.estimate(state);
        let md = manhattan.estimate(state);
        assert_eq!(Zero.estimate(state), 0);
        assert!(m <= md, "misplaced {m} > manhattan {md} for\n{state}");
        assert!(md <= d, "manhattan {md} > true distance {d} for\n{state}");
    }
}

#[test]
fn informed_search_expands_fewer_nodes_on_average() {
    let mut rng = StdRng::seed_from_u64(2024);
    let mut totals = [0u64; 3];

    for _ in 0..12 {
        let start = Puzzle::scrambled(3, 16, &mut rng);
        let mut depth = None;
        for (i, kind) in KINDS.into_iter().enumerate() {
            let outcome = solve(&start, kind).unwrap();
            assert!(outcome.is_solved());
            let d = *depth.get_or_insert(outcome.depth());
            assert_eq!(outcome.depth(), d, "{kind} disagrees on depth");
            totals[i] += outcome.stats.nodes_expanded;
        }
    }

    let [zero, misplaced, manhattan] = totals;
    assert!(manhattan <= misplaced, "{manhattan} > {misplaced}");
    assert!(misplaced <= zero, "{misplaced} > {zero}");
}

#[test]
fn fifteen_puzzle_solves_optimally() {
    let mut rng = StdRng::seed_from_u64(15);
    for _ in 0..5 {
        let start = Puzzle::scrambled(4, 14, &mut rng);
        let manhattan = solve(&start, HeuristicKind::Manhattan).unwrap();
        let misplaced = solve(&start, HeuristicKind::Misplaced).unwrap();
        assert!(manhattan.is_solved());
        assert!(manhattan.depth() <= 14);
        assert_eq!(manhattan.depth(), misplaced.depth());
    }
}

#[test]
fn wrong_parity_exhausts_every_reachable_state() {
    let start = Puzzle::from_rows(&[vec![1, 2, 3], vec![4, 5, 6], vec![8, 7, 0]]).unwrap();
    let goal = Puzzle::goal(3);
    let outcome = best_first(&start, &goal, &ManhattanDistance::new(&goal), &mut NoopObserver)
        .unwrap();

    assert_eq!(outcome.status, SearchStatus::Unsolvable);
    assert!(outcome.final_state.is_none());
    // 9!/2 states share the start's parity class
    assert_eq!(outcome.stats.nodes_expanded, 181_440);
}

#[test]
fn separate_runs_do_not_share_counters() {
    let start = Puzzle::from_rows(&[vec![1, 2, 3], vec![4, 0, 6], vec![7, 5, 8]]).unwrap();
    let first = solve(&start, HeuristicKind::None).unwrap();
    let second = solve(&start, HeuristicKind::None).unwrap();
    assert_eq!(first.stats, second.stats);
    assert_eq!(first.depth(), 2);
}

#[test]
fn uniform_cost_never_expands_a_state_twice() {
    #[derive(Default)]
    struct Seen(HashSet<Puzzle>, bool);

    impl slider_search::SearchObserver for Seen {
        fn on_expand(&mut self, node: &slider_search::node::SearchNode) {
            if !self.0.insert(node.state.clone()) {
                self.1 = true;
            }
        }
    }

    let mut rng = StdRng::seed_from_u64(99);
    let start = Puzzle::scrambled(3, 24, &mut rng);
    let mut seen = Seen::default();
    let outcome = best_first(&start, &Puzzle::goal(3), &Zero, &mut seen).unwrap();

    assert!(outcome.is_solved());
    assert!(!seen.1, "a state was expanded twice");
    assert_eq!(seen.0.len() as u64, outcome.stats.nodes_expanded);
}
