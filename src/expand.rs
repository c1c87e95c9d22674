//! Neighbor generation.

use crate::puzzle::{Move, Puzzle};

static ORDER: [Move; 4] = Move::ALL;

/// Lazily yields every state one slide away from `state`, in the order
/// up, down, left, right. Moves that would leave the board are skipped.
pub fn neighbors(state: &Puzzle) -> Neighbors<'_> {
    Neighbors {
        state,
        moves: ORDER.iter(),
    }
}

#[derive(Debug, Clone)]
pub struct Neighbors<'a> {
    state: &'a Puzzle,
    moves: std::slice::Iter<'static, Move>,
}

impl Iterator for Neighbors<'_> {
    type Item = (Move, Puzzle);

    fn next(&mut self) -> Option<Self::Item> {
        for &dir in self.moves.by_ref() {
            if let Some(next) = self.state.try_move(dir) {
                return Some((dir, next));
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.moves.len()))
    }
}
