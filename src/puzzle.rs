use rand::{seq::SliceRandom, Rng};
use std::borrow::Borrow;
use std::fmt;

use crate::error::PuzzleError;

/// Direction the blank travels in a single slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    Up,
    Down,
    Left,
    Right,
}

impl Move {
    /// Expansion order.
    pub const ALL: [Move; 4] = [Move::Up, Move::Down, Move::Left, Move::Right];

    pub fn as_offset(&self) -> (isize, isize) {
        match self {
            Move::Up => (-1, 0),
            Move::Down => (1, 0),
            Move::Left => (0, -1),
            Move::Right => (0, 1),
        }
    }

    pub fn opposite(&self) -> Self {
        match self {
            Move::Up => Move::Down,
            Move::Down => Move::Up,
            Move::Left => Move::Right,
            Move::Right => Move::Left,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match *self {
            Move::Up => "Up",
            Move::Down => "Down",
            Move::Left => "Left",
            Move::Right => "Right",
        };
        write!(f, "{}", s)
    }
}

/// Canonical flat encoding of a puzzle state, used for closed-set membership.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Fingerprint(Box<[u32]>);

impl Fingerprint {
    pub fn as_slice(&self) -> &[u32] {
        &self.0
    }
}

/// Lets a set of fingerprints be probed with a state's cells directly.
impl Borrow<[u32]> for Fingerprint {
    fn borrow(&self) -> &[u32] {
        &self.0
    }
}

/// An n×n sliding-tile grid. `0` is the blank.
///
/// Cells are stored row-major. A `Puzzle` always holds every value in
/// `0..n²` exactly once; [`Puzzle::from_rows`] is the checked entry point
/// for caller data.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Puzzle {
    size: usize,
    cells: Vec<u32>,
    blank: usize,
}

impl Puzzle {
    /// The solved configuration: cell (i, j) holds `(i·n + j + 1) mod n²`.
    pub fn goal(size: usize) -> Self {
        let area = size * size;
        let cells = (0..area).map(|i| ((i + 1) % area) as u32).collect();

        Self {
            size,
            cells,
            blank: area.saturating_sub(1),
        }
    }

    pub fn from_rows(rows: &[Vec<u32>]) -> Result<Self, PuzzleError> {
        let size = rows.len();
        if size < 2 {
            return Err(PuzzleError::Dimension(size));
        }

        let area = size * size;
        let mut seen = vec![false; area];
        let mut cells = Vec::with_capacity(area);
        // n² distinct in-range values always include the blank
        let mut blank = 0;

        for (i, row) in rows.iter().enumerate() {
            if row.len() != size {
                return Err(PuzzleError::RowLength {
                    row: i,
                    expected: size,
                    found: row.len(),
                });
            }
            for &value in row {
                let slot = seen
                    .get_mut(value as usize)
                    .ok_or(PuzzleError::OutOfRange { value, size })?;
                if *slot {
                    return Err(PuzzleError::Duplicate(value));
                }
                *slot = true;
                if value == 0 {
                    blank = cells.len();
                }
                cells.push(value);
            }
        }

        Ok(Self { size, cells, blank })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn cells(&self) -> &[u32] {
        &self.cells
    }

    pub fn get(&self, row: usize, col: usize) -> u32 {
        self.cells[row * self.size + col]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[u32]> {
        self.cells.chunks(self.size)
    }

    pub fn to_rows(&self) -> Vec<Vec<u32>> {
        self.rows().map(<[u32]>::to_vec).collect()
    }

    /// `(row, col)` of the blank.
    pub fn blank_position(&self) -> (usize, usize) {
        (self.blank / self.size, self.blank % self.size)
    }

    pub fn fingerprint(&self) -> Fingerprint {
        Fingerprint(self.cells.clone().into_boxed_slice())
    }

    pub fn is_goal(&self) -> bool {
        let area = self.cells.len();
        self.cells
            .iter()
            .enumerate()
            .all(|(i, &value)| value as usize == (i + 1) % area)
    }

    /// Slides the blank one step. Returns `false` and leaves the grid
    /// untouched when the move would leave the board.
    pub fn apply_move(&mut self, movement: Move) -> bool {
        let (dr, dc) = movement.as_offset();
        let (row, col) = self.blank_position();

        let new_row = row as isize + dr;
        let new_col = col as isize + dc;
        let bound = self.size as isize;

        if new_row >= 0 && new_row < bound && new_col >= 0 && new_col < bound {
            let target = new_row as usize * self.size + new_col as usize;
            self.cells.swap(self.blank, target);
            self.blank = target;
            true
        } else {
            false
        }
    }

    pub fn try_move(&self, movement: Move) -> Option<Self> {
        let mut next = self.clone();
        if next.apply_move(movement) {
            Some(next)
        } else {
            None
        }
    }

    /// Whether the goal is reachable from this state, by permutation parity.
    pub fn is_solvable(&self) -> bool {
        let inversions = Self::count_inversions(&self.cells);
        let (empty_row, _) = self.blank_position();

        if self.size % 2 == 1 {
            inversions % 2 == 0
        } else {
            // goal has zero inversions with the blank on row n-1 (odd)
            (inversions + empty_row) % 2 == 1
        }
    }

    fn count_inversions(cells: &[u32]) -> usize {
        cells
            .iter()
            .enumerate()
            .filter(|&(_, &val)| val != 0)
            .map(|(i, &val)| {
                cells[i + 1..]
                    .iter()
                    .filter(|&&next| next != 0 && next < val)
                    .count()
            })
            .sum()
    }

    /// A uniformly shuffled, solvable instance.
    pub fn shuffled<R: Rng + ?Sized>(size: usize, rng: &mut R) -> Self {
        let mut puzzle = Self::goal(size);

        loop {
            puzzle.cells.shuffle(rng);
            if let Some(blank) = puzzle.cells.iter().position(|&v| v == 0) {
                puzzle.blank = blank;
            }
            if puzzle.is_solvable() {
                return puzzle;
            }
        }
    }

    /// A random walk of `steps` slides away from the goal. The optimal
    /// solution is at most `steps` moves long.
    pub fn scrambled<R: Rng + ?Sized>(size: usize, steps: usize, rng: &mut R) -> Self {
        let mut puzzle = Self::goal(size);
        let mut last: Option<Move> = None;
        let mut taken = 0;
        if size < 2 {
            return puzzle;
        }

        while taken < steps {
            let Some(&dir) = Move::ALL.choose(rng) else {
                break;
            };
            if last == Some(dir.opposite()) {
                continue;
            }
            if puzzle.apply_move(dir) {
                last = Some(dir);
                taken += 1;
            }
        }
        puzzle
    }
}

impl fmt::Display for Puzzle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for &val in row {
                write!(f, "{:2} ", val)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
