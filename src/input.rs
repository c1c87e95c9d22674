//! Parsing and validation of user-supplied puzzle descriptions.
//!
//! Puzzles are written one row at a time, numbers separated by whitespace
//! and rows separated by `||`, e.g. `1 2 3||4 5 6||7 0 8`.

use clap::ValueEnum;

use crate::error::{InputError, PuzzleError};
use crate::heuristic::HeuristicKind;
use crate::puzzle::Puzzle;

pub const ROW_SEPARATOR: &str = "||";

/// Board dimension for an `n² - 1` tile puzzle (8 → 3, 15 → 4, ...).
pub fn dimension_from_tile_count(tiles: usize) -> Result<usize, InputError> {
    let cells = tiles.checked_add(1).ok_or(InputError::TileCount(tiles))?;
    // the float root is within one of the exact root
    let root = (cells as f64).sqrt() as usize;
    match (root.saturating_sub(1)..=root.saturating_add(1))
        .find(|n| n.checked_mul(*n) == Some(cells))
    {
        Some(n) if n >= 2 => Ok(n),
        _ => Err(InputError::TileCount(tiles)),
    }
}

pub fn parse_tile_count(text: &str) -> Result<usize, InputError> {
    let text = text.trim();
    let tiles = text
        .parse::<usize>()
        .map_err(|_| InputError::NotANumber(text.to_string()))?;
    dimension_from_tile_count(tiles)?;
    Ok(tiles)
}

/// Accepts a method name (`none`, `misplaced`, `manhattan`) or its menu
/// number (1, 2, 3).
pub fn parse_method(text: &str) -> Result<HeuristicKind, InputError> {
    let text = text.trim();
    HeuristicKind::from_str(text, true).map_err(|_| InputError::Method(text.to_string()))
}

pub fn parse_puzzle(text: &str, size: usize) -> Result<Puzzle, InputError> {
    let rows = text
        .split(ROW_SEPARATOR)
        .map(|row| {
            row.split_whitespace()
                .map(|num| {
                    num.parse::<u32>()
                        .map_err(|_| InputError::NotANumber(num.to_string()))
                })
                .collect::<Result<Vec<u32>, _>>()
        })
        .collect::<Result<Vec<_>, _>>()?;

    if rows.len() != size {
        return Err(PuzzleError::RowCount {
            expected: size,
            found: rows.len(),
        }
        .into());
    }
    Ok(Puzzle::from_rows(&rows)?)
}

/// Writes a puzzle in the same syntax [`parse_puzzle`] reads.
pub fn format_puzzle(puzzle: &Puzzle) -> String {
    join_rows(puzzle.rows())
}

/// Example input for the prompt: the goal with its last two tiles swapped.
pub fn sample_input(size: usize) -> String {
    let mut rows = Puzzle::goal(size).to_rows();
    if let Some(last) = rows.last_mut().filter(|_| size >= 2) {
        last.swap(size - 1, size - 2);
    }
    join_rows(rows.iter().map(Vec::as_slice))
}

fn join_rows<'a>(rows: impl Iterator<Item = &'a [u32]>) -> String {
    rows.map(|row| {
        row.iter()
            .map(u32::to_string)
            .collect::<Vec<_>>()
            .join(" ")
    })
    .collect::<Vec<_>>()
    .join(ROW_SEPARATOR)
}
