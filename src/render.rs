//! Terminal output for grids and run reports.

use std::io::{self, Write};
use std::time::Duration;

use crossterm::queue;
use crossterm::style::{style, Print, PrintStyledContent, Stylize};

use crate::puzzle::Puzzle;
use crate::search::SearchOutcome;

/// Prints `puzzle` one row per line. Tiles already on their `goal` cell are
/// green and the blank is dimmed.
pub fn write_grid<W: Write>(out: &mut W, puzzle: &Puzzle, goal: &Puzzle) -> io::Result<()> {
    for (r, row) in puzzle.rows().enumerate() {
        for (c, &value) in row.iter().enumerate() {
            let cell = format!("{:2} ", value);
            if value == 0 {
                queue!(out, PrintStyledContent(style(cell).dark_grey()))?;
            } else if goal.size() == puzzle.size() && goal.get(r, c) == value {
                queue!(out, PrintStyledContent(style(cell).green()))?;
            } else {
                queue!(out, Print(cell))?;
            }
        }
        queue!(out, Print("\n"))?;
    }
    out.flush()
}

pub fn write_report<W: Write>(
    out: &mut W,
    outcome: &SearchOutcome,
    elapsed: Duration,
    show_moves: bool,
) -> io::Result<()> {
    let stats = &outcome.stats;

    match &outcome.final_state {
        Some(state) if outcome.is_solved() => {
            queue!(
                out,
                PrintStyledContent(style("It is the goal state. Puzzle solved!\n").bold())
            )?;
            write_grid(out, state, state)?;
            writeln!(out, "Solution depth is: {}", outcome.depth())?;
            if show_moves && !outcome.moves.is_empty() {
                let moves: Vec<String> = outcome.moves.iter().map(ToString::to_string).collect();
                writeln!(out, "Moves of the blank: {}", moves.join(" "))?;
            }
        }
        _ => {
            queue!(
                out,
                PrintStyledContent(style("Puzzle cannot be solved\n").red().bold())
            )?;
            writeln!(out, "Depth explored is: {}", outcome.depth())?;
        }
    }

    writeln!(out, "Number of nodes expanded is: {}", stats.nodes_expanded)?;
    writeln!(out, "Max queue size is: {}", stats.max_queue_size)?;
    writeln!(out, "Elapsed time is: {:.6} seconds", elapsed.as_secs_f64())?;
    out.flush()
}
