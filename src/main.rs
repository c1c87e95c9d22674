use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;
use rand::{rngs::StdRng, thread_rng, SeedableRng};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use slider_search::input::{self, format_puzzle};
use slider_search::render::{write_grid, write_report};
use slider_search::{search, HeuristicKind, InputError, Puzzle};

/// Solve n×n sliding-tile puzzles with uniform-cost or A* search.
#[derive(Debug, Parser)]
#[command(name = "slider-search", version)]
struct Args {
    /// Number of tiles, n² - 1 (8, 15, 24, ...)
    #[arg(short, long)]
    tiles: Option<usize>,

    /// Puzzle rows: numbers separated by spaces, rows by '||'
    #[arg(short, long)]
    puzzle: Option<String>,

    /// Search method
    #[arg(short, long, value_enum)]
    method: Option<HeuristicKind>,

    /// Solve a random solvable puzzle instead of reading one
    #[arg(long, conflicts_with = "puzzle")]
    random: bool,

    /// Seed for --random
    #[arg(long, requires = "random")]
    seed: Option<u64>,

    /// Print the blank moves of the solution
    #[arg(long)]
    moves: bool,

    /// Log every node the search pops
    #[arg(long)]
    trace: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let filter = if args.trace {
        EnvFilter::new("slider_search=trace")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    let tiles = match args.tiles {
        Some(tiles) => tiles,
        None => prompt(
            &mut lines,
            "What puzzle would you like to solve? Enter the number of tiles (eg 8 for 8-puzzle): ",
            input::parse_tile_count,
        )?,
    };
    let size = input::dimension_from_tile_count(tiles)?;

    let initial = if args.random {
        match args.seed {
            Some(seed) => Puzzle::shuffled(size, &mut StdRng::seed_from_u64(seed)),
            None => Puzzle::shuffled(size, &mut thread_rng()),
        }
    } else if let Some(text) = &args.puzzle {
        input::parse_puzzle(text, size)?
    } else {
        let question = format!(
            "Please enter puzzle for a {size}x{size} grid. Use spaces to separate numbers and '||' to separate rows. (eg. '{}'): ",
            input::sample_input(size)
        );
        prompt(&mut lines, &question, |text| input::parse_puzzle(text, size))?
    };

    let method = match args.method {
        Some(method) => method,
        None => prompt(
            &mut lines,
            "Which search method would you like to use? Please enter 1 for Uniform Cost Search; 2 for A* with Misplaced Tile Heuristic; 3 for A* with Manhattan Distance Heuristic: ",
            input::parse_method,
        )?,
    };

    let goal = Puzzle::goal(size);
    let mut stdout = io::stdout().lock();

    writeln!(stdout, "The puzzle you entered is: ")?;
    write_grid(&mut stdout, &initial, &goal)?;
    writeln!(stdout, "{method}")?;
    info!(puzzle = %format_puzzle(&initial), solvable = initial.is_solvable(), "starting search");

    let start = Instant::now();
    let outcome = search(&initial, &goal, method)?;
    let elapsed = start.elapsed();

    write_report(&mut stdout, &outcome, elapsed, args.moves)?;
    Ok(())
}

/// Asks `question` until `parse` accepts the answer.
fn prompt<T, L, F>(lines: &mut L, question: &str, parse: F) -> io::Result<T>
where
    L: Iterator<Item = io::Result<String>>,
    F: Fn(&str) -> Result<T, InputError>,
{
    let mut stdout = io::stdout();
    loop {
        write!(stdout, "{question}")?;
        stdout.flush()?;

        let Some(line) = lines.next() else {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed before a valid answer was given",
            ));
        };
        match parse(&line?) {
            Ok(value) => return Ok(value),
            Err(e) => println!("Invalid input: {e}. Please try again."),
        }
    }
}
