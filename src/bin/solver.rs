use anyhow::{bail, Context, Result};
use clap::Parser;
use puzzle_search::heuristics::HeuristicKind;
use puzzle_search::puzzle::Board;
use puzzle_search::solver::{solve_puzzle, SearchLimits, SearchOutcome, Strategy};
use puzzle_search::utils::{format_moves, parse_tiles, read_board_file};
use puzzle_search::Error;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Path to a board file: one row per line, numbers separated by spaces, 0 for the blank
    board_file: Option<PathBuf>,

    /// Tiles in row-major order instead of a file, e.g. "2,4,3,1,5,6,7,8,0"
    #[clap(short, long, conflicts_with = "board_file")]
    tiles: Option<String>,

    /// Board width
    #[clap(long, default_value_t = 3)]
    width: usize,

    /// Board height
    #[clap(long, default_value_t = 3)]
    height: usize,

    /// Search strategy: breadth-first, depth-first or astar
    #[clap(short, long, default_value = "astar")]
    strategy: Strategy,

    /// Heuristic for A*: misplaced-tiles or manhattan
    #[clap(long, default_value = "manhattan")]
    heuristic: HeuristicKind,

    /// Do not expand nodes at this depth (breadth-first and depth-first only)
    #[clap(short, long)]
    depth_limit: Option<usize>,

    /// Give up after expanding this many nodes
    #[clap(long)]
    max_expansions: Option<usize>,

    /// Give up after this many seconds
    #[clap(long)]
    time_limit: Option<f64>,
}

fn load_board(args: &Args) -> Result<Board> {
    match (&args.board_file, &args.tiles) {
        (Some(path), _) => read_board_file(path, args.width, args.height)
            .with_context(|| format!("Failed to read board from file: {}", path.display())),
        (None, Some(tiles)) => {
            let tiles = parse_tiles(tiles).context("Invalid tile list")?;
            Board::new(args.width, args.height, tiles).context("Invalid board")
        }
        (None, None) => bail!("Provide a board file or --tiles"),
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let board = load_board(&args)?;
    println!("Initial board state:\n{}\n", board);

    let mut limits = SearchLimits::new();
    if let Some(depth) = args.depth_limit {
        limits = limits.with_depth_limit(depth);
    }
    if let Some(expansions) = args.max_expansions {
        limits = limits.with_max_expansions(expansions);
    }
    if let Some(seconds) = args.time_limit {
        let time_limit = Duration::try_from_secs_f64(seconds)
            .with_context(|| format!("Invalid time limit: {}", seconds))?;
        limits = limits.with_time_limit(time_limit);
    }

    println!(
        "Searching with {} ({} heuristic)...\n",
        args.strategy, args.heuristic
    );

    let report = match solve_puzzle(board.clone(), args.strategy, args.heuristic, &limits) {
        Ok(report) => report,
        Err(Error::UnsolvableInstance { inversions }) => {
            println!(
                "This instance cannot be solved ({} inversions). No search was run.",
                inversions
            );
            return Ok(());
        }
        Err(err) => return Err(err.into()),
    };

    match &report.outcome {
        SearchOutcome::Solved(solution) => {
            println!("Solution found:\n");
            println!("Moves ({}):", solution.len());
            if solution.is_empty() {
                println!("  No moves needed.");
            } else {
                println!("  {}", format_moves(&solution.actions));
            }
            println!("Path cost: {}\n", solution.path_cost);
            println!("Final board state:\n{}\n", solution.final_state);
        }
        SearchOutcome::Exhausted => {
            println!("No solution found: the frontier was exhausted.\n");
        }
        SearchOutcome::Cancelled(reason) => {
            println!("Search stopped early: {}.\n", reason);
        }
    }
    println!("Statistics: {}", report.stats);

    Ok(())
}
