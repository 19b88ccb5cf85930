use anyhow::{bail, Result};
use clap::Parser;
use puzzle_search::heuristics::HeuristicKind;
use puzzle_search::puzzle::{Board, MAX_CELLS};
use puzzle_search::solver::{solve_puzzle, SearchLimits, Strategy};
use std::collections::BTreeMap;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Compare search strategies on seeded, scrambled puzzles", long_about = None)]
struct Args {
    /// Number of instances to evaluate
    #[clap(short, long, default_value_t = 20)]
    boards: u64,

    /// Seed of the first instance; instance `i` uses `seed + i`
    #[clap(long, default_value_t = 0)]
    seed: u64,

    /// Random blank moves used to scramble each instance
    #[clap(short, long, default_value_t = 12)]
    scramble: usize,

    /// Board width and height
    #[clap(long, default_value_t = 3)]
    size: usize,

    /// Depth limit for depth-first search
    #[clap(long, default_value_t = 16)]
    dfs_depth: usize,

    /// Expansion budget per run, so slow combinations cannot stall the evaluation
    #[clap(long, default_value_t = 200_000)]
    max_expansions: usize,
}

#[derive(Default)]
struct Tally {
    solved: usize,
    unfinished: usize,
    total_moves: usize,
    total_expanded: usize,
    total_states: usize,
}

/// Rejects board sizes the generators cannot build.
fn validate_size(size: usize) -> Result<()> {
    if size < 2 {
        bail!("Board size must be at least 2, got {}", size);
    }
    if size.checked_mul(size).map_or(true, |cells| cells > MAX_CELLS) {
        bail!("{}x{} boards exceed the {} cell limit", size, size, MAX_CELLS);
    }
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    validate_size(args.size)?;

    // Heuristics only steer A*; the blind strategies run once.
    let configurations = [
        (Strategy::BreadthFirst, HeuristicKind::Manhattan),
        (Strategy::DepthFirst, HeuristicKind::Manhattan),
        (Strategy::AStar, HeuristicKind::MisplacedTiles),
        (Strategy::AStar, HeuristicKind::Manhattan),
    ];
    let label = |strategy: Strategy, heuristic: HeuristicKind| match strategy {
        Strategy::AStar => format!("{}/{}", strategy, heuristic),
        _ => strategy.to_string(),
    };

    let mut tallies: BTreeMap<String, Tally> = BTreeMap::new();

    println!(
        "Evaluating {} boards ({}x{}, {} scramble moves)...",
        args.boards, args.size, args.size, args.scramble
    );

    for board_idx in 0..args.boards {
        let seed = args.seed + board_idx;
        let board = Board::scrambled_with_seed(args.size, args.size, args.scramble, seed);
        println!("\nBoard {} (Seed: {})\n{}", board_idx, seed, board);

        for (strategy, heuristic) in configurations {
            let mut limits = SearchLimits::new().with_max_expansions(args.max_expansions);
            if strategy == Strategy::DepthFirst {
                limits = limits.with_depth_limit(args.dfs_depth);
            }

            let report = solve_puzzle(board.clone(), strategy, heuristic, &limits)?;
            let name = label(strategy, heuristic);
            let tally = tallies.entry(name.clone()).or_default();
            tally.total_expanded += report.stats.nodes_expanded;
            tally.total_states += report.stats.states_visited;

            match report.solution() {
                Some(solution) => {
                    tally.solved += 1;
                    tally.total_moves += solution.len();
                    println!(
                        "  {:<24} moves: {:<4} expanded: {:<8} states: {}",
                        name,
                        solution.len(),
                        report.stats.nodes_expanded,
                        report.stats.states_visited
                    );
                }
                None => {
                    tally.unfinished += 1;
                    println!("  {:<24} no solution ({:?})", name, report.outcome);
                }
            }
        }
    }

    println!("\n--- Evaluation Complete ---");
    println!("Number of boards evaluated: {}", args.boards);
    println!("\n--- Averages (moves over solved runs, effort over all runs) ---");

    for (name, tally) in &tallies {
        if tally.solved == 0 {
            println!("{:<24}: no instance solved", name);
            continue;
        }
        let solved = tally.solved as f64;
        println!(
            "{:<24}: moves = {:.2}, expanded = {:.1}, states = {:.1}, unfinished = {}",
            name,
            tally.total_moves as f64 / solved,
            tally.total_expanded as f64 / (tally.solved + tally.unfinished) as f64,
            tally.total_states as f64 / (tally.solved + tally.unfinished) as f64,
            tally.unfinished
        );
    }

    Ok(())
}
