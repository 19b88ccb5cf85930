//! # Puzzle Search Library
//!
//! A generic heuristic state-space search engine, plus the sliding-tile puzzle
//! (the 8-puzzle and its larger relatives) as a concrete problem to run it on.
//!
//! It is used by two binaries:
//! - `solver`: Takes one puzzle instance, a strategy and a heuristic, checks that the
//!   instance is solvable, and prints the solution with search statistics.
//! - `strategy_evaluator`: Runs every strategy/heuristic combination over a batch of
//!   seeded, scrambled instances and reports average effort.
//!
//! ## Modules
//! - `problem`: The `Problem` trait describing a state space.
//! - `node`: Search nodes and the `SearchTree` arena that owns them during a run.
//! - `frontier`: FIFO, LIFO and priority (`g + h`) frontiers.
//! - `solver`: Breadth-first, depth-first and A* search, limits, outcomes and stats.
//! - `puzzle`: The sliding-puzzle `Board`, its moves, the solvability check, and the
//!   `SlidingPuzzle` problem.
//! - `heuristics`: The `Heuristic` trait and the misplaced-tiles and Manhattan heuristics.
//! - `utils`: Parsing boards from text and formatting move lists.
//! - `error`: The crate's error type.

pub mod error;
pub mod frontier;
pub mod heuristics;
pub mod node;
pub mod problem;
pub mod puzzle;
pub mod solver;
pub mod timer;
pub mod utils;

pub use error::{Error, Result};
pub use problem::{Cost, Problem};
