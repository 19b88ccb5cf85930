//! Heuristic estimates of the remaining cost to a goal.
//!
//! A heuristic is any value implementing [`Heuristic`]. Closures of type
//! `Fn(&S) -> Cost` implement it too, so new estimates can be plugged into a problem
//! without touching the search loop. The two sliding-puzzle heuristics here are both
//! admissible; `ManhattanDistance` dominates `MisplacedTiles` and should be preferred.
use crate::error::{Error, Result};
use crate::problem::Cost;
use crate::puzzle::{goal_tile, Board, BLANK};
use std::fmt;
use std::str::FromStr;

/// An estimate of the cost from a state to the nearest goal.
///
/// For A* to return optimal solutions, `estimate` must never exceed the true cost.
pub trait Heuristic<S> {
    /// Estimated remaining cost from `state`.
    fn estimate(&self, state: &S) -> Cost;

    /// Short name used in logs and reports.
    fn name(&self) -> &str {
        "custom"
    }
}

impl<S, F> Heuristic<S> for F
where
    F: Fn(&S) -> Cost,
{
    fn estimate(&self, state: &S) -> Cost {
        self(state)
    }
}

/// Number of non-blank tiles that are not on their goal cell.
#[derive(Clone, Copy, Debug, Default)]
pub struct MisplacedTiles;

impl Heuristic<Board> for MisplacedTiles {
    fn estimate(&self, board: &Board) -> Cost {
        let cells = board.tiles().len();
        board
            .tiles()
            .iter()
            .enumerate()
            .filter(|&(i, &tile)| tile != BLANK && tile != goal_tile(i, cells))
            .count() as Cost
    }

    fn name(&self) -> &str {
        "misplaced-tiles"
    }
}

/// Sum over non-blank tiles of the row and column distance to their goal cell.
#[derive(Clone, Copy, Debug, Default)]
pub struct ManhattanDistance;

impl Heuristic<Board> for ManhattanDistance {
    fn estimate(&self, board: &Board) -> Cost {
        let width = board.width();
        board
            .tiles()
            .iter()
            .enumerate()
            .filter(|&(_, &tile)| tile != BLANK)
            .map(|(i, &tile)| {
                // Tile `t` belongs at index `t - 1`.
                let goal = tile as usize - 1;
                let (row, col) = (i / width, i % width);
                let (goal_row, goal_col) = (goal / width, goal % width);
                (row.abs_diff(goal_row) + col.abs_diff(goal_col)) as Cost
            })
            .sum()
    }

    fn name(&self) -> &str {
        "manhattan"
    }
}

/// Selector for the built-in sliding-puzzle heuristics.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HeuristicKind {
    MisplacedTiles,
    Manhattan,
}

impl HeuristicKind {
    pub const ALL: [HeuristicKind; 2] = [HeuristicKind::MisplacedTiles, HeuristicKind::Manhattan];

    /// Builds the heuristic value this selector names.
    pub fn build(self) -> Box<dyn Heuristic<Board>> {
        match self {
            HeuristicKind::MisplacedTiles => Box::new(MisplacedTiles),
            HeuristicKind::Manhattan => Box::new(ManhattanDistance),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            HeuristicKind::MisplacedTiles => "misplaced-tiles",
            HeuristicKind::Manhattan => "manhattan",
        }
    }
}

impl fmt::Display for HeuristicKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HeuristicKind {
    type Err = Error;

    /// Parses a heuristic name. Unknown names are a configuration error; there is
    /// no fallback heuristic.
    ///
    /// # Examples
    /// ```
    /// use puzzle_search::heuristics::HeuristicKind;
    /// assert_eq!("manhattan".parse::<HeuristicKind>().unwrap(), HeuristicKind::Manhattan);
    /// assert!("euclidean".parse::<HeuristicKind>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "misplaced-tiles" | "misplaced" | "tile-switches-remaining" => {
                Ok(HeuristicKind::MisplacedTiles)
            }
            "manhattan" | "manhattan-distance" | "mahattan-distance" => {
                Ok(HeuristicKind::Manhattan)
            }
            _ => Err(Error::configuration(format!(
                "unknown heuristic '{}' (expected one of: misplaced-tiles, manhattan)",
                s
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::puzzle::Move;
    use std::collections::{HashMap, VecDeque};

    fn eight(tiles: [u8; 9]) -> Board {
        Board::eight(tiles).unwrap()
    }

    /// True distance to the goal of every board within `max_depth` moves of it.
    fn distances_from_goal(max_depth: usize) -> HashMap<Board, usize> {
        let goal = Board::goal(3, 3);
        let mut distances = HashMap::new();
        distances.insert(goal.clone(), 0);
        let mut queue = VecDeque::from([goal]);
        while let Some(board) = queue.pop_front() {
            let depth = distances[&board];
            if depth == max_depth {
                continue;
            }
            for mv in board.legal_moves() {
                let next = board.apply(mv).unwrap();
                if !distances.contains_key(&next) {
                    distances.insert(next.clone(), depth + 1);
                    queue.push_back(next);
                }
            }
        }
        distances
    }

    #[test]
    fn test_goal_estimates_zero() {
        let goal = Board::goal(3, 3);
        assert_eq!(MisplacedTiles.estimate(&goal), 0);
        assert_eq!(ManhattanDistance.estimate(&goal), 0);
        assert_eq!(ManhattanDistance.estimate(&Board::goal(4, 4)), 0);
    }

    #[test]
    fn test_known_values() {
        let board = eight([1, 2, 0, 3, 4, 5, 6, 7, 8]);
        // Every tile from 3 to 8 is one cell too far along.
        assert_eq!(MisplacedTiles.estimate(&board), 6);
        // Tiles 3, 6 wrap to the previous row (3 each); 4, 5, 7, 8 are one step off.
        assert_eq!(ManhattanDistance.estimate(&board), 10);

        let reversed = eight([8, 7, 6, 5, 4, 3, 2, 1, 0]);
        assert_eq!(MisplacedTiles.estimate(&reversed), 8);
        assert_eq!(ManhattanDistance.estimate(&reversed), 16);
    }

    #[test]
    fn test_misplaced_never_exceeds_manhattan() {
        for seed in 0..200 {
            let board = Board::random_solvable_with_seed(3, 3, seed);
            assert!(MisplacedTiles.estimate(&board) <= ManhattanDistance.estimate(&board));
        }
    }

    #[test]
    fn test_heuristics_are_admissible() {
        let distances = distances_from_goal(16);
        assert!(distances.len() > 10_000);
        for (board, &distance) in &distances {
            let distance = distance as Cost;
            assert!(MisplacedTiles.estimate(board) <= distance, "misplaced overestimates {:?}", board);
            assert!(ManhattanDistance.estimate(board) <= distance, "manhattan overestimates {:?}", board);
        }
    }

    #[test]
    fn test_manhattan_changes_by_one_per_move() {
        let board = eight([8, 6, 7, 2, 5, 4, 3, 0, 1]);
        let before = ManhattanDistance.estimate(&board) as i64;
        for mv in Move::ALL {
            if let Some(next) = board.apply(mv) {
                let after = ManhattanDistance.estimate(&next) as i64;
                assert_eq!((after - before).abs(), 1);
            }
        }
    }

    #[test]
    fn test_closure_heuristic() {
        let blank_row = |board: &Board| board.blank_position().0 as Cost;
        assert_eq!(blank_row.estimate(&eight([1, 2, 0, 3, 4, 5, 6, 7, 8])), 0);
        assert_eq!(Heuristic::<Board>::name(&blank_row), "custom");

        let boxed: Box<dyn Heuristic<Board>> = Box::new(blank_row);
        assert_eq!(boxed.estimate(&Board::goal(3, 3)), 2);
    }

    #[test]
    fn test_parse_heuristic_kind() {
        assert_eq!(
            "misplaced-tiles".parse::<HeuristicKind>().unwrap(),
            HeuristicKind::MisplacedTiles
        );
        assert_eq!(
            "tile_switches_remaining".parse::<HeuristicKind>().unwrap(),
            HeuristicKind::MisplacedTiles
        );
        assert_eq!(
            "Manhattan".parse::<HeuristicKind>().unwrap(),
            HeuristicKind::Manhattan
        );
        assert_eq!(
            "mahattan_distance".parse::<HeuristicKind>().unwrap(),
            HeuristicKind::Manhattan
        );

        let err = "euclidean".parse::<HeuristicKind>().unwrap_err();
        assert!(matches!(err, Error::Configuration { .. }));
        assert!(err.to_string().contains("euclidean"));
    }

    #[test]
    fn test_kind_builds_named_heuristic() {
        for kind in HeuristicKind::ALL {
            let heuristic = kind.build();
            assert_eq!(heuristic.name(), kind.as_str());
            assert_eq!(kind.to_string().parse::<HeuristicKind>().unwrap(), kind);
        }
    }
}
