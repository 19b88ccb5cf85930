//! The sliding-tile puzzle as a searchable [`Problem`].
//!
//! This module defines:
//! - `Move`: a direction the blank can travel in.
//! - `Board`: an immutable `width x height` arrangement of tiles with exactly one blank,
//!   including move generation and the solvability (permutation parity) check.
//! - `SlidingPuzzle`: a `Problem` over boards, with the heuristic injected at construction.
//!
//! The 8-puzzle is the 3x3 case; its goal arrangement is `1 2 3 / 4 5 6 / 7 8 _`.
use crate::error::{Error, Result};
use crate::heuristics::Heuristic;
use crate::problem::{Cost, Problem};
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::fmt;

/// Label of the blank cell.
pub const BLANK: u8 = 0;

/// Board width and height of the 8-puzzle.
pub const EIGHT_PUZZLE_SIZE: usize = 3;

/// Largest number of cells a board may have, since tiles are stored as `u8`.
pub const MAX_CELLS: usize = u8::MAX as usize + 1;

/// A direction the blank moves in. Moving the blank up slides the tile above it down.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Move {
    Up,
    Down,
    Left,
    Right,
}

impl Move {
    /// All moves, in the order `Board::legal_moves` reports them.
    pub const ALL: [Move; 4] = [Move::Up, Move::Down, Move::Left, Move::Right];

    /// The move that undoes this one.
    ///
    /// # Examples
    /// ```
    /// use puzzle_search::puzzle::Move;
    /// assert_eq!(Move::Up.inverse(), Move::Down);
    /// assert_eq!(Move::Left.inverse().inverse(), Move::Left);
    /// ```
    pub fn inverse(self) -> Move {
        match self {
            Move::Up => Move::Down,
            Move::Down => Move::Up,
            Move::Left => Move::Right,
            Move::Right => Move::Left,
        }
    }

    /// Single-letter notation: `U`, `D`, `L` or `R`.
    pub fn to_char(self) -> char {
        match self {
            Move::Up => 'U',
            Move::Down => 'D',
            Move::Left => 'L',
            Move::Right => 'R',
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Move::Up => "Up",
            Move::Down => "Down",
            Move::Left => "Left",
            Move::Right => "Right",
        };
        f.write_str(name)
    }
}

/// A sliding-puzzle configuration, stored row-major.
///
/// Boards are values: every transition returns a new board, and the invariant that
/// the tiles form a permutation of `0..width * height` is checked once at construction.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    width: usize,
    height: usize,
    tiles: Vec<u8>,
    blank: usize,
}

impl Board {
    /// Creates a board from row-major tiles.
    ///
    /// # Errors
    /// Returns [`Error::InvalidBoard`] if either dimension is zero, the board has more
    /// than [`MAX_CELLS`] cells, `tiles.len() != width * height`, or the tiles are not
    /// a permutation of `0..width * height`.
    ///
    /// # Examples
    /// ```
    /// use puzzle_search::puzzle::Board;
    /// let board = Board::new(2, 2, vec![1, 2, 3, 0]).unwrap();
    /// assert!(board.is_goal());
    /// assert!(Board::new(2, 2, vec![1, 1, 3, 0]).is_err());
    /// ```
    pub fn new(width: usize, height: usize, tiles: Vec<u8>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::invalid_board(format!(
                "dimensions must be positive, got {}x{}",
                width, height
            )));
        }
        let cells = match width.checked_mul(height) {
            Some(cells) if cells <= MAX_CELLS => cells,
            _ => {
                return Err(Error::invalid_board(format!(
                    "{}x{} board is too large, at most {} cells are supported",
                    width, height, MAX_CELLS
                )))
            }
        };
        if tiles.len() != cells {
            return Err(Error::invalid_board(format!(
                "expected {} tiles for a {}x{} board, found {}",
                cells,
                width,
                height,
                tiles.len()
            )));
        }

        let mut seen = vec![false; cells];
        for &tile in &tiles {
            let label = tile as usize;
            if label >= cells {
                return Err(Error::invalid_board(format!(
                    "tile {} out of range 0..{}",
                    tile, cells
                )));
            }
            if seen[label] {
                return Err(Error::invalid_board(format!("tile {} appears twice", tile)));
            }
            seen[label] = true;
        }

        // Every label is in range and none repeats, so the blank is present.
        let blank = tiles.iter().position(|&t| t == BLANK).unwrap_or_default();
        Ok(Board {
            width,
            height,
            tiles,
            blank,
        })
    }

    /// Creates a 3x3 board.
    ///
    /// # Errors
    /// Returns [`Error::InvalidBoard`] unless `tiles` is a permutation of `0..9`.
    pub fn eight(tiles: [u8; 9]) -> Result<Self> {
        Board::new(EIGHT_PUZZLE_SIZE, EIGHT_PUZZLE_SIZE, tiles.to_vec())
    }

    /// The solved arrangement `1, 2, ..., n - 1, 0`.
    ///
    /// # Panics
    /// Panics if either dimension is zero or the board exceeds [`MAX_CELLS`] cells.
    pub fn goal(width: usize, height: usize) -> Self {
        let cells = width.checked_mul(height).unwrap_or(0);
        assert!(cells > 0 && cells <= MAX_CELLS, "unsupported board size");
        let tiles = (0..cells).map(|i| goal_tile(i, cells)).collect();
        Board {
            width,
            height,
            tiles,
            blank: cells - 1,
        }
    }

    /// A uniformly shuffled board that is guaranteed to be solvable.
    ///
    /// The same seed always produces the same board. If the shuffle lands on the
    /// wrong parity class, the first two non-blank tiles are swapped to fix it. On a
    /// single row or column only the blank position is random.
    ///
    /// # Panics
    /// Panics under the same conditions as [`Board::goal`].
    pub fn random_solvable_with_seed(width: usize, height: usize, seed: u64) -> Self {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut board = Board::goal(width, height);
        board.tiles.shuffle(&mut rng);
        board.blank = board
            .tiles
            .iter()
            .position(|&t| t == BLANK)
            .unwrap_or_default();

        if board.is_solvable() {
            return board;
        }
        if board.is_thin() {
            let mut ordered: Vec<u8> = board
                .tiles
                .iter()
                .copied()
                .filter(|&t| t != BLANK)
                .collect();
            ordered.sort_unstable();
            let blank = board.blank;
            let mut ordered = ordered.into_iter();
            for (index, tile) in board.tiles.iter_mut().enumerate() {
                if index != blank {
                    *tile = ordered.next().unwrap_or(BLANK);
                }
            }
        } else {
            // At least three tiles besides the blank on a 2x2 or larger board.
            let mut non_blank = (0..board.tiles.len()).filter(|&i| i != board.blank);
            if let (Some(a), Some(b)) = (non_blank.next(), non_blank.next()) {
                board.tiles.swap(a, b);
            }
        }
        board
    }

    /// The goal board scrambled by `moves` random blank moves.
    ///
    /// The walk never immediately undoes its previous move, so the result tends to
    /// lie close to `moves` steps from the goal. Scrambled boards are always solvable.
    pub fn scrambled_with_seed(width: usize, height: usize, moves: usize, seed: u64) -> Self {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut board = Board::goal(width, height);
        let mut last: Option<Move> = None;

        for _ in 0..moves {
            let candidates: Vec<Move> = board
                .legal_moves()
                .into_iter()
                .filter(|mv| last.map_or(true, |prev| *mv != prev.inverse()))
                .collect();
            let Some(&mv) = candidates.choose(&mut rng) else {
                break;
            };
            if let Some(next) = board.apply(mv) {
                board = next;
                last = Some(mv);
            }
        }
        board
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Row-major tiles.
    pub fn tiles(&self) -> &[u8] {
        &self.tiles
    }

    /// Returns the tile at row `r`, column `c`.
    ///
    /// # Panics
    /// Panics if `r` or `c` is outside the board.
    pub fn get_tile(&self, r: usize, c: usize) -> u8 {
        assert!(r < self.height && c < self.width, "cell out of bounds");
        self.tiles[r * self.width + c]
    }

    /// Row and column of the blank.
    pub fn blank_position(&self) -> (usize, usize) {
        (self.blank / self.width, self.blank % self.width)
    }

    /// Moves that keep the blank on the board, in the order Up, Down, Left, Right.
    pub fn legal_moves(&self) -> Vec<Move> {
        Move::ALL
            .into_iter()
            .filter(|&mv| self.target_cell(mv).is_some())
            .collect()
    }

    /// Whether `mv` keeps the blank on the board.
    pub fn is_legal(&self, mv: Move) -> bool {
        self.target_cell(mv).is_some()
    }

    /// Index of the cell the blank would move into, or `None` if that leaves the board.
    fn target_cell(&self, mv: Move) -> Option<usize> {
        let (r, c) = self.blank_position();
        let (r, c) = match mv {
            Move::Up if r > 0 => (r - 1, c),
            Move::Down if r + 1 < self.height => (r + 1, c),
            Move::Left if c > 0 => (r, c - 1),
            Move::Right if c + 1 < self.width => (r, c + 1),
            _ => return None,
        };
        Some(r * self.width + c)
    }

    /// Returns the board after swapping the blank with the tile in direction `mv`,
    /// or `None` if the move would take the blank off the board.
    ///
    /// # Examples
    /// ```
    /// use puzzle_search::puzzle::{Board, Move};
    /// let board = Board::eight([1, 2, 3, 4, 5, 6, 7, 0, 8]).unwrap();
    /// assert!(board.apply(Move::Down).is_none());
    /// assert!(board.apply(Move::Right).unwrap().is_goal());
    /// ```
    pub fn apply(&self, mv: Move) -> Option<Board> {
        let target = self.target_cell(mv)?;
        let mut tiles = self.tiles.clone();
        tiles.swap(self.blank, target);
        Some(Board {
            width: self.width,
            height: self.height,
            tiles,
            blank: target,
        })
    }

    /// Whether this is the solved arrangement `1, 2, ..., n - 1, 0`.
    pub fn is_goal(&self) -> bool {
        let cells = self.tiles.len();
        self.tiles
            .iter()
            .enumerate()
            .all(|(i, &tile)| tile == goal_tile(i, cells))
    }

    /// Number of pairs of non-blank tiles that appear in the wrong relative order.
    pub fn inversions(&self) -> usize {
        let tiles: Vec<u8> = self.tiles.iter().copied().filter(|&t| t != BLANK).collect();
        tiles
            .iter()
            .enumerate()
            .map(|(i, &a)| tiles[i + 1..].iter().filter(|&&b| a > b).count())
            .sum()
    }

    /// Whether the goal arrangement is reachable from this board.
    ///
    /// Horizontal moves never change the inversion count. A vertical move carries
    /// one tile past `width - 1` others, flipping the inversion parity when the width
    /// is even. So for odd widths (the 8-puzzle) the board is solvable iff the
    /// inversion count is even; for even widths the blank's row distance from the
    /// bottom row is added first.
    ///
    /// A single row or column never lets tiles pass each other, so there the board
    /// is solvable iff the non-blank tiles are already in order.
    ///
    /// # Examples
    /// ```
    /// use puzzle_search::puzzle::Board;
    /// assert!(Board::eight([2, 4, 3, 1, 5, 6, 7, 8, 0]).unwrap().is_solvable());
    /// assert!(!Board::eight([1, 2, 3, 4, 5, 6, 8, 7, 0]).unwrap().is_solvable());
    /// ```
    pub fn is_solvable(&self) -> bool {
        let inversions = self.inversions();
        if self.is_thin() {
            inversions == 0
        } else if self.width % 2 == 1 {
            inversions % 2 == 0
        } else {
            let (row, _) = self.blank_position();
            let rows_from_bottom = self.height - 1 - row;
            (inversions + rows_from_bottom) % 2 == 0
        }
    }

    fn is_thin(&self) -> bool {
        self.width == 1 || self.height == 1
    }
}

/// Tile that belongs at `index` in the solved arrangement of a board with `cells` cells.
pub(crate) fn goal_tile(index: usize, cells: usize) -> u8 {
    if index + 1 == cells {
        BLANK
    } else {
        (index + 1) as u8
    }
}

impl fmt::Display for Board {
    /// Renders one row per line, right-aligned, with the blank shown as `.`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cell_width = (self.tiles.len() - 1).to_string().len();
        for (r, row) in self.tiles.chunks(self.width).enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            for (c, &tile) in row.iter().enumerate() {
                if c > 0 {
                    write!(f, " ")?;
                }
                if tile == BLANK {
                    write!(f, "{:>width$}", ".", width = cell_width)?;
                } else {
                    write!(f, "{:>width$}", tile, width = cell_width)?;
                }
            }
        }
        Ok(())
    }
}

/// The sliding-tile puzzle as a search problem.
///
/// The heuristic is injected at construction, so adding a heuristic never requires
/// touching the search loop.
pub struct SlidingPuzzle {
    initial: Board,
    heuristic: Box<dyn Heuristic<Board>>,
}

impl SlidingPuzzle {
    /// Creates a puzzle starting at `initial` that estimates remaining cost with `heuristic`.
    pub fn new(initial: Board, heuristic: Box<dyn Heuristic<Board>>) -> Self {
        SlidingPuzzle { initial, heuristic }
    }

    pub fn initial(&self) -> &Board {
        &self.initial
    }

    pub fn heuristic_name(&self) -> &str {
        self.heuristic.name()
    }

    /// Advisory pre-check that rejects instances whose goal is unreachable, before
    /// any search effort is spent.
    ///
    /// # Errors
    /// Returns [`Error::UnsolvableInstance`] if the goal is unreachable from the initial board.
    pub fn check_solvability(&self) -> Result<()> {
        if self.initial.is_solvable() {
            Ok(())
        } else {
            Err(Error::UnsolvableInstance {
                inversions: self.initial.inversions(),
            })
        }
    }
}

impl fmt::Debug for SlidingPuzzle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SlidingPuzzle")
            .field("initial", &self.initial)
            .field("heuristic", &self.heuristic.name())
            .finish()
    }
}

impl Problem for SlidingPuzzle {
    type State = Board;
    type Action = Move;

    fn initial_state(&self) -> Board {
        self.initial.clone()
    }

    fn actions(&self, state: &Board) -> Vec<Move> {
        state.legal_moves()
    }

    fn result(&self, state: &Board, action: &Move) -> Result<Board> {
        state.apply(*action).ok_or_else(|| Error::InvalidAction {
            action: action.to_string(),
            state: state.tiles.iter().map(u8::to_string).collect::<Vec<_>>().join(","),
        })
    }

    fn goal_test(&self, state: &Board) -> bool {
        state.is_goal()
    }

    fn heuristic(&self, state: &Board) -> Cost {
        self.heuristic.estimate(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::heuristics::{ManhattanDistance, MisplacedTiles};

    fn eight(tiles: [u8; 9]) -> Board {
        Board::eight(tiles).unwrap()
    }

    #[test]
    fn test_goal_board() {
        let goal = Board::goal(3, 3);
        assert_eq!(goal.tiles(), &[1, 2, 3, 4, 5, 6, 7, 8, 0]);
        assert_eq!(goal.blank_position(), (2, 2));
        assert!(goal.is_goal());
        assert_eq!(goal.inversions(), 0);
        assert!(goal.is_solvable());
    }

    #[test]
    fn test_new_rejects_malformed_boards() {
        assert!(Board::new(3, 3, vec![1, 2, 3]).is_err());
        assert!(Board::new(0, 3, vec![]).is_err());
        assert!(Board::new(2, 2, vec![1, 2, 4, 0]).is_err());
        let err = Board::new(2, 2, vec![1, 2, 2, 0]).unwrap_err();
        assert!(err.to_string().contains("appears twice"));
        assert!(Board::new(17, 17, vec![0; 289]).is_err());
    }

    #[test]
    fn test_new_rejects_overflowing_dimensions() {
        let err = Board::new(usize::MAX / 2 + 1, 2, vec![]).unwrap_err();
        assert!(matches!(err, Error::InvalidBoard { .. }));
        assert!(err.to_string().contains("too large"));
        assert!(Board::new(usize::MAX, usize::MAX, vec![0]).is_err());
    }

    #[test]
    fn test_single_row_and_column_solvability() {
        // Tiles on a line can only shift into the blank, never past each other.
        let row = Board::new(4, 1, vec![2, 3, 1, 0]).unwrap();
        assert_eq!(row.inversions(), 2);
        assert!(!row.is_solvable());
        let column = Board::new(1, 5, vec![2, 3, 1, 4, 0]).unwrap();
        assert!(!column.is_solvable());

        assert!(Board::new(4, 1, vec![1, 0, 2, 3]).unwrap().is_solvable());
        assert!(Board::new(1, 3, vec![0, 1, 2]).unwrap().is_solvable());
        assert!(Board::new(1, 1, vec![0]).unwrap().is_solvable());

        for seed in 0..10 {
            assert!(Board::random_solvable_with_seed(5, 1, seed).is_solvable());
            assert!(Board::random_solvable_with_seed(1, 4, seed).is_solvable());
            assert!(Board::scrambled_with_seed(1, 4, 6, seed).is_solvable());
        }
    }

    #[test]
    fn test_legal_moves_respect_bounds() {
        // Blank in the top-right corner.
        let corner = eight([1, 2, 0, 3, 4, 5, 6, 7, 8]);
        assert_eq!(corner.legal_moves(), vec![Move::Down, Move::Left]);

        // Blank in the center.
        let center = eight([1, 2, 3, 4, 0, 5, 6, 7, 8]);
        assert_eq!(center.legal_moves(), Move::ALL.to_vec());

        // Blank on the bottom edge.
        let edge = eight([1, 2, 3, 4, 5, 6, 7, 0, 8]);
        assert_eq!(edge.legal_moves(), vec![Move::Up, Move::Left, Move::Right]);
        assert!(!edge.is_legal(Move::Down));
    }

    #[test]
    fn test_apply_swaps_blank_and_keeps_original() {
        let board = eight([1, 2, 3, 4, 0, 5, 6, 7, 8]);
        let up = board.apply(Move::Up).unwrap();
        assert_eq!(up.tiles(), &[1, 0, 3, 4, 2, 5, 6, 7, 8]);
        assert_eq!(up.blank_position(), (0, 1));
        // The original board is untouched.
        assert_eq!(board.tiles(), &[1, 2, 3, 4, 0, 5, 6, 7, 8]);

        let right = board.apply(Move::Right).unwrap();
        assert_eq!(right.tiles(), &[1, 2, 3, 4, 5, 0, 6, 7, 8]);
    }

    #[test]
    fn test_move_then_inverse_round_trips() {
        let boards = [
            Board::goal(3, 3),
            eight([1, 2, 0, 3, 4, 5, 6, 7, 8]),
            eight([2, 4, 3, 1, 5, 6, 7, 8, 0]),
            eight([8, 6, 7, 2, 0, 4, 3, 5, 1]),
            Board::goal(4, 2),
        ];
        for board in &boards {
            for mv in board.legal_moves() {
                let moved = board.apply(mv).unwrap();
                assert_ne!(&moved, board);
                assert_eq!(&moved.apply(mv.inverse()).unwrap(), board);
            }
        }
    }

    #[test]
    fn test_inversions() {
        assert_eq!(eight([2, 4, 3, 1, 5, 6, 7, 8, 0]).inversions(), 4);
        assert_eq!(eight([1, 2, 3, 4, 5, 6, 8, 7, 0]).inversions(), 1);
        assert_eq!(eight([8, 7, 6, 5, 4, 3, 2, 1, 0]).inversions(), 28);
        // The blank is ignored wherever it sits.
        assert_eq!(eight([0, 1, 2, 3, 4, 5, 6, 7, 8]).inversions(), 0);
    }

    #[test]
    fn test_single_tile_swap_flips_solvability() {
        let goal = Board::goal(3, 3);
        for a in 0..8 {
            for b in (a + 1)..8 {
                let mut tiles = goal.tiles().to_vec();
                tiles.swap(a, b);
                let once = Board::new(3, 3, tiles.clone()).unwrap();
                assert!(!once.is_solvable(), "one swap should be unsolvable: {:?}", tiles);

                let (c, d) = if b + 1 < 8 { (b, b + 1) } else { (0, a) };
                if c != d {
                    tiles.swap(c, d);
                    let twice = Board::new(3, 3, tiles.clone()).unwrap();
                    assert!(twice.is_solvable(), "two swaps should be solvable: {:?}", tiles);
                }
            }
        }
    }

    #[test]
    fn test_even_width_solvability_accounts_for_blank_row() {
        // 2x2: the blank can only rotate tiles around the cycle.
        assert!(Board::new(2, 2, vec![1, 2, 3, 0]).unwrap().is_solvable());
        assert!(Board::new(2, 2, vec![1, 0, 3, 2]).unwrap().is_solvable());
        assert!(Board::new(2, 2, vec![0, 1, 3, 2]).unwrap().is_solvable());
        assert!(!Board::new(2, 2, vec![2, 1, 3, 0]).unwrap().is_solvable());
        assert!(!Board::new(2, 2, vec![1, 3, 2, 0]).unwrap().is_solvable());
    }

    #[test]
    fn test_scrambled_boards_are_solvable_and_reproducible() {
        for seed in 0..20 {
            let board = Board::scrambled_with_seed(3, 3, 30, seed);
            assert!(board.is_solvable());
            assert_eq!(board, Board::scrambled_with_seed(3, 3, 30, seed));
        }
        assert!(Board::scrambled_with_seed(3, 3, 0, 7).is_goal());
    }

    #[test]
    fn test_random_solvable_boards() {
        for seed in 0..20 {
            let board = Board::random_solvable_with_seed(3, 3, seed);
            assert!(board.is_solvable());
            assert_eq!(board, Board::random_solvable_with_seed(3, 3, seed));
            assert!(Board::new(3, 3, board.tiles().to_vec()).is_ok());

            let wide = Board::random_solvable_with_seed(4, 4, seed);
            assert!(wide.is_solvable());
        }
    }

    #[test]
    fn test_display() {
        let board = eight([1, 2, 0, 3, 4, 5, 6, 7, 8]);
        assert_eq!(board.to_string(), "1 2 .\n3 4 5\n6 7 8");

        let fifteen = Board::goal(4, 4);
        let rendered = fifteen.to_string();
        assert_eq!(rendered.lines().count(), 4);
        assert!(rendered.ends_with("13 14 15  ."));
    }

    #[test]
    fn test_puzzle_problem_contract() {
        let start = eight([1, 2, 3, 4, 5, 6, 7, 0, 8]);
        let puzzle = SlidingPuzzle::new(start.clone(), Box::new(ManhattanDistance));
        assert_eq!(puzzle.initial_state(), start);
        assert_eq!(puzzle.actions(&start), start.legal_moves());
        assert!(!puzzle.goal_test(&start));
        assert_eq!(puzzle.heuristic(&start), 1);
        assert_eq!(puzzle.heuristic_name(), "manhattan");

        let next = puzzle.result(&start, &Move::Right).unwrap();
        assert!(puzzle.goal_test(&next));
        assert_eq!(puzzle.step_cost(&start, &Move::Right, &next), 1);
    }

    #[test]
    fn test_result_rejects_illegal_action() {
        let start = eight([1, 2, 3, 4, 5, 6, 7, 8, 0]);
        let puzzle = SlidingPuzzle::new(start.clone(), Box::new(MisplacedTiles));
        let err = puzzle.result(&start, &Move::Down).unwrap_err();
        assert!(matches!(err, Error::InvalidAction { .. }));
        assert!(err.to_string().contains("Down"));
    }

    #[test]
    fn test_check_solvability() {
        let solvable = SlidingPuzzle::new(
            eight([2, 4, 3, 1, 5, 6, 7, 8, 0]),
            Box::new(ManhattanDistance),
        );
        assert!(solvable.check_solvability().is_ok());

        let unsolvable = SlidingPuzzle::new(
            eight([1, 2, 3, 4, 5, 6, 8, 7, 0]),
            Box::new(ManhattanDistance),
        );
        assert!(matches!(
            unsolvable.check_solvability(),
            Err(Error::UnsolvableInstance { inversions: 1 })
        ));
    }
}
