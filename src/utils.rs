use crate::error::{Error, Result};
use crate::puzzle::{Board, Move};
use std::fs;
use std::path::Path;

/// Parses a board written as rows of whitespace-separated numbers, one row per line.
///
/// Blank lines are skipped. `0` is the blank.
///
/// # Arguments
/// * `width`: Number of numbers expected on every row.
/// * `height`: Number of rows expected.
/// * `text`: The board, e.g. `"1 2 0\n3 4 5\n6 7 8"`.
///
/// # Returns
/// * `Ok(Board)` if the text describes a valid `width x height` board.
/// * `Err(Error::InvalidBoard)` if a row has the wrong length, there are too many or
///   too few rows, a token is not a number, or the numbers are not a permutation.
///
/// # Examples
/// ```
/// use puzzle_search::utils::board_from_str;
///
/// let board = board_from_str(3, 3, "1 2 0\n3 4 5\n6 7 8").unwrap();
/// assert_eq!(board.tiles(), &[1, 2, 0, 3, 4, 5, 6, 7, 8]);
///
/// assert!(board_from_str(3, 3, "1 2 0\n3 4 5").is_err());
/// assert!(board_from_str(3, 3, "1 2 x\n3 4 5\n6 7 8").is_err());
/// ```
pub fn board_from_str(width: usize, height: usize, text: &str) -> Result<Board> {
    let rows: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    if rows.len() != height {
        return Err(Error::invalid_board(format!(
            "expected {} rows, found {}",
            height,
            rows.len()
        )));
    }

    let mut tiles = Vec::with_capacity(width * height);
    for (r, row) in rows.iter().enumerate() {
        let values = parse_numbers(row.split_whitespace())
            .map_err(|token| Error::invalid_board(format!("row {}: '{}' is not a tile number", r, token)))?;
        if values.len() != width {
            return Err(Error::invalid_board(format!(
                "row {} has {} tiles, expected {}",
                r,
                values.len(),
                width
            )));
        }
        tiles.extend(values);
    }
    Board::new(width, height, tiles)
}

/// Parses a flat tile list such as `(2,4,3,1,5,6,7,8,0)` or `2 4 3 1 5 6 7 8 0`.
///
/// Surrounding parentheses or brackets are optional; commas and whitespace both
/// separate numbers.
///
/// # Errors
/// Returns [`Error::InvalidBoard`] if a token is not a number in `0..=255`.
pub fn parse_tiles(text: &str) -> Result<Vec<u8>> {
    let inner = text
        .trim()
        .trim_start_matches(['(', '['])
        .trim_end_matches([')', ']']);
    let tokens = inner
        .split(|ch: char| ch == ',' || ch.is_whitespace())
        .filter(|token| !token.is_empty());
    parse_numbers(tokens)
        .map_err(|token| Error::invalid_board(format!("'{}' is not a tile number", token)))
}

/// Reads a board file in the format accepted by [`board_from_str`].
///
/// # Errors
/// Returns [`Error::Io`] if the file cannot be read, or [`Error::InvalidBoard`] if its
/// contents are not a valid board.
pub fn read_board_file(path: &Path, width: usize, height: usize) -> Result<Board> {
    let content = fs::read_to_string(path).map_err(|source| Error::Io {
        operation: format!("read board file {}", path.display()),
        source,
    })?;
    board_from_str(width, height, &content)
}

/// Formats moves as a space-separated list, e.g. `Up Left Down`.
pub fn format_moves(moves: &[Move]) -> String {
    moves
        .iter()
        .map(Move::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Parses every token as a `u8`, returning the first token that fails.
fn parse_numbers<'a>(tokens: impl Iterator<Item = &'a str>) -> std::result::Result<Vec<u8>, String> {
    tokens
        .map(|token| token.parse::<u8>().map_err(|_| token.to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_from_str_valid() {
        let board = board_from_str(3, 3, "  2 4 3\n1 5 6\n\n7 8 0\n").unwrap();
        assert_eq!(board.tiles(), &[2, 4, 3, 1, 5, 6, 7, 8, 0]);
        assert_eq!(board.blank_position(), (2, 2));
    }

    #[test]
    fn test_board_from_str_non_square() {
        let board = board_from_str(4, 2, "1 2 3 4\n5 6 7 0").unwrap();
        assert!(board.is_goal());
    }

    #[test]
    fn test_board_from_str_row_too_long() {
        let err = board_from_str(3, 3, "1 2 0 9\n3 4 5\n6 7 8").unwrap_err();
        assert!(err.to_string().contains("row 0 has 4 tiles"));
    }

    #[test]
    fn test_board_from_str_bad_token() {
        let err = board_from_str(3, 3, "1 2 0\n3 -4 5\n6 7 8").unwrap_err();
        assert!(err.to_string().contains("'-4' is not a tile number"));
    }

    #[test]
    fn test_board_from_str_duplicate_tile() {
        let err = board_from_str(3, 3, "1 2 0\n3 4 5\n6 7 7").unwrap_err();
        assert!(matches!(err, Error::InvalidBoard { .. }));
    }

    #[test]
    fn test_parse_tiles_formats() {
        let expected = vec![2, 4, 3, 1, 5, 6, 7, 8, 0];
        assert_eq!(parse_tiles("(2,4,3,1,5,6,7,8,0)").unwrap(), expected);
        assert_eq!(parse_tiles("[2, 4, 3, 1, 5, 6, 7, 8, 0]").unwrap(), expected);
        assert_eq!(parse_tiles("2 4 3 1 5 6 7 8 0").unwrap(), expected);
        assert!(parse_tiles("2,4,x").is_err());
        assert!(parse_tiles("").unwrap().is_empty());
    }

    #[test]
    fn test_read_board_file_missing() {
        let err = read_board_file(Path::new("/nonexistent/board.txt"), 3, 3).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
        assert!(err.to_string().contains("read board file"));
    }

    #[test]
    fn test_format_moves() {
        assert_eq!(format_moves(&[Move::Up, Move::Left, Move::Down]), "Up Left Down");
        assert_eq!(format_moves(&[]), "");
    }
}
