//! Move notation codec
//!
//! Column letters (`a` = 0, continuing "aa" after "z") followed by the
//! 1-based row number, so row 3, col 2 formats as "c4". `format_move`
//! and `parse_move` are mutual inverses over every in-range coordinate,
//! on boards wider than 26 columns included.

use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum NotationError {
    #[error("empty move string")]
    Empty,
    #[error("move must start with a column letter a-z, got {0:?}")]
    BadColumn(char),
    #[error("move must end with a 1-based row number, got {0:?}")]
    BadRow(String),
}

/// Bijective base-26 column label: 0 -> "a", 25 -> "z", 26 -> "aa".
pub fn column_label(col: usize) -> String {
    let mut letters = Vec::new();
    let mut n = col + 1;
    while n > 0 {
        n -= 1;
        letters.push((b'a' + (n % 26) as u8) as char);
        n /= 26;
    }
    letters.iter().rev().collect()
}

pub fn format_move(row: usize, col: usize) -> String {
    format!("{}{}", column_label(col), row + 1)
}

pub fn parse_move(input: &str) -> Result<(usize, usize), NotationError> {
    let input = input.trim();
    let first = input.chars().next().ok_or(NotationError::Empty)?;
    if !first.is_ascii_lowercase() {
        return Err(NotationError::BadColumn(first));
    }

    let split = input
        .char_indices()
        .find(|(_, c)| !c.is_ascii_lowercase())
        .map(|(i, _)| i)
        .unwrap_or(input.len());
    let (letters, rest) = input.split_at(split);

    let mut col: usize = 0;
    for c in letters.chars() {
        col = col
            .checked_mul(26)
            .and_then(|v| v.checked_add((c as u8 - b'a' + 1) as usize))
            .ok_or(NotationError::BadColumn(c))?;
    }
    let col = col - 1;

    let row = rest
        .parse::<usize>()
        .ok()
        .filter(|&n| n >= 1)
        .ok_or_else(|| NotationError::BadRow(rest.to_string()))?;

    Ok((row - 1, col))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_examples() {
        assert_eq!(format_move(3, 2), "c4");
        assert_eq!(format_move(0, 0), "a1");
        assert_eq!(format_move(10, 10), "k11");
    }

    #[test]
    fn test_parse_examples() {
        assert_eq!(parse_move("c4"), Ok((3, 2)));
        assert_eq!(parse_move("a1"), Ok((0, 0)));
        assert_eq!(parse_move(" k11 "), Ok((10, 10)));
    }

    #[test]
    fn test_columns_past_z_stay_distinct() {
        assert_eq!(format_move(0, 25), "z1");
        assert_eq!(format_move(0, 26), "aa1");
        assert_eq!(format_move(4, 27), "ab5");
        assert_ne!(format_move(0, 26), format_move(0, 0));
        assert_eq!(parse_move("aa1"), Ok((0, 26)));
        assert_eq!(parse_move("ab5"), Ok((4, 27)));
        assert_eq!(parse_move("az3"), Ok((2, 51)));
        assert_eq!(parse_move("ba1"), Ok((0, 52)));
    }

    #[test]
    fn test_round_trip_over_board() {
        for row in 0..11 {
            for col in 0..11 {
                let s = format_move(row, col);
                assert_eq!(parse_move(&s), Ok((row, col)), "notation {}", s);
            }
        }
    }

    #[test]
    fn test_round_trip_on_wide_board() {
        for row in 0..30 {
            for col in 0..30 {
                let s = format_move(row, col);
                assert_eq!(parse_move(&s), Ok((row, col)), "notation {}", s);
            }
        }
    }

    #[test]
    fn test_malformed_input() {
        assert_eq!(parse_move(""), Err(NotationError::Empty));
        assert_eq!(parse_move("5a"), Err(NotationError::BadColumn('5')));
        assert_eq!(parse_move("C4"), Err(NotationError::BadColumn('C')));
        assert!(matches!(parse_move("c"), Err(NotationError::BadRow(_))));
        assert!(matches!(parse_move("cx"), Err(NotationError::BadRow(_))));
        assert!(matches!(parse_move("c0"), Err(NotationError::BadRow(_))));
    }
}
