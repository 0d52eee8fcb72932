//! Reading command-line input.

use std::{
    fs,
    io::{self, Read},
    path::Path,
};

use wordgrid_core::{Direction, DirectionError, Grid};

use crate::CliError;

/// Returns the accepted direction tokens, comma separated.
#[must_use]
pub fn accepted_directions() -> String {
    Direction::ALL.map(Direction::as_str).join(", ")
}

/// Parses direction tokens, defaulting to [`Direction::Right`] when none are given.
///
/// # Errors
///
/// Returns the first token that is not a supported direction.
pub fn parse_directions<S>(tokens: &[S]) -> Result<Vec<Direction>, DirectionError>
where
    S: AsRef<str>,
{
    if tokens.is_empty() {
        return Ok(vec![Direction::Right]);
    }
    tokens.iter().map(|token| token.as_ref().parse()).collect()
}

/// Reads a grid from `path`, or from standard input when `path` is `-`.
///
/// # Errors
///
/// Returns [`CliError::ReadGrid`] if the input cannot be read and
/// [`CliError::Grid`] if it does not hold a rectangular grid.
pub fn read_grid(path: &Path) -> Result<Grid, CliError> {
    if path == Path::new("-") {
        return read_grid_from(io::stdin().lock());
    }
    let text = fs::read_to_string(path).map_err(|source| CliError::ReadGrid {
        path: path.to_owned(),
        source,
    })?;
    Ok(text.parse()?)
}

/// Reads a grid from `reader`.
///
/// # Errors
///
/// Returns [`CliError::ReadGrid`] if the reader fails and [`CliError::Grid`] if
/// the text does not hold a rectangular grid.
pub fn read_grid_from<R>(mut reader: R) -> Result<Grid, CliError>
where
    R: Read,
{
    let mut text = String::new();
    reader
        .read_to_string(&mut text)
        .map_err(|source| CliError::ReadGrid {
            path: "-".into(),
            source,
        })?;
    Ok(text.parse()?)
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn test_directions_default_to_right() {
        let none: [&str; 0] = [];
        assert_eq!(parse_directions(&none).unwrap(), [Direction::Right]);
    }

    #[test]
    fn test_directions_are_parsed_in_order() {
        assert_eq!(
            parse_directions(&["down", "LEFT"]).unwrap(),
            [Direction::Down, Direction::Left]
        );
    }

    #[test]
    fn test_first_bad_direction_is_reported() {
        let err = parse_directions(&["RIGHT", "DOWN_RIGHT", "SIDEWAYS"]).unwrap_err();
        assert_eq!(
            err,
            DirectionError::Unsupported {
                token: "DOWN_RIGHT".to_owned()
            }
        );
    }

    #[test]
    fn test_grid_is_read_and_normalized() {
        let grid = read_grid_from(Cursor::new("  cat\nd o g\n\narc\n")).unwrap();
        assert_eq!(grid.to_string(), "CAT\nDOG\nARC");
    }

    #[test]
    fn test_ragged_grid_is_rejected() {
        let err = read_grid_from(Cursor::new("CAT\nDO\n")).unwrap_err();
        assert!(matches!(err, CliError::Grid(_)));
    }

    #[test]
    fn test_missing_file_reports_path() {
        let err = read_grid(Path::new("/nonexistent/grid.txt")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/grid.txt"));
    }

    #[test]
    fn test_accepted_directions() {
        assert_eq!(accepted_directions(), "RIGHT, LEFT, UP, DOWN");
    }
}
