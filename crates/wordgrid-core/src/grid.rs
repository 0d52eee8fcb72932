//! Rectangular character grid.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use crate::{Direction, Line};

/// Errors returned when a grid does not have a usable shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GridError {
    /// The grid has no rows, or its first row has no characters.
    #[display("couldn't read any letters, the grid is empty")]
    Empty,
    /// A row's length differs from the length of the first row.
    #[display("row {row} has {actual} letters, expected {expected}")]
    Ragged {
        /// Zero-based index of the offending row.
        row: usize,
        /// Length of the first row.
        expected: usize,
        /// Length of the offending row.
        actual: usize,
    },
}

/// A validated, immutable rectangular matrix of characters.
///
/// Every row has the same number of characters and there is at least one row with
/// at least one character. Both invariants are checked once by [`Grid::new`] and
/// hold for the lifetime of the value.
///
/// # Examples
///
/// ```
/// use wordgrid_core::{Grid, GridError};
///
/// let grid = Grid::new(vec![vec!['C', 'A', 'T'], vec!['D', 'O', 'G']])?;
/// assert_eq!(grid.line_count(), 2);
/// assert_eq!(grid.column_count(), 3);
///
/// let ragged = Grid::new(vec![vec!['C', 'A', 'T'], vec!['D', 'O']]);
/// assert_eq!(
///     ragged,
///     Err(GridError::Ragged { row: 1, expected: 3, actual: 2 })
/// );
/// # Ok::<(), GridError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: Vec<Vec<char>>,
}

impl Grid {
    /// Validates `rows` and wraps them into a grid.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::Empty`] if there are no rows or the first row is empty,
    /// and [`GridError::Ragged`] for the first row whose length differs from the
    /// first row's length.
    pub fn new(rows: Vec<Vec<char>>) -> Result<Self, GridError> {
        let expected = rows.first().map_or(0, Vec::len);
        if expected == 0 {
            return Err(GridError::Empty);
        }
        if let Some((row, actual)) = rows
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|&(_, len)| len != expected)
        {
            return Err(GridError::Ragged {
                row,
                expected,
                actual,
            });
        }
        Ok(Self { rows })
    }

    /// Returns the number of rows.
    #[must_use]
    #[inline]
    pub fn line_count(&self) -> usize {
        self.rows.len()
    }

    /// Returns the number of columns.
    #[must_use]
    #[inline]
    pub fn column_count(&self) -> usize {
        self.rows[0].len()
    }

    /// Returns the rows of the grid.
    #[must_use]
    pub fn rows(&self) -> &[Vec<char>] {
        &self.rows
    }

    /// Returns the character at (`row`, `column`), if both are in range.
    #[must_use]
    pub fn get(&self, row: usize, column: usize) -> Option<char> {
        self.rows.get(row)?.get(column).copied()
    }

    /// Returns how many lines are read in `direction`.
    ///
    /// Horizontal directions read one line per row, vertical directions one line per
    /// column.
    #[must_use]
    pub fn lines_in(&self, direction: Direction) -> usize {
        if direction.is_horizontal() {
            self.line_count()
        } else {
            self.column_count()
        }
    }

    /// Returns the length of every line read in `direction`.
    #[must_use]
    pub fn line_len(&self, direction: Direction) -> usize {
        if direction.is_horizontal() {
            self.column_count()
        } else {
            self.line_count()
        }
    }

    /// Extracts line `index` read in `direction`.
    ///
    /// Returns `None` if `index` is not smaller than [`Grid::lines_in`].
    #[must_use]
    pub fn line(&self, index: usize, direction: Direction) -> Option<Line> {
        if index >= self.lines_in(direction) {
            return None;
        }
        let mut chars: Vec<char> = if direction.is_horizontal() {
            self.rows[index].clone()
        } else {
            self.rows.iter().map(|row| row[index]).collect()
        };
        if direction.is_reversed() {
            chars.reverse();
        }
        Some(Line::new(index, direction, chars))
    }

    /// Returns every line read in `direction`, in index order.
    pub fn lines(&self, direction: Direction) -> impl Iterator<Item = Line> + '_ {
        (0..self.lines_in(direction)).filter_map(move |index| self.line(index, direction))
    }
}

/// Parses the textual output of a grid reader.
///
/// Surrounding whitespace is trimmed, each non-blank line becomes a row, whitespace
/// inside a line is ignored and letters are upper-cased.
impl FromStr for Grid {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows = s
            .trim()
            .lines()
            .map(|line| {
                line.chars()
                    .filter(|c| !c.is_whitespace())
                    .flat_map(char::to_uppercase)
                    .collect::<Vec<_>>()
            })
            .filter(|row| !row.is_empty())
            .collect();
        Self::new(rows)
    }
}

impl Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for c in row {
                write!(f, "{c}")?;
            }
        }
        Ok(())
    }
}
