//! Lines extracted from a grid.

use crate::Direction;

/// The character sequence of one row or column, read in a given direction.
///
/// Lines are produced by [`Grid::line`](crate::Grid::line) and
/// [`Grid::lines`](crate::Grid::lines).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    index: usize,
    direction: Direction,
    chars: Vec<char>,
}

impl Line {
    /// Creates a line from already-ordered characters.
    #[must_use]
    pub fn new(index: usize, direction: Direction, chars: Vec<char>) -> Self {
        Self {
            index,
            direction,
            chars,
        }
    }

    /// Returns the row index (horizontal directions) or column index (vertical ones).
    #[must_use]
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns the direction this line is read in.
    #[must_use]
    #[inline]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Returns the characters in reading order.
    #[must_use]
    #[inline]
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Returns the number of characters.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Returns `true` if the line has no characters.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Returns the characters in reading order as a string.
    #[must_use]
    pub fn text(&self) -> String {
        self.chars.iter().collect()
    }
}
