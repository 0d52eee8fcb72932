//! Core data structures for word grid searching.
//!
//! This crate provides the immutable building blocks used by the scanner:
//!
//! 1. **Grid model** - [`grid`]: a validated rectangular matrix of characters
//! 2. **Directions** - [`direction`]: reading orientations (RIGHT, LEFT, UP, DOWN)
//! 3. **Line extraction** - [`line`]: the flattened character sequence for one row or
//!    column read in a given direction
//! 4. **Candidate enumeration** - [`candidate`]: every substring of a line that is long
//!    enough to be checked against a word oracle
//!
//! # Examples
//!
//! ```
//! use wordgrid_core::{Direction, Grid, candidate};
//!
//! let grid: Grid = "CAT\nDOG\nARC".parse()?;
//! assert_eq!(grid.line_count(), 3);
//!
//! let line = grid.line(0, Direction::Left).unwrap();
//! assert_eq!(line.text(), "TAC");
//!
//! let texts: Vec<_> = candidate::candidates(&line, 2).map(|c| c.text).collect();
//! assert_eq!(texts, ["TAC", "TA", "AC"]);
//! # Ok::<(), wordgrid_core::GridError>(())
//! ```

pub mod candidate;
pub mod direction;
pub mod grid;
pub mod line;

pub use self::{
    candidate::{Candidate, CandidateGroup},
    direction::{Direction, DirectionError},
    grid::{Grid, GridError},
    line::Line,
};
