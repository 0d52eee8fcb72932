//! Reading directions.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

/// The orientation in which a line of the grid is read.
///
/// Only the four axis-aligned directions are supported. Diagonal tokens are
/// recognized by [`Direction::from_str`] so that they can be reported as
/// [`DirectionError::Unsupported`] instead of being silently scanned as something else.
///
/// # Examples
///
/// ```
/// use wordgrid_core::{Direction, DirectionError};
///
/// assert_eq!("left".parse(), Ok(Direction::Left));
/// assert!(Direction::Up.is_reversed());
/// assert_eq!(
///     "down right".parse::<Direction>(),
///     Err(DirectionError::Unsupported { token: "down right".to_owned() })
/// );
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum Direction {
    /// Rows read left to right.
    Right,
    /// Rows read right to left.
    Left,
    /// Columns read bottom to top.
    Up,
    /// Columns read top to bottom.
    Down,
}

/// Diagonal direction tokens that name an orientation this crate does not scan.
const DIAGONAL_TOKENS: [&str; 4] = ["DOWN_RIGHT", "DOWN_LEFT", "UP_RIGHT", "UP_LEFT"];

impl Direction {
    /// All supported directions.
    pub const ALL: [Self; 4] = [Self::Right, Self::Left, Self::Up, Self::Down];

    /// Returns the upper-case token naming this direction.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Right => "RIGHT",
            Self::Left => "LEFT",
            Self::Up => "UP",
            Self::Down => "DOWN",
        }
    }

    /// Returns `true` for directions that read rows.
    #[must_use]
    pub const fn is_horizontal(self) -> bool {
        matches!(self, Self::Right | Self::Left)
    }

    /// Returns `true` for directions that read a line back to front.
    ///
    /// [`Direction::Left`] reverses [`Direction::Right`] and [`Direction::Up`]
    /// reverses [`Direction::Down`].
    #[must_use]
    pub const fn is_reversed(self) -> bool {
        matches!(self, Self::Left | Self::Up)
    }
}

impl Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors returned when parsing a direction token.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum DirectionError {
    /// The token is not a direction name.
    #[display("unknown direction `{token}`")]
    Unknown {
        /// The token as given.
        token: String,
    },
    /// The token names a diagonal direction, which is not scanned.
    #[display("direction `{token}` is not supported, diagonal scanning is not implemented")]
    Unsupported {
        /// The token as given.
        token: String,
    },
}

/// Parses a direction token.
///
/// Matching is case-insensitive, and `-` or spaces may be used in place of `_`.
impl FromStr for Direction {
    type Err = DirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .map(|c| match c {
                '-' | ' ' => '_',
                c => c.to_ascii_uppercase(),
            })
            .collect();

        if let Some(direction) = Self::ALL.into_iter().find(|d| d.as_str() == normalized) {
            return Ok(direction);
        }
        let token = s.to_owned();
        if DIAGONAL_TOKENS.contains(&normalized.as_str()) {
            Err(DirectionError::Unsupported { token })
        } else {
            Err(DirectionError::Unknown { token })
        }
    }
}
