//! Aggregated scan results.

use std::collections::BTreeMap;

use wordgrid_core::Direction;

/// Ranked words of every line read in one direction.
///
/// Every line of the grid has an entry, empty when nothing was found in it. Words of
/// a line are distinct and ranked longest first; words of equal length are in
/// alphabetical order.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
#[serde(transparent)]
pub struct DirectionResults {
    lines: BTreeMap<usize, Vec<String>>,
}

impl DirectionResults {
    /// Creates results holding an empty entry for each of `line_count` lines.
    #[must_use]
    pub fn with_lines(line_count: usize) -> Self {
        Self {
            lines: (0..line_count).map(|index| (index, Vec::new())).collect(),
        }
    }

    pub(crate) fn set_line(&mut self, index: usize, words: Vec<String>) {
        self.lines.insert(index, words);
    }

    /// Returns the ranked words of line `index`.
    #[must_use]
    pub fn line(&self, index: usize) -> Option<&[String]> {
        self.lines.get(&index).map(Vec::as_slice)
    }

    /// Returns the longest word(s) found in line `index`.
    ///
    /// Returns an empty slice if nothing was found, and `None` if the line does not
    /// exist.
    #[must_use]
    pub fn longest_in_line(&self, index: usize) -> Option<&[String]> {
        let words = self.line(index)?;
        let longest = words.first().map_or(0, |w| w.chars().count());
        let end = words
            .iter()
            .position(|w| w.chars().count() < longest)
            .unwrap_or(words.len());
        Some(&words[..end])
    }

    /// Iterates over `(line index, ranked words)` in line order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &[String])> {
        self.lines.iter().map(|(&index, words)| (index, words.as_slice()))
    }

    /// Returns the number of lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Returns `true` if there are no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Returns the number of words found over all lines.
    #[must_use]
    pub fn total_matches(&self) -> usize {
        self.lines.values().map(Vec::len).sum()
    }
}

/// The outcome of a scan: per-direction, per-line ranked words.
///
/// Directions are independent; the same word may appear under several directions.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
#[serde(transparent)]
pub struct ResultSet {
    directions: BTreeMap<Direction, DirectionResults>,
}

impl ResultSet {
    pub(crate) fn insert(&mut self, direction: Direction, results: DirectionResults) {
        self.directions.insert(direction, results);
    }

    /// Returns the results of `direction`, if it was scanned.
    #[must_use]
    pub fn get(&self, direction: Direction) -> Option<&DirectionResults> {
        self.directions.get(&direction)
    }

    /// Returns the ranked words of line `index` read in `direction`.
    #[must_use]
    pub fn line(&self, direction: Direction, index: usize) -> Option<&[String]> {
        self.get(direction)?.line(index)
    }

    /// Returns the scanned directions in order.
    pub fn directions(&self) -> impl Iterator<Item = Direction> + '_ {
        self.directions.keys().copied()
    }

    /// Iterates over `(direction, results)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Direction, &DirectionResults)> {
        self.directions
            .iter()
            .map(|(&direction, results)| (direction, results))
    }

    /// Returns the number of words found over all directions and lines.
    #[must_use]
    pub fn total_matches(&self) -> usize {
        self.directions
            .values()
            .map(DirectionResults::total_matches)
            .sum()
    }
}
