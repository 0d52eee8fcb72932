//! Candidate enumeration.
//!
//! For a line `S` and a minimum length `m`, every start offset `i` whose suffix
//! `S[i..]` is at least `m` characters long contributes that suffix and all of its
//! right-truncations down to length `m`. Candidates are grouped by start offset:
//! groups come in increasing offset order, and candidates within a group in
//! decreasing length order.
//!
//! A line of length `L` therefore yields `1 + 2 + … + (L - m + 1)` candidates, see
//! [`candidate_count`].
//!
//! A minimum length of `0` is treated as `1`; empty candidates are never produced.

use std::iter::FusedIterator;

use crate::{Direction, Line};

/// A substring of a line that is eligible for validation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Candidate {
    /// Index of the line the candidate was taken from.
    pub line: usize,
    /// Direction the line was read in.
    pub direction: Direction,
    /// Start offset within the line, in characters.
    pub offset: usize,
    /// The candidate text.
    pub text: String,
}

/// All candidates sharing one start offset, longest first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateGroup {
    /// Start offset shared by every candidate in the group.
    pub offset: usize,
    /// Candidates in decreasing length order.
    pub candidates: Vec<Candidate>,
}

/// Returns the number of candidates a line of `line_len` characters yields.
///
/// # Examples
///
/// ```
/// use wordgrid_core::candidate::candidate_count;
///
/// assert_eq!(candidate_count(5, 3), 1 + 2 + 3);
/// assert_eq!(candidate_count(3, 3), 1);
/// assert_eq!(candidate_count(2, 3), 0);
/// ```
#[must_use]
pub const fn candidate_count(line_len: usize, min_len: usize) -> usize {
    let min_len = if min_len == 0 { 1 } else { min_len };
    if line_len < min_len {
        return 0;
    }
    let offsets = line_len - min_len + 1;
    offsets * (offsets + 1) / 2
}

/// Returns an iterator over the candidate groups of `line`, by increasing offset.
#[must_use]
pub fn candidate_groups(line: &Line, min_len: usize) -> CandidateGroups<'_> {
    let min_len = min_len.max(1);
    let end = (line.len() + 1).saturating_sub(min_len);
    CandidateGroups {
        line,
        min_len,
        front: 0,
        end,
    }
}

/// Returns every candidate of `line` in emission order.
pub fn candidates(line: &Line, min_len: usize) -> impl Iterator<Item = Candidate> + '_ {
    candidate_groups(line, min_len).flat_map(|group| group.candidates)
}

/// Iterator over the [`CandidateGroup`]s of a line.
#[derive(Debug, Clone)]
pub struct CandidateGroups<'a> {
    line: &'a Line,
    min_len: usize,
    front: usize,
    end: usize,
}

impl CandidateGroups<'_> {
    fn group_at(&self, offset: usize) -> CandidateGroup {
        let chars = &self.line.chars()[offset..];
        let candidates = (self.min_len..=chars.len())
            .rev()
            .map(|len| Candidate {
                line: self.line.index(),
                direction: self.line.direction(),
                offset,
                text: chars[..len].iter().collect(),
            })
            .collect();
        CandidateGroup { offset, candidates }
    }
}

impl Iterator for CandidateGroups<'_> {
    type Item = CandidateGroup;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.end {
            return None;
        }
        let group = self.group_at(self.front);
        self.front += 1;
        Some(group)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.end.saturating_sub(self.front);
        (remaining, Some(remaining))
    }
}

impl FusedIterator for CandidateGroups<'_> {}
impl ExactSizeIterator for CandidateGroups<'_> {}
