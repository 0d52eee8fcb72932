use std::{cmp::Reverse, collections::HashSet};

/// Confirmed words of one line.
///
/// The bucket has a single owner that performs every insert, so the membership
/// check and the insert form one step.
#[derive(Debug, Clone, Default)]
pub(crate) struct LineBucket {
    words: Vec<String>,
    seen: HashSet<String>,
}

impl LineBucket {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Inserts `word` unless an equal word is already present.
    ///
    /// Returns `true` if the word was inserted.
    pub(crate) fn insert(&mut self, word: String) -> bool {
        if self.seen.contains(&word) {
            return false;
        }
        self.seen.insert(word.clone());
        self.words.push(word);
        true
    }

    pub(crate) fn len(&self) -> usize {
        self.words.len()
    }

    /// Consumes the bucket and returns its words ranked by [`rank_words`].
    pub(crate) fn into_ranked(self) -> Vec<String> {
        let mut words = self.words;
        rank_words(&mut words);
        words
    }
}

/// Sorts words longest first; equal lengths are ordered alphabetically.
///
/// Lengths are counted in characters.
pub(crate) fn rank_words(words: &mut [String]) {
    words.sort_by_cached_key(|word| (Reverse(word.chars().count()), word.clone()));
}
