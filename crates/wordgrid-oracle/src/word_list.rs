//! Loading and normalizing dictionary word lists.

use std::path::{Path, PathBuf};

/// Errors that can occur while loading a word list.
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("failed to read word list from '{}': {source}", path.display())]
pub struct WordListError {
    path: PathBuf,
    source: std::io::Error,
}

impl WordListError {
    /// Returns the path that could not be read.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// A sorted, deduplicated list of upper-case words.
///
/// The list is the backing store of [`LocalOracle`](crate::LocalOracle), which relies
/// on it being sorted for binary search.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordList {
    words: Vec<String>,
}

impl WordList {
    /// Parses a word list with one word per line.
    ///
    /// Lines are trimmed, blank lines are skipped, words are upper-cased and the
    /// result is sorted and deduplicated.
    ///
    /// # Examples
    ///
    /// ```
    /// use wordgrid_oracle::WordList;
    ///
    /// let list = WordList::parse_from_str("dog\n\n  Cat \nDOG\n");
    /// assert_eq!(list.words(), ["CAT", "DOG"]);
    /// ```
    #[must_use]
    pub fn parse_from_str(contents: &str) -> Self {
        contents
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect()
    }

    /// Reads and parses a word list file.
    ///
    /// # Errors
    ///
    /// Returns a [`WordListError`] if the file at `path` cannot be read.
    pub fn load_from_path<P>(path: P) -> Result<Self, WordListError>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| WordListError {
            path: path.to_owned(),
            source,
        })?;
        let list = Self::parse_from_str(&contents);
        log::info!("loaded {} words from {}", list.len(), path.display());
        Ok(list)
    }

    /// Returns the words in sorted order.
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Returns the number of words.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns `true` if the list holds no words.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Returns `true` if `word` is present, compared exactly.
    ///
    /// `word` must already be upper-case.
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words
            .binary_search_by(|probe| probe.as_str().cmp(word))
            .is_ok()
    }
}

impl<S> FromIterator<S> for WordList
where
    S: AsRef<str>,
{
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut words: Vec<String> = iter
            .into_iter()
            .map(|word| word.as_ref().to_uppercase())
            .collect();
        words.sort();
        words.dedup();
        Self { words }
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_parse_normalizes_and_sorts() {
        let list = WordList::parse_from_str("zebra\nApple\n\n  mango  \napple\n");
        assert_eq!(list.words(), ["APPLE", "MANGO", "ZEBRA"]);
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn test_parse_empty_input() {
        assert!(WordList::parse_from_str("").is_empty());
        assert!(WordList::parse_from_str("\n \n").is_empty());
    }

    #[test]
    fn test_contains_is_exact() {
        let list = WordList::parse_from_str("ARC\nCAT\nDOG");
        assert!(list.contains("ARC"));
        assert!(list.contains("DOG"));
        assert!(!list.contains("AR"));
        assert!(!list.contains("CATS"));
        assert!(!list.contains("cat"));
    }

    #[test]
    fn test_load_missing_file_reports_path() {
        let path = std::env::temp_dir().join("wordgrid-no-such-word-list.txt");
        let err = WordList::load_from_path(&path).unwrap_err();
        assert_eq!(err.path(), path);
        assert!(err.to_string().contains("wordgrid-no-such-word-list.txt"));
    }

    #[test]
    fn test_load_from_path() {
        let path = std::env::temp_dir().join(format!("wordgrid-words-{}.txt", std::process::id()));
        std::fs::write(&path, "dog\ncat\n").unwrap();
        let list = WordList::load_from_path(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(list.words(), ["CAT", "DOG"]);
    }

    proptest! {
        #[test]
        fn every_listed_word_is_found(words in prop::collection::vec("[a-z]{1,6}", 0..30)) {
            let list: WordList = words.iter().collect();
            prop_assert!(list.words().windows(2).all(|w| w[0] < w[1]));
            for word in &words {
                prop_assert!(list.contains(&word.to_uppercase()));
            }
        }
    }
}
