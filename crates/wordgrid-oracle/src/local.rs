use crate::{OracleError, WordList, WordOracle};

/// A word oracle backed by an in-memory [`WordList`].
///
/// Queries are upper-cased and looked up with an exact binary search, so every
/// listed word is found, including the first one in sort order.
#[derive(Debug, Clone, Default)]
pub struct LocalOracle {
    words: WordList,
}

impl LocalOracle {
    /// Creates an oracle answering from `words`.
    #[must_use]
    pub fn new(words: WordList) -> Self {
        Self { words }
    }

    /// Returns the backing word list.
    #[must_use]
    pub fn words(&self) -> &WordList {
        &self.words
    }
}

impl WordOracle for LocalOracle {
    fn is_valid(&self, word: &str) -> Result<bool, OracleError> {
        let found = if word.chars().any(char::is_lowercase) {
            self.words.contains(&word.to_uppercase())
        } else {
            self.words.contains(word)
        };
        Ok(found)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn oracle(words: &str) -> LocalOracle {
        LocalOracle::new(WordList::parse_from_str(words))
    }

    #[test]
    fn test_first_word_in_sort_order_is_found() {
        let oracle = oracle("ARC\nCAT\nDOG");
        assert_eq!(oracle.words().words()[0], "ARC");
        assert_eq!(oracle.is_valid("ARC"), Ok(true));
    }

    #[test]
    fn test_single_word_list() {
        assert_eq!(oracle("CAT").is_valid("CAT"), Ok(true));
    }

    #[test]
    fn test_query_is_case_insensitive() {
        let oracle = oracle("dog");
        assert_eq!(oracle.is_valid("dog"), Ok(true));
        assert_eq!(oracle.is_valid("Dog"), Ok(true));
    }

    #[test]
    fn test_prefixes_and_extensions_are_rejected() {
        let oracle = oracle("CAT\nCATS");
        assert_eq!(oracle.is_valid("CA"), Ok(false));
        assert_eq!(oracle.is_valid("CATSS"), Ok(false));
        assert_eq!(oracle.is_valid(""), Ok(false));
    }

    #[test]
    fn test_empty_list_finds_nothing() {
        assert_eq!(LocalOracle::default().is_valid("CAT"), Ok(false));
    }
}
