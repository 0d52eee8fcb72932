//! Test utilities for scanner components.

use std::collections::{HashMap, HashSet};

use portable_atomic::{AtomicUsize, Ordering};
use wordgrid_oracle::{OracleError, WordOracle};

/// An in-memory oracle that counts its calls and can be told to fail on given words.
#[derive(Debug, Default)]
pub(crate) struct FakeOracle {
    words: HashSet<String>,
    failures: HashMap<String, OracleError>,
    calls: AtomicUsize,
}

impl FakeOracle {
    pub(crate) fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Makes every query for `word` fail with `error`.
    #[must_use]
    pub(crate) fn failing_on(mut self, word: &str, error: OracleError) -> Self {
        self.failures.insert(word.to_owned(), error);
        self
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::Relaxed)
    }
}

impl WordOracle for FakeOracle {
    fn is_valid(&self, word: &str) -> Result<bool, OracleError> {
        self.calls.fetch_add(1, Ordering::Relaxed);
        if let Some(error) = self.failures.get(word) {
            return Err(error.clone());
        }
        Ok(self.words.contains(word))
    }
}
