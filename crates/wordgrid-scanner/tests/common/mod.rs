//! Oracles shared across the scanner integration tests.

#![allow(dead_code)]

use std::{collections::HashSet, thread, time::Duration};

use portable_atomic::{AtomicUsize, Ordering};
use wordgrid_core::{Direction, Grid};
use wordgrid_oracle::{OracleError, WordOracle};
use wordgrid_scanner::{ResultSet, ScanConfig, ScanError, WordScanner};

/// Answers from a fixed word set and counts every query.
#[derive(Debug, Default)]
pub struct MemoryOracle {
    words: HashSet<String>,
    calls: AtomicUsize,
    jitter: bool,
}

impl MemoryOracle {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Delays each answer by a word-dependent amount so workers finish out of order.
    #[must_use]
    pub fn with_jitter(mut self) -> Self {
        self.jitter = true;
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::Relaxed)
    }
}

impl WordOracle for MemoryOracle {
    fn is_valid(&self, word: &str) -> Result<bool, OracleError> {
        self.calls.fetch_add(1, Ordering::Relaxed);
        if self.jitter {
            let delay = word.bytes().map(u64::from).sum::<u64>() % 7;
            thread::sleep(Duration::from_micros(delay * 50));
        }
        Ok(self.words.contains(word))
    }
}

/// Fails every query the way a throttled dictionary service does.
#[derive(Debug, Default)]
pub struct RateLimitedOracle {
    calls: AtomicUsize,
}

impl RateLimitedOracle {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::Relaxed)
    }
}

impl WordOracle for RateLimitedOracle {
    fn is_valid(&self, _word: &str) -> Result<bool, OracleError> {
        self.calls.fetch_add(1, Ordering::Relaxed);
        Err(OracleError::RateLimited { status: 403 })
    }
}

pub fn grid(rows: &[&str]) -> Grid {
    Grid::new(rows.iter().map(|row| row.chars().collect()).collect()).unwrap()
}

pub fn words(words: &[&str]) -> Vec<String> {
    words.iter().map(|&w| w.to_owned()).collect()
}

pub fn scan<O>(
    oracle: O,
    grid: &Grid,
    directions: &[Direction],
    config: ScanConfig,
) -> Result<ResultSet, ScanError>
where
    O: WordOracle,
{
    WordScanner::new(oracle, config)?.scan(grid, directions)
}
