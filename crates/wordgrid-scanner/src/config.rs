use crate::ScanError;

/// Settings for a [`WordScanner`](crate::WordScanner).
///
/// # Examples
///
/// ```
/// use wordgrid_scanner::ScanConfig;
///
/// let config = ScanConfig::default().with_min_word_length(4).with_workers(2);
/// assert_eq!(config.min_word_length, 4);
/// assert_eq!(config.workers, 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanConfig {
    /// Shortest candidate, in characters, that is sent to the oracle.
    pub min_word_length: usize,
    /// Maximum number of oracle calls in flight at once.
    pub workers: usize,
}

impl ScanConfig {
    /// Default minimum word length.
    pub const DEFAULT_MIN_WORD_LENGTH: usize = 3;

    /// Default number of validation workers.
    pub const DEFAULT_WORKERS: usize = 8;

    /// Replaces the minimum word length.
    #[must_use]
    pub fn with_min_word_length(mut self, min_word_length: usize) -> Self {
        self.min_word_length = min_word_length;
        self
    }

    /// Replaces the number of validation workers.
    #[must_use]
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    /// Checks that every setting is usable.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError::InvalidConfig`] if the minimum word length or the worker
    /// count is zero.
    pub fn validate(&self) -> Result<(), ScanError> {
        if self.min_word_length == 0 {
            return Err(ScanError::InvalidConfig {
                reason: "minimum word length must be at least 1",
            });
        }
        if self.workers == 0 {
            return Err(ScanError::InvalidConfig {
                reason: "at least one validation worker is required",
            });
        }
        Ok(())
    }
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            min_word_length: Self::DEFAULT_MIN_WORD_LENGTH,
            workers: Self::DEFAULT_WORKERS,
        }
    }
}
