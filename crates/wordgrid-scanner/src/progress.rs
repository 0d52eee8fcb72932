//! Progress accounting and scan events.
//!
//! Events are observational only; nothing an observer does affects the scan.

use portable_atomic::{AtomicUsize, Ordering};
use wordgrid_core::Direction;

/// Receives events while a scan runs.
///
/// `on_progress` is called from validation workers, possibly concurrently.
/// `on_match` is called by the writer that owns the line's results, once per
/// distinct word per line.
pub trait ScanObserver: Sync {
    /// A candidate has been resolved; `completed` of `total` are done.
    fn on_progress(&self, completed: usize, total: usize) {
        let _ = (completed, total);
    }

    /// `word` was confirmed in line `line` read in `direction`.
    fn on_match(&self, direction: Direction, line: usize, word: &str) {
        let _ = (direction, line, word);
    }
}

/// An observer that ignores every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl ScanObserver for NoopObserver {}

/// An observer that reports events through the `log` facade.
///
/// Progress is logged at `info` level whenever it crosses a whole percent; matches
/// are logged at `debug` level.
#[derive(Debug, Default)]
pub struct LogObserver {
    last_percent: AtomicUsize,
}

impl LogObserver {
    /// Creates a new observer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl ScanObserver for LogObserver {
    fn on_progress(&self, completed: usize, total: usize) {
        if total == 0 {
            return;
        }
        let percent = completed * 100 / total;
        if self.last_percent.fetch_max(percent, Ordering::Relaxed) < percent {
            log::info!("{percent}% finished ({completed}/{total} candidates)");
        }
    }

    fn on_match(&self, direction: Direction, line: usize, word: &str) {
        log::debug!("word found: {word} ({direction}, line {line})");
    }
}

/// Shared counter of resolved candidates.
#[derive(Debug)]
pub(crate) struct ScanProgress {
    completed: AtomicUsize,
    total: usize,
}

impl ScanProgress {
    pub(crate) fn new(total: usize) -> Self {
        Self {
            completed: AtomicUsize::new(0),
            total,
        }
    }

    /// Records one resolved candidate and returns the new completed count.
    pub(crate) fn advance(&self) -> usize {
        self.completed.fetch_add(1, Ordering::Relaxed) + 1
    }

    pub(crate) fn completed(&self) -> usize {
        self.completed.load(Ordering::Relaxed)
    }

    pub(crate) fn total(&self) -> usize {
        self.total
    }
}
