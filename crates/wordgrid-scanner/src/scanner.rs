use rayon::{ThreadPool, ThreadPoolBuilder};
use wordgrid_core::{Direction, Grid, candidate::candidate_count};
use wordgrid_oracle::WordOracle;

use crate::{
    DirectionResults, NoopObserver, ResultSet, ScanConfig, ScanError, ScanObserver,
    progress::ScanProgress, scheduler::ValidationScheduler,
};

/// Finds oracle-confirmed words in the lines of a grid.
///
/// Lines are processed one after another. Within a line, candidates sharing a start
/// offset are validated concurrently on a fixed-width worker pool, so at most
/// [`ScanConfig::workers`] oracle calls are in flight at any time.
///
/// # Examples
///
/// ```
/// use wordgrid_core::{Direction, Grid};
/// use wordgrid_oracle::{LocalOracle, WordList};
/// use wordgrid_scanner::{ScanConfig, WordScanner};
///
/// let oracle = LocalOracle::new(WordList::parse_from_str("cat\ndog\narc"));
/// let scanner = WordScanner::new(oracle, ScanConfig::default())?;
///
/// let grid: Grid = "CAT\nDOG\nARC".parse()?;
/// let results = scanner.scan(&grid, &[Direction::Right])?;
/// assert_eq!(results.line(Direction::Right, 1), Some(&["DOG".to_owned()][..]));
/// # Ok::<(), wordgrid_scanner::ScanError>(())
/// ```
#[derive(Debug)]
pub struct WordScanner<O> {
    oracle: O,
    config: ScanConfig,
    pool: ThreadPool,
}

impl<O> WordScanner<O>
where
    O: WordOracle,
{
    /// Creates a scanner querying `oracle` with the given settings.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError::InvalidConfig`] if `config` is not usable, and
    /// [`ScanError::WorkerPool`] if the worker threads cannot be started.
    pub fn new(oracle: O, config: ScanConfig) -> Result<Self, ScanError> {
        config.validate()?;
        let pool = ThreadPoolBuilder::new()
            .num_threads(config.workers)
            .thread_name(|i| format!("wordgrid-validate-{i}"))
            .build()?;
        Ok(Self {
            oracle,
            config,
            pool,
        })
    }

    /// Returns the scan settings.
    #[must_use]
    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    /// Returns the oracle.
    #[must_use]
    pub fn oracle(&self) -> &O {
        &self.oracle
    }

    /// Scans `grid` in every direction of `directions`.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError::Oracle`] if any oracle call fails.
    pub fn scan(&self, grid: &Grid, directions: &[Direction]) -> Result<ResultSet, ScanError> {
        self.scan_with_observer(grid, directions, &NoopObserver)
    }

    /// Validates `rows` as a grid, then scans it.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError::InvalidGrid`] before any oracle call if `rows` is empty or
    /// ragged, and [`ScanError::Oracle`] if any oracle call fails.
    pub fn scan_rows(
        &self,
        rows: Vec<Vec<char>>,
        directions: &[Direction],
    ) -> Result<ResultSet, ScanError> {
        let grid = Grid::new(rows)?;
        self.scan(&grid, directions)
    }

    /// Scans `grid` in every direction of `directions`, reporting events to
    /// `observer`.
    ///
    /// Each direction is scanned to completion before the next one starts. A
    /// direction requested more than once is scanned once.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError::Oracle`] if any oracle call fails; no partial result is
    /// returned.
    pub fn scan_with_observer(
        &self,
        grid: &Grid,
        directions: &[Direction],
        observer: &dyn ScanObserver,
    ) -> Result<ResultSet, ScanError> {
        let mut unique = Vec::with_capacity(directions.len());
        for &direction in directions {
            if unique.contains(&direction) {
                log::warn!("direction {direction} requested more than once, scanning it once");
            } else {
                unique.push(direction);
            }
        }

        let total = total_candidates(grid, &unique, self.config.min_word_length);
        let progress = ScanProgress::new(total);
        log::info!(
            "scanning {}x{} grid in {} direction(s), {total} candidates",
            grid.line_count(),
            grid.column_count(),
            unique.len(),
        );

        let mut results = ResultSet::default();
        for direction in unique {
            let found = self.scan_direction_with(grid, direction, &progress, observer)?;
            results.insert(direction, found);
        }
        log::info!(
            "scan finished: {} word(s) after {} of {} candidates",
            results.total_matches(),
            progress.completed(),
            progress.total(),
        );
        Ok(results)
    }

    /// Scans `grid` in a single direction.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError::Oracle`] if any oracle call fails.
    pub fn scan_direction(
        &self,
        grid: &Grid,
        direction: Direction,
    ) -> Result<DirectionResults, ScanError> {
        let total = total_candidates(grid, &[direction], self.config.min_word_length);
        self.scan_direction_with(grid, direction, &ScanProgress::new(total), &NoopObserver)
    }

    fn scan_direction_with(
        &self,
        grid: &Grid,
        direction: Direction,
        progress: &ScanProgress,
        observer: &dyn ScanObserver,
    ) -> Result<DirectionResults, ScanError> {
        let scheduler = ValidationScheduler {
            oracle: &self.oracle,
            pool: &self.pool,
            min_word_length: self.config.min_word_length,
            progress,
            observer,
        };

        log::info!("scanning {direction}");
        let mut results = DirectionResults::with_lines(grid.lines_in(direction));
        for line in grid.lines(direction) {
            let words = scheduler.validate_line(&line)?;
            results.set_line(line.index(), words);
        }
        log::info!(
            "{direction}: {} word(s) in {} line(s)",
            results.total_matches(),
            results.len()
        );
        Ok(results)
    }
}

/// Returns how many candidates a scan of `grid` in `directions` validates.
///
/// This is the denominator of the progress counter.
#[must_use]
pub fn total_candidates(grid: &Grid, directions: &[Direction], min_word_length: usize) -> usize {
    directions
        .iter()
        .map(|&direction| {
            grid.lines_in(direction) * candidate_count(grid.line_len(direction), min_word_length)
        })
        .sum()
}
