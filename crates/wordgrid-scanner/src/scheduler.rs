use std::sync::mpsc;

use rayon::{ThreadPool, prelude::*};
use wordgrid_core::{Line, candidate};
use wordgrid_oracle::{OracleError, WordOracle};

use crate::{ScanObserver, bucket::LineBucket, progress::ScanProgress};

/// Validates the candidates of one line at a time.
///
/// Candidates sharing a start offset are validated concurrently on the worker pool,
/// and the group is joined before the next offset starts. Workers only answer
/// "valid or not"; confirmed words travel over a channel to the calling thread,
/// which is the only writer of the line's bucket.
pub(crate) struct ValidationScheduler<'a, O>
where
    O: WordOracle + ?Sized,
{
    pub(crate) oracle: &'a O,
    pub(crate) pool: &'a ThreadPool,
    pub(crate) min_word_length: usize,
    pub(crate) progress: &'a ScanProgress,
    pub(crate) observer: &'a dyn ScanObserver,
}

impl<O> ValidationScheduler<'_, O>
where
    O: WordOracle + ?Sized,
{
    /// Validates every candidate of `line` and returns its ranked words.
    ///
    /// The first oracle error stops the line; candidates already running finish, but
    /// no further offset group is started.
    pub(crate) fn validate_line(&self, line: &Line) -> Result<Vec<String>, OracleError> {
        let mut bucket = LineBucket::new();

        for group in candidate::candidate_groups(line, self.min_word_length) {
            let (tx, rx) = mpsc::channel::<String>();

            self.pool.install(|| {
                group
                    .candidates
                    .into_par_iter()
                    .try_for_each_with(tx, |tx, candidate| {
                        let valid = self.oracle.is_valid(&candidate.text)?;
                        let completed = self.progress.advance();
                        self.observer.on_progress(completed, self.progress.total());
                        if valid {
                            let _ = tx.send(candidate.text);
                        }
                        Ok(())
                    })
            })?;

            for word in rx.try_iter() {
                if bucket.insert(word.clone()) {
                    self.observer.on_match(line.direction(), line.index(), &word);
                }
            }
        }

        log::trace!(
            "line {} ({}) done: {} words",
            line.index(),
            line.direction(),
            bucket.len()
        );
        Ok(bucket.into_ranked())
    }
}
