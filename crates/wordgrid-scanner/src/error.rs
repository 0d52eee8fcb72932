use rayon::ThreadPoolBuildError;
use wordgrid_core::GridError;
use wordgrid_oracle::OracleError;

/// Errors that terminate a scan.
///
/// There is no partial result: a scan either covers every requested direction or
/// fails with one of these.
#[derive(
    Debug, derive_more::Display, derive_more::Error, derive_more::From, derive_more::IsVariant,
)]
pub enum ScanError {
    /// The grid is empty or not rectangular.
    #[display("invalid grid: {_0}")]
    InvalidGrid(#[from] GridError),
    /// The word oracle failed; remaining results would be incomplete.
    #[display("{_0}")]
    Oracle(#[from] OracleError),
    /// A scan setting is out of range.
    #[display("invalid scan configuration: {reason}")]
    InvalidConfig {
        /// Which setting is wrong.
        reason: &'static str,
    },
    /// The validation worker pool could not be started.
    #[display("failed to start validation workers: {_0}")]
    WorkerPool(#[from] ThreadPoolBuildError),
}
