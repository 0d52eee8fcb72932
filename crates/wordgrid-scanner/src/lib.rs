//! Concurrent validation of grid candidates against a word oracle.
//!
//! [`WordScanner`] drives a scan: for each requested [`Direction`] it extracts every
//! line of the grid, enumerates the line's candidates, validates them on a bounded
//! worker pool and collects the distinct confirmed words of each line, ranked
//! longest first, into a [`ResultSet`].
//!
//! [`Direction`]: wordgrid_core::Direction

pub use self::{
    config::ScanConfig,
    error::ScanError,
    progress::{LogObserver, NoopObserver, ScanObserver},
    result::{DirectionResults, ResultSet},
    scanner::{WordScanner, total_candidates},
};

mod bucket;
mod config;
mod error;
pub mod progress;
pub mod result;
mod scanner;
mod scheduler;

#[cfg(test)]
mod testing;
