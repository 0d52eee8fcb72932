//! Errors reported by the `wordgrid` binary.

use std::{io, path::PathBuf};

use wordgrid_core::{DirectionError, GridError};
use wordgrid_oracle::{EndpointError, WordListError};
use wordgrid_scanner::ScanError;

use crate::input;

/// Errors that end a `wordgrid` run.
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum CliError {
    /// A requested direction could not be parsed.
    #[display("{_0}; accepted directions are {}", input::accepted_directions())]
    Direction(#[from] DirectionError),
    /// The grid file could not be read.
    #[display("failed to read grid from '{}': {source}", path.display())]
    ReadGrid {
        /// Path given on the command line, `-` for standard input.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },
    /// The grid text does not describe a rectangular grid.
    #[display("invalid grid: {_0}")]
    Grid(#[from] GridError),
    /// The online dictionary endpoint is not usable.
    #[display("{_0}")]
    Endpoint(#[from] EndpointError),
    /// The local dictionary could not be loaded.
    #[display("{_0}")]
    WordList(#[from] WordListError),
    /// The scan failed.
    #[display("{_0}")]
    Scan(#[from] ScanError),
    /// The results could not be encoded as JSON.
    #[display("failed to encode results: {_0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// Returns the process exit status for this error.
    ///
    /// Bad direction or endpoint arguments are usage errors and exit with `2`, like
    /// the argument errors reported by the parser; every other failure exits with
    /// `1`.
    #[must_use]
    pub fn exit_status(&self) -> u8 {
        match self {
            Self::Direction(_) | Self::Endpoint(_) => 2,
            _ => 1,
        }
    }
}
