//! Building blocks of the `wordgrid` command-line tool.
//!
//! The binary reads a grid produced by a grid reader, picks a word oracle, scans the
//! requested directions and prints the words found in every line.

pub mod error;
pub mod input;
pub mod output;
pub mod version;

pub use self::error::CliError;
