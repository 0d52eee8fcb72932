//! Word oracles answering "is this string a valid word?".
//!
//! The scanner only depends on the [`WordOracle`] trait. Two backends implement it:
//!
//! - [`LocalOracle`]: exact membership in a sorted, upper-cased [`WordList`]
//! - [`RemoteOracle`]: one HTTP lookup per query against a dictionary service
//!
//! [`Oracle`] wraps both so that the backend is chosen once, at configuration time.
//!
//! # Examples
//!
//! ```
//! use wordgrid_oracle::{LocalOracle, WordList, WordOracle as _};
//!
//! let oracle = LocalOracle::new(WordList::parse_from_str("cat\ndog\n"));
//! assert!(oracle.is_valid("CAT")?);
//! assert!(!oracle.is_valid("CA")?);
//! # Ok::<(), wordgrid_oracle::OracleError>(())
//! ```

use std::sync::Arc;

pub use self::{
    local::LocalOracle,
    remote::{EndpointError, RemoteConfig, RemoteOracle},
    word_list::{WordList, WordListError},
};

mod local;
mod remote;
mod word_list;

/// Fatal failures of a word oracle.
///
/// A word that is simply not in the dictionary is not an error; it is reported as
/// `Ok(false)`.
#[derive(
    Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::IsVariant,
)]
pub enum OracleError {
    /// The dictionary service refused the request because of its rate limit.
    #[display("dictionary service is rate limiting requests (HTTP {status}), please try again later")]
    RateLimited {
        /// HTTP status reported by the service.
        status: u16,
    },
    /// The dictionary service could not be reached.
    #[display("dictionary lookup failed: {message}")]
    Transport {
        /// Description of the transport failure.
        message: String,
    },
}

/// A capability answering word-validity queries.
///
/// Implementations must be shareable across the scanner's worker threads.
pub trait WordOracle: Send + Sync {
    /// Returns whether `word` is a valid word.
    ///
    /// # Errors
    ///
    /// Returns an [`OracleError`] when the answer cannot be obtained. Every such
    /// error is fatal to the scan that issued the query.
    fn is_valid(&self, word: &str) -> Result<bool, OracleError>;
}

impl<T> WordOracle for &T
where
    T: WordOracle + ?Sized,
{
    fn is_valid(&self, word: &str) -> Result<bool, OracleError> {
        (**self).is_valid(word)
    }
}

impl<T> WordOracle for Box<T>
where
    T: WordOracle + ?Sized,
{
    fn is_valid(&self, word: &str) -> Result<bool, OracleError> {
        (**self).is_valid(word)
    }
}

impl<T> WordOracle for Arc<T>
where
    T: WordOracle + ?Sized,
{
    fn is_valid(&self, word: &str) -> Result<bool, OracleError> {
        (**self).is_valid(word)
    }
}

/// A word oracle backend selected at configuration time.
#[derive(Debug)]
pub enum Oracle {
    /// Membership test against a loaded word list.
    Local(LocalOracle),
    /// Lookups against a remote dictionary service.
    Remote(RemoteOracle),
}

impl Oracle {
    /// Returns a short name for the selected backend, for logging.
    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        match self {
            Self::Local(_) => "local",
            Self::Remote(_) => "remote",
        }
    }
}

impl WordOracle for Oracle {
    fn is_valid(&self, word: &str) -> Result<bool, OracleError> {
        match self {
            Self::Local(oracle) => oracle.is_valid(word),
            Self::Remote(oracle) => oracle.is_valid(word),
        }
    }
}

impl From<LocalOracle> for Oracle {
    fn from(oracle: LocalOracle) -> Self {
        Self::Local(oracle)
    }
}

impl From<RemoteOracle> for Oracle {
    fn from(oracle: RemoteOracle) -> Self {
        Self::Remote(oracle)
    }
}
