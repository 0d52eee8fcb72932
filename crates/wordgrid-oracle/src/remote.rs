use std::time::Duration;

use url::Url;

use crate::{OracleError, WordOracle};

/// Settings for [`RemoteOracle`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteConfig {
    /// Dictionary URL; the lower-cased word is appended to its path as one segment.
    pub endpoint: String,
    /// Upper bound on a single lookup, connection included.
    pub timeout: Duration,
}

impl RemoteConfig {
    /// Endpoint of the free dictionary API.
    pub const DEFAULT_ENDPOINT: &'static str = "https://api.dictionaryapi.dev/api/v2/entries/en/";

    /// Default per-lookup timeout.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Replaces the endpoint.
    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Replaces the per-lookup timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            endpoint: Self::DEFAULT_ENDPOINT.to_owned(),
            timeout: Self::DEFAULT_TIMEOUT,
        }
    }
}

/// Errors returned when a dictionary endpoint cannot be used.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum EndpointError {
    /// The endpoint is not a URL.
    #[display("invalid dictionary endpoint '{endpoint}': {source}")]
    Parse {
        /// The endpoint as configured.
        endpoint: String,
        /// Why it could not be parsed.
        source: url::ParseError,
    },
    /// The endpoint is a URL without a path to append the word to, like `mailto:`.
    #[display("dictionary endpoint '{endpoint}' cannot take a word path")]
    NotHierarchical {
        /// The endpoint as configured.
        endpoint: String,
    },
}

/// A word oracle that asks a remote dictionary service about every word.
///
/// Each query is one `GET {endpoint}{word}` request. A successful response means the
/// word exists, `403` and `429` mean the service is rate limiting (fatal), and any
/// other status means the word is unknown.
#[derive(Debug)]
pub struct RemoteOracle {
    agent: ureq::Agent,
    endpoint: Url,
    config: RemoteConfig,
}

impl RemoteOracle {
    /// Creates an oracle issuing requests according to `config`.
    ///
    /// # Errors
    ///
    /// Returns an [`EndpointError`] if `config.endpoint` is not a URL a word can be
    /// appended to.
    pub fn new(config: RemoteConfig) -> Result<Self, EndpointError> {
        let endpoint = Url::parse(&config.endpoint).map_err(|source| EndpointError::Parse {
            endpoint: config.endpoint.clone(),
            source,
        })?;
        if endpoint.cannot_be_a_base() {
            return Err(EndpointError::NotHierarchical {
                endpoint: config.endpoint,
            });
        }
        let agent = ureq::AgentBuilder::new()
            .timeout(config.timeout)
            .user_agent(concat!("wordgrid/", env!("CARGO_PKG_VERSION")))
            .build();
        Ok(Self {
            agent,
            endpoint,
            config,
        })
    }

    /// Returns the configuration this oracle was built with.
    #[must_use]
    pub fn config(&self) -> &RemoteConfig {
        &self.config
    }

    /// Appends the lower-cased `word` to the endpoint path as one encoded segment.
    fn lookup_url(&self, word: &str) -> Url {
        let mut url = self.endpoint.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(&word.to_lowercase());
        }
        url
    }
}

/// Maps an HTTP status of a lookup response to the oracle's answer.
fn classify_status(status: u16) -> Result<bool, OracleError> {
    match status {
        200..=299 => Ok(true),
        403 | 429 => Err(OracleError::RateLimited { status }),
        _ => Ok(false),
    }
}

impl WordOracle for RemoteOracle {
    fn is_valid(&self, word: &str) -> Result<bool, OracleError> {
        let url = self.lookup_url(word);
        let status = match self.agent.request_url("GET", &url).call() {
            Ok(response) => response.status(),
            Err(ureq::Error::Status(status, _)) => status,
            Err(ureq::Error::Transport(transport)) => {
                return Err(OracleError::Transport {
                    message: transport.to_string(),
                });
            }
        };
        log::trace!("lookup {word}: HTTP {status}");
        classify_status(status)
    }
}
