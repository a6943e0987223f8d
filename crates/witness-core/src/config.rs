//! Resolver configuration.
//!
//! Configuration is supplied once at construction time. The library reads
//! no files and no environment variables itself; [`ResolverConfig`]
//! derives `Deserialize` so a surrounding application can embed it in its
//! own configuration file.
//!
//! # Validation
//!
//! Agreement requires at least two independent sources, so a configuration
//! with fewer than [`MIN_ENDPOINTS`] URLs falls back to the built-in
//! public explorer list rather than operating with a single, unverifiable
//! source.

use serde::{Deserialize, Serialize};

/// Built-in public explorer APIs, used when the caller supplies fewer
/// than [`MIN_ENDPOINTS`] endpoint URLs.
pub const DEFAULT_EXPLORER_URLS: &[&str] = &[
    "https://www.localbitcoinschain.com/api",
    "https://search.bitaccess.co/insight-api",
    "https://insight.bitpay.com/api",
    "https://btc-bitcore1.trezor.io/api",
    "https://btc-bitcore4.trezor.io/api",
    "https://blockexplorer.com/api",
];

/// Default per-endpoint request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 10;

/// Minimum number of endpoints for agreement to be possible at all.
pub const MIN_ENDPOINTS: usize = 2;

/// Configuration for a [`ConsensusResolver`].
///
/// [`ConsensusResolver`]: crate::explorer::ConsensusResolver
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolverConfig {
    /// Explorer API base URLs, queried in this order. Defaults to
    /// [`DEFAULT_EXPLORER_URLS`].
    #[serde(default = "default_urls")]
    pub urls: Vec<String>,

    /// Request timeout in seconds, applied uniformly to every endpoint
    /// call. Defaults to [`DEFAULT_TIMEOUT_SECONDS`].
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

fn default_urls() -> Vec<String> {
    DEFAULT_EXPLORER_URLS.iter().map(|url| (*url).to_string()).collect()
}

fn default_timeout_seconds() -> u64 {
    DEFAULT_TIMEOUT_SECONDS
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self { urls: default_urls(), timeout_seconds: default_timeout_seconds() }
    }
}

impl ResolverConfig {
    /// Creates a configuration with the given endpoint URLs and the
    /// default timeout.
    #[must_use]
    pub fn with_urls(urls: Vec<String>) -> Self {
        Self { urls, timeout_seconds: default_timeout_seconds() }
    }

    /// Returns the endpoint URLs the resolver will actually query.
    ///
    /// Fewer than [`MIN_ENDPOINTS`] configured URLs yield the built-in
    /// default list instead.
    #[must_use]
    pub fn effective_urls(&self) -> Vec<String> {
        if self.urls.len() >= MIN_ENDPOINTS {
            self.urls.clone()
        } else {
            default_urls()
        }
    }
}
