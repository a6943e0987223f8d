use serde::Deserialize;
use std::{sync::Arc, time::Duration};

use crate::{
    explorer::{errors::ExplorerError, http_client::HttpClient},
    types::{BlockHash, BlockInfo},
};

/// Configuration for a single explorer endpoint.
#[derive(Debug, Clone)]
pub struct EndpointConfig {
    /// Explorer API base URL, e.g. `https://insight.bitpay.com/api`.
    pub url: String,
    /// Per-call timeout in seconds.
    pub timeout_seconds: u64,
}

/// Wire schema for `GET <base>/block-index/<height>`.
///
/// Fields are optional at the serde layer so that validation failures
/// become explicit errors instead of parse panics; see
/// [`ExplorerEndpoint::parse_block_index`].
#[derive(Debug, Deserialize)]
struct BlockIndexBody {
    #[serde(rename = "blockHash")]
    block_hash: Option<String>,
    #[serde(default)]
    size: Option<u64>,
}

/// Wire schema for `GET <base>/block/<hash>`.
///
/// Explorers return many more fields per block; only `merkleroot` and
/// `time` participate in agreement, the rest are ignored.
#[derive(Debug, Deserialize)]
struct BlockBody {
    merkleroot: Option<String>,
    time: Option<i64>,
    #[serde(default)]
    size: Option<u64>,
}

/// One block-explorer HTTP service.
///
/// Wraps a base URL and a shared [`HttpClient`]; each lookup issues exactly
/// one outbound GET with a bounded wait and translates the response into a
/// typed value or an [`ExplorerError`]. Endpoints hold no per-call state
/// and are immutable and reusable for the process lifetime.
pub struct ExplorerEndpoint {
    config: EndpointConfig,
    block_index_url: String,
    block_url: String,
    timeout: Duration,
    http_client: Arc<HttpClient>,
}

impl ExplorerEndpoint {
    /// Creates a new endpoint for the given explorer.
    ///
    /// The two lookup URL prefixes are precomputed here so per-call URL
    /// construction is a single append.
    #[must_use]
    pub fn new(config: EndpointConfig, http_client: Arc<HttpClient>) -> Self {
        let base = config.url.trim_end_matches('/');
        Self {
            block_index_url: format!("{base}/block-index"),
            block_url: format!("{base}/block"),
            timeout: Duration::from_secs(config.timeout_seconds),
            config,
            http_client,
        }
    }

    /// Returns a reference to the endpoint configuration.
    #[must_use]
    pub fn config(&self) -> &EndpointConfig {
        &self.config
    }

    /// Resolves the block hash for a block height.
    ///
    /// Issues `GET <base>/block-index/<height>`. The height is
    /// caller-supplied and not validated for existence.
    ///
    /// # Errors
    ///
    /// - [`ExplorerError::EmptyResponse`] if the payload declares zero size
    /// - [`ExplorerError::InvalidResponse`] for malformed bodies or a
    ///   missing `blockHash` field
    /// - [`ExplorerError::Timeout`], [`ExplorerError::Http`],
    ///   [`ExplorerError::Network`] for transport failures
    pub async fn block_hash(&self, height: u64) -> Result<BlockHash, ExplorerError> {
        let url = format!("{}/{height}", self.block_index_url);
        tracing::debug!(endpoint = %self.config.url, height, "querying block hash");

        let bytes = self.http_client.get_bytes(&url, self.timeout).await?;
        Self::parse_block_index(&bytes)
    }

    /// Resolves the merkle root and timestamp for a block hash.
    ///
    /// Issues `GET <base>/block/<hash>`; all response fields other than
    /// `merkleroot` and `time` are ignored.
    ///
    /// # Errors
    ///
    /// Same failure classes as [`block_hash`](Self::block_hash).
    pub async fn block_info(&self, hash: &str) -> Result<BlockInfo, ExplorerError> {
        let url = format!("{}/{hash}", self.block_url);
        tracing::debug!(endpoint = %self.config.url, hash, "querying block info");

        let bytes = self.http_client.get_bytes(&url, self.timeout).await?;
        Self::parse_block(&bytes)
    }

    fn parse_block_index(bytes: &[u8]) -> Result<BlockHash, ExplorerError> {
        let body: BlockIndexBody = serde_json::from_slice(bytes)
            .map_err(|e| ExplorerError::InvalidResponse(format!("invalid JSON: {e}")))?;

        if body.size == Some(0) {
            return Err(ExplorerError::EmptyResponse);
        }

        body.block_hash
            .map(BlockHash)
            .ok_or_else(|| ExplorerError::InvalidResponse("missing blockHash field".to_string()))
    }

    fn parse_block(bytes: &[u8]) -> Result<BlockInfo, ExplorerError> {
        let body: BlockBody = serde_json::from_slice(bytes)
            .map_err(|e| ExplorerError::InvalidResponse(format!("invalid JSON: {e}")))?;

        if body.size == Some(0) {
            return Err(ExplorerError::EmptyResponse);
        }

        match (body.merkleroot, body.time) {
            (Some(merkle_root), Some(time)) => Ok(BlockInfo { merkle_root, time }),
            _ => Err(ExplorerError::InvalidResponse(
                "missing merkleroot or time field".to_string(),
            )),
        }
    }
}
