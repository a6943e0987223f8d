//! Consensus resolver implementation.
//!
//! Orchestrates the fan-out across endpoints and applies the agreement
//! rule implemented in [`super::quorum`].

use futures_util::future::join_all;
use std::{future::Future, hash::Hash, sync::Arc};
use tracing::{debug, warn};

use crate::{
    config::ResolverConfig,
    explorer::{
        consensus::quorum,
        endpoint::{EndpointConfig, ExplorerEndpoint},
        errors::ExplorerError,
        http_client::HttpClient,
    },
    types::{BlockHash, BlockInfo},
};

/// Resolves block metadata by agreement among multiple explorers.
///
/// Holds an ordered collection of [`ExplorerEndpoint`]s built once from
/// [`ResolverConfig`]. Every lookup is dispatched to all endpoints
/// concurrently; a value is returned only when at least two distinct
/// endpoints report it. The endpoint list is read-only after construction
/// and the resolver shares no mutable state across concurrent calls, so it
/// is freely reusable for the process lifetime.
pub struct ConsensusResolver {
    endpoints: Vec<Arc<ExplorerEndpoint>>,
}

impl ConsensusResolver {
    /// Creates a resolver from configuration.
    ///
    /// All endpoints share one HTTP client and the configured uniform
    /// timeout. Fewer than two configured URLs fall back to the built-in
    /// public explorer list; the resolver never operates on a single,
    /// unverifiable source.
    ///
    /// # Errors
    ///
    /// Returns an error if the shared HTTP client fails to build.
    pub fn new(config: &ResolverConfig) -> Result<Self, ExplorerError> {
        let http_client = Arc::new(HttpClient::new()?);

        let endpoints = config
            .effective_urls()
            .into_iter()
            .map(|url| {
                Arc::new(ExplorerEndpoint::new(
                    EndpointConfig { url, timeout_seconds: config.timeout_seconds },
                    Arc::clone(&http_client),
                ))
            })
            .collect();

        Ok(Self { endpoints })
    }

    /// Returns the configured endpoints, in agreement-scan order.
    #[must_use]
    pub fn endpoints(&self) -> &[Arc<ExplorerEndpoint>] {
        &self.endpoints
    }

    /// Resolves the block hash for a block height.
    ///
    /// # Errors
    ///
    /// Returns [`ExplorerError::NoAgreement`] if fewer than two endpoints
    /// returned the same hash; per-endpoint failures are contained and
    /// never surface individually.
    pub async fn block_hash(&self, height: u64) -> Result<BlockHash, ExplorerError> {
        self.resolve_agreed("block_hash", |endpoint| async move {
            endpoint.block_hash(height).await
        })
        .await
    }

    /// Resolves the merkle root and timestamp for a block hash.
    ///
    /// Agreement compares the `(merkle_root, time)` pair by full structural
    /// equality.
    ///
    /// # Errors
    ///
    /// Returns [`ExplorerError::NoAgreement`] if fewer than two endpoints
    /// returned the same pair.
    pub async fn block_info(&self, hash: &str) -> Result<BlockInfo, ExplorerError> {
        self.resolve_agreed("block_info", |endpoint| async move {
            endpoint.block_info(hash).await
        })
        .await
    }

    /// Shared fan-out and agreement path for both lookup operations.
    ///
    /// Each endpoint call is wrapped so that any failure yields an absent
    /// slot instead of aborting the batch; the batch always settles fully
    /// before the scan. `join_all` yields results in endpoint-configuration
    /// order, which makes the agreement scan deterministic for a fixed set
    /// of endpoint responses regardless of arrival timing.
    async fn resolve_agreed<T, F, Fut>(
        &self,
        operation: &'static str,
        call: F,
    ) -> Result<T, ExplorerError>
    where
        T: Eq + Hash + Clone,
        F: Fn(Arc<ExplorerEndpoint>) -> Fut,
        Fut: Future<Output = Result<T, ExplorerError>>,
    {
        debug!(operation, endpoint_count = self.endpoints.len(), "dispatching explorer fan-out");

        let queries = self.endpoints.iter().map(|endpoint| {
            let endpoint = Arc::clone(endpoint);
            let query = call(Arc::clone(&endpoint));
            async move {
                match query.await {
                    Ok(value) => Some(value),
                    Err(e) => {
                        warn!(
                            endpoint = %endpoint.config().url,
                            operation,
                            error = %e,
                            "explorer query failed"
                        );
                        None
                    }
                }
            }
        });

        let results = join_all(queries).await;

        quorum::first_agreement(&results).ok_or(ExplorerError::NoAgreement)
    }
}
