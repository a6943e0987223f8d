use thiserror::Error;

/// Errors produced by explorer queries and agreement resolution.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ExplorerError {
    /// Explorer returned a well-formed payload declaring zero size.
    #[error("explorer returned an empty payload")]
    EmptyResponse,

    /// Request exceeded the configured timeout duration.
    #[error("request timeout")]
    Timeout,

    /// Non-success HTTP status from the explorer.
    #[error("HTTP error: {0}")]
    Http(u16),

    /// Network-level error from the underlying HTTP client.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Response body could not be parsed or failed schema validation.
    #[error("invalid response: {0}")]
    InvalidResponse(String),

    /// Fewer than two endpoints returned the same value for the query.
    ///
    /// This is the only error that crosses the resolver's public boundary;
    /// all other variants are contained within the endpoint layer and only
    /// affect whether that endpoint's value participates in the agreement
    /// scan.
    #[error("no agreement among explorers")]
    NoAgreement,
}

impl ExplorerError {
    /// Returns `true` for failures that make a single endpoint unusable
    /// for the current query: transport errors, non-2xx statuses,
    /// timeouts, and malformed or schema-invalid bodies.
    ///
    /// An [`EmptyResponse`](Self::EmptyResponse) is a distinct condition:
    /// the endpoint answered correctly but had nothing to report.
    #[must_use]
    pub fn is_unreachable(&self) -> bool {
        matches!(
            self,
            Self::Timeout | Self::Http(_) | Self::Network(_) | Self::InvalidResponse(_)
        )
    }
}
