use bytes::Bytes;
use reqwest::{header, Client, ClientBuilder};
use std::time::Duration;

use crate::explorer::errors::ExplorerError;

/// Fixed client identifier sent as the `User-Agent` on every request.
pub const CLIENT_IDENT: &str = "blockwitness/0.1.0";

/// Connection establishment timeout, separate from the per-call request
/// timeout supplied by the endpoint.
const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Thin HTTP GET client shared by all explorer endpoints.
///
/// Holds a single `reqwest::Client`; endpoints supply the URL and the
/// per-call timeout. Exactly one request goes out per call: no retries,
/// no redirects, no caching.
pub struct HttpClient {
    client: Client,
}

// Note: Default is intentionally NOT implemented because HttpClient::new()
// can fail. Callers should handle the Result explicitly.

impl HttpClient {
    /// Creates a new HTTP client.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying reqwest client fails to build.
    pub fn new() -> Result<Self, ExplorerError> {
        let client = ClientBuilder::new()
            .connect_timeout(CONNECT_TIMEOUT)
            .use_rustls_tls()
            .redirect(reqwest::redirect::Policy::none())
            .user_agent(CLIENT_IDENT)
            .build()
            .map_err(|e| {
                tracing::error!(error = %e, "failed to build http client");
                ExplorerError::Network(e)
            })?;

        Ok(Self { client })
    }

    /// Issues a single GET request and returns the raw body bytes.
    ///
    /// Every request carries `Accept: application/json` and the
    /// form-urlencoded content type the explorer API convention expects,
    /// even though GET requests have no body.
    ///
    /// # Errors
    ///
    /// - [`ExplorerError::Timeout`] if the request exceeds `timeout`
    /// - [`ExplorerError::Http`] for non-success HTTP status codes
    /// - [`ExplorerError::Network`] for transport-level failures
    pub async fn get_bytes(&self, url: &str, timeout: Duration) -> Result<Bytes, ExplorerError> {
        let response = self
            .client
            .get(url)
            .header(header::ACCEPT, "application/json")
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .timeout(timeout)
            .send()
            .await
            .map_err(Self::map_transport_error)?;

        if !response.status().is_success() {
            return Err(ExplorerError::Http(response.status().as_u16()));
        }

        response.bytes().await.map_err(Self::map_transport_error)
    }

    /// Timeouts get their own variant; everything else stays a network
    /// error. The timeout can surface while sending or while reading the
    /// body, so both paths funnel through here.
    fn map_transport_error(error: reqwest::Error) -> ExplorerError {
        if error.is_timeout() {
            ExplorerError::Timeout
        } else {
            ExplorerError::Network(error)
        }
    }
}
