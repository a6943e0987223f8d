//! Block-explorer clients and agreement resolution.
//!
//! This module handles communication with block-explorer HTTP services and
//! the consensus layer on top of them:
//!
//! - HTTP client construction shared across endpoints
//! - Per-endpoint lookups with bounded wait and failure containment
//! - The consensus resolver that requires two independent sources to agree
//!
//! Explorers are mutually untrusted: every lookup is dispatched to all
//! configured endpoints concurrently, individual failures are contained
//! within the endpoint layer, and only a value reported by at least two
//! distinct endpoints is ever returned to the caller.

pub mod consensus;
pub mod endpoint;
pub mod errors;
pub mod http_client;

pub use consensus::ConsensusResolver;
pub use endpoint::{EndpointConfig, ExplorerEndpoint};
pub use errors::ExplorerError;
pub use http_client::HttpClient;
