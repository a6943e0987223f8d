//! Integration Tests for the Blockwitness Resolver
//!
//! This crate contains test modules that exercise the resolver against
//! real HTTP servers (mockito mocks plus raw TCP listeners for timeout
//! behavior):
//!
//! - `consensus_tests`: Agreement scenarios across multiple mock explorers
//! - `endpoint_tests`: Per-endpoint request handling and failure containment
//! - `mock_infrastructure`: Reusable insight-style explorer mocks
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test --package tests
//! ```
//!
//! No external services are required; every test spins up its own local
//! mock servers.

#[cfg(test)]
mod consensus_tests;


/// Mock infrastructure for testing
pub mod mock_infrastructure;
