//! # Witness Core
//!
//! Core library for blockwitness, a redundant block-explorer client that
//! resolves block metadata without trusting any single explorer.
//!
//! This crate provides:
//!
//! - **[`explorer`]**: Per-endpoint explorer clients and the consensus
//!   resolver that fans a lookup out to every configured endpoint and
//!   accepts the first value reported by two independent sources.
//!
//! - **[`config`]**: Constructor-time configuration, including the built-in
//!   public explorer list used when fewer than two endpoints are supplied.
//!
//! - **[`types`]**: Block metadata value types whose structural equality
//!   defines what "agreement" means.
//!
//! ## Request Flow
//!
//! ```text
//! Caller
//!   │
//!   ▼
//! ConsensusResolver ──► N concurrent ExplorerEndpoint queries
//!   │                         │
//!   │                 soft-failure wrapper
//!   │                 (error → absent slot)
//!   │                         │
//!   ▼                         ▼
//! first-agreement scan ◄── settled results, configuration order
//!   │
//!   ├─ value seen twice ──► resolved value
//!   └─ otherwise ─────────► NoAgreement
//! ```
//!
//! No result is ever surfaced on the word of a single endpoint: a lone
//! malicious or broken explorer can fail a lookup, but cannot forge one.

pub mod config;
pub mod explorer;
pub mod types;
