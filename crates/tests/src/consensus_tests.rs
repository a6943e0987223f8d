//! Integration tests for agreement resolution across mock explorers.
//!
//! These tests verify the resolver against actual HTTP servers:
//! - Two agreeing endpoints win regardless of other failures
//! - Pairwise-distinct responses yield no agreement
//! - Slow/unreachable endpoints are contained and bounded by the timeout
//! - Block-info agreement is structural, not textual
//! - The sub-minimum configuration falls back to the default endpoint list

use crate::mock_infrastructure::ExplorerMockBuilder;
use std::time::{Duration, Instant};
use witness_core::{
    config::{ResolverConfig, DEFAULT_EXPLORER_URLS},
    explorer::{ConsensusResolver, ExplorerError},
    types::{BlockHash, BlockInfo},
};

fn resolver_for(urls: Vec<String>, timeout_seconds: u64) -> ConsensusResolver {
    let config = ResolverConfig { urls, timeout_seconds };
    ConsensusResolver::new(&config).expect("resolver construction should succeed")
}

/// Binds a TCP listener that accepts connections but never writes a
/// response, simulating an explorer that hangs until the client times out.
async fn silent_explorer_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        loop {
            let Ok((socket, _)) = listener.accept().await else { break };
            tokio::spawn(async move {
                // Hold the connection open without responding.
                let _socket = socket;
                tokio::time::sleep(Duration::from_secs(60)).await;
            });
        }
    });

    format!("http://{addr}")
}

#[tokio::test]
async fn test_block_hash_two_agree_third_times_out() {
    let mut explorer1 = ExplorerMockBuilder::new().await;
    let mut explorer3 = ExplorerMockBuilder::new().await;
    explorer1.mock_block_index(100, "aaa");
    explorer3.mock_block_index(100, "aaa");

    let hanging = silent_explorer_url().await;

    let resolver = resolver_for(vec![explorer1.url(), hanging, explorer3.url()], 1);

    let start = Instant::now();
    let result = resolver.block_hash(100).await.unwrap();

    assert_eq!(result, BlockHash::from("aaa"));
    // The hanging endpoint delays the batch at most by the shared timeout.
    assert!(start.elapsed() < Duration::from_secs(5));
}

#[tokio::test]
async fn test_block_hash_all_distinct_is_no_agreement() {
    let mut explorer1 = ExplorerMockBuilder::new().await;
    let mut explorer2 = ExplorerMockBuilder::new().await;
    let mut explorer3 = ExplorerMockBuilder::new().await;
    explorer1.mock_block_index(100, "aaa");
    explorer2.mock_block_index(100, "bbb");
    explorer3.mock_block_index(100, "ccc");

    let resolver = resolver_for(vec![explorer1.url(), explorer2.url(), explorer3.url()], 5);

    let err = resolver.block_hash(100).await.unwrap_err();
    assert!(matches!(err, ExplorerError::NoAgreement));
}

#[tokio::test]
async fn test_block_hash_agreement_beats_disagreeing_endpoint() {
    let mut explorer1 = ExplorerMockBuilder::new().await;
    let mut explorer2 = ExplorerMockBuilder::new().await;
    let mut explorer3 = ExplorerMockBuilder::new().await;
    explorer1.mock_block_index(100, "aaa");
    explorer2.mock_block_index(100, "forged");
    explorer3.mock_block_index(100, "aaa");

    let resolver = resolver_for(vec![explorer1.url(), explorer2.url(), explorer3.url()], 5);

    assert_eq!(resolver.block_hash(100).await.unwrap(), BlockHash::from("aaa"));
}

#[tokio::test]
async fn test_block_hash_first_recurring_value_wins() {
    let mut mocks = Vec::new();
    for hash in ["aaa", "bbb", "bbb", "aaa"] {
        let mut explorer = ExplorerMockBuilder::new().await;
        explorer.mock_block_index(100, hash);
        mocks.push(explorer);
    }

    let urls = mocks.iter().map(ExplorerMockBuilder::url).collect();
    let resolver = resolver_for(urls, 5);

    // "aaa" responds first in configuration order, but "bbb" is the first
    // value to be seen twice during the scan.
    assert_eq!(resolver.block_hash(100).await.unwrap(), BlockHash::from("bbb"));
}

#[tokio::test]
async fn test_block_info_structural_agreement_across_field_orders() {
    let mut explorer1 = ExplorerMockBuilder::new().await;
    let mut explorer2 = ExplorerMockBuilder::new().await;

    // Same values, different field order and different extra fields: the
    // agreement check compares extracted values, not serialized bodies.
    explorer1.mock_block_raw(
        "h1",
        200,
        r#"{"merkleroot": "m1", "time": 1000, "height": 100, "size": 285}"#,
    );
    explorer2.mock_block_raw(
        "h1",
        200,
        r#"{"confirmations": 3, "time": 1000, "merkleroot": "m1"}"#,
    );

    let resolver = resolver_for(vec![explorer1.url(), explorer2.url()], 5);

    let info = resolver.block_info("h1").await.unwrap();
    assert_eq!(info, BlockInfo { merkle_root: "m1".to_string(), time: 1000 });
}

#[tokio::test]
async fn test_block_info_empty_payload_cannot_reach_threshold() {
    let mut explorer1 = ExplorerMockBuilder::new().await;
    let mut explorer2 = ExplorerMockBuilder::new().await;

    explorer1.mock_block_raw("h1", 200, r#"{"size": 0}"#);
    explorer2.mock_block("h1", "m1", 1000);

    let resolver = resolver_for(vec![explorer1.url(), explorer2.url()], 5);

    // Only one usable value: agreement needs two.
    let err = resolver.block_info("h1").await.unwrap_err();
    assert!(matches!(err, ExplorerError::NoAgreement));
}

#[tokio::test]
async fn test_block_hash_malformed_body_is_contained() {
    let mut explorer1 = ExplorerMockBuilder::new().await;
    let mut explorer2 = ExplorerMockBuilder::new().await;
    let mut explorer3 = ExplorerMockBuilder::new().await;
    explorer1.mock_block_index(100, "aaa");
    explorer2.mock_block_index_raw(100, 200, "not json at all");
    explorer3.mock_block_index(100, "aaa");

    let resolver = resolver_for(vec![explorer1.url(), explorer2.url(), explorer3.url()], 5);

    assert_eq!(resolver.block_hash(100).await.unwrap(), BlockHash::from("aaa"));
}

#[tokio::test]
async fn test_block_hash_connection_refused_is_contained() {
    let mut explorer1 = ExplorerMockBuilder::new().await;
    let mut explorer2 = ExplorerMockBuilder::new().await;
    explorer1.mock_block_index(100, "aaa");
    explorer2.mock_block_index(100, "aaa");

    // Port 1 refuses connections immediately.
    let resolver =
        resolver_for(vec![explorer1.url(), "http://127.0.0.1:1".to_string(), explorer2.url()], 5);

    assert_eq!(resolver.block_hash(100).await.unwrap(), BlockHash::from("aaa"));
}

#[tokio::test]
async fn test_all_endpoints_failing_is_no_agreement() {
    let resolver = resolver_for(
        vec!["http://127.0.0.1:1".to_string(), "http://127.0.0.1:2".to_string()],
        1,
    );

    let err = resolver.block_hash(100).await.unwrap_err();
    assert!(matches!(err, ExplorerError::NoAgreement));
}

#[tokio::test]
async fn test_single_configured_url_falls_back_to_default_list() {
    let resolver = resolver_for(vec!["https://only.example/api".to_string()], 5);

    assert_eq!(resolver.endpoints().len(), DEFAULT_EXPLORER_URLS.len());

    let urls: Vec<&str> =
        resolver.endpoints().iter().map(|e| e.config().url.as_str()).collect();
    assert_eq!(urls, DEFAULT_EXPLORER_URLS);
}
