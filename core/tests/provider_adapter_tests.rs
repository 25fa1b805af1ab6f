// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0

//! Wire-format tests for the three provider adapters.
//!
//! Each upstream is stubbed with mockito; the tests pin the exact payload
//! shapes the adapters must parse and the mapping from HTTP failures to
//! ProviderError variants.

use facts_core::domain::provider::{FactsProvider, ProviderError};
use facts_core::infrastructure::providers::cat::CatFactsAdapter;
use facts_core::infrastructure::providers::dog::DogFactsAdapter;
use facts_core::infrastructure::providers::ninja::NinjaFactsAdapter;

#[tokio::test]
async fn test_cat_adapter_parses_data_envelope() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/facts")
        .match_query(mockito::Matcher::UrlEncoded("limit".into(), "2".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"data":[{"fact":"Cat fact 1"},{"fact":"Cat fact 2"}]}"#)
        .create_async()
        .await;

    let adapter = CatFactsAdapter::new(server.url());
    let result = adapter.fetch_facts(2).await.unwrap();

    mock.assert_async().await;
    assert_eq!(result.len(), 2);
    assert_eq!(result.facts[0].text, "Cat fact 1");
    assert_eq!(result.facts[0].category, "Cats");
}

#[tokio::test]
async fn test_cat_adapter_maps_server_error_to_upstream() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", mockito::Matcher::Regex("^/facts".to_string()))
        .with_status(500)
        .with_body("boom")
        .create_async()
        .await;

    let adapter = CatFactsAdapter::new(server.url());
    let err = adapter.fetch_facts(5).await.unwrap_err();

    assert!(matches!(err, ProviderError::Upstream(_)));
}

#[tokio::test]
async fn test_cat_adapter_maps_bad_payload_to_decode() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", mockito::Matcher::Regex("^/facts".to_string()))
        .with_status(200)
        .with_body("not json")
        .create_async()
        .await;

    let adapter = CatFactsAdapter::new(server.url());
    let err = adapter.fetch_facts(5).await.unwrap_err();

    assert!(matches!(err, ProviderError::Decode(_)));
}

#[tokio::test]
async fn test_cat_adapter_maps_429_to_rate_limit() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", mockito::Matcher::Regex("^/facts".to_string()))
        .with_status(429)
        .create_async()
        .await;

    let adapter = CatFactsAdapter::new(server.url());
    let err = adapter.fetch_facts(5).await.unwrap_err();

    assert!(matches!(err, ProviderError::RateLimit));
}

#[tokio::test]
async fn test_dog_adapter_parses_jsonapi_attributes() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/facts")
        .match_query(mockito::Matcher::UrlEncoded("limit".into(), "1".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"data":[{"attributes":{"body":"Dog fact 1"}}]}"#)
        .create_async()
        .await;

    let adapter = DogFactsAdapter::new(server.url());
    let result = adapter.fetch_facts(1).await.unwrap();

    mock.assert_async().await;
    assert_eq!(result.len(), 1);
    assert_eq!(result.facts[0].text, "Dog fact 1");
    assert_eq!(result.facts[0].category, "Dogs");
}

#[tokio::test]
async fn test_ninja_adapter_sends_api_key_and_truncates() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/facts")
        .match_header("X-Api-Key", "secret-key")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"[{"fact":"Ninja fact 1"},{"fact":"Ninja fact 2"},{"fact":"Ninja fact 3"}]"#)
        .create_async()
        .await;

    let adapter = NinjaFactsAdapter::new(server.url(), "secret-key".to_string());
    let result = adapter.fetch_facts(2).await.unwrap();

    mock.assert_async().await;
    // The upstream has no limit parameter; the adapter truncates
    assert_eq!(result.len(), 2);
    assert_eq!(result.facts[0].text, "Ninja fact 1");
    assert_eq!(result.facts[0].category, "Ninjas");
}

#[tokio::test]
async fn test_ninja_adapter_maps_401_to_authentication() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/facts")
        .with_status(401)
        .with_body("bad key")
        .create_async()
        .await;

    let adapter = NinjaFactsAdapter::new(server.url(), "wrong".to_string());
    let err = adapter.fetch_facts(5).await.unwrap_err();

    assert!(matches!(err, ProviderError::Authentication(_)));
}

#[tokio::test]
async fn test_network_failure_maps_to_network_error() {
    // Unroutable endpoint: nothing is listening on this port
    let adapter = CatFactsAdapter::new("http://127.0.0.1:1".to_string());
    let err = adapter.fetch_facts(5).await.unwrap_err();

    assert!(matches!(err, ProviderError::Network(_)));
}

#[tokio::test]
async fn test_health_check_reports_upstream_status() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", mockito::Matcher::Regex("^/facts".to_string()))
        .with_status(200)
        .with_body(r#"{"data":[]}"#)
        .create_async()
        .await;

    let adapter = CatFactsAdapter::new(server.url());
    assert!(adapter.health_check().await.is_ok());

    let unreachable = CatFactsAdapter::new("http://127.0.0.1:1".to_string());
    assert!(unreachable.health_check().await.is_err());
}
