// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0
//! Provider
//!
//! Provides the upstream facts-provider contract.
//!
//! # Architecture
//!
//! - **Layer:** Domain Layer
//! - **Purpose:** Anti-Corruption Layer interface isolating the aggregator
//!   from provider-specific wire formats
//!
//! Implementations in infrastructure/providers/ directory.

use crate::domain::fact::FactsContainer;
use async_trait::async_trait;

/// Domain interface for upstream fact providers.
///
/// Each implementation covers one upstream source and one category. A
/// provider performs exactly one outbound call per `fetch_facts` invocation
/// and never caches — result caching is the aggregator's responsibility.
#[async_trait]
pub trait FactsProvider: Send + Sync {
    /// Display-cased category label this provider serves (e.g. "Ninjas")
    fn category(&self) -> &str;

    /// Fetch up to `limit` facts from the upstream.
    ///
    /// A provider may return fewer facts than requested but never more.
    /// `limit` of zero is valid.
    async fn fetch_facts(&self, limit: u32) -> Result<FactsContainer, ProviderError>;

    /// Check if the upstream is reachable and credentials are accepted
    async fn health_check(&self) -> Result<(), ProviderError>;
}

/// Errors that can occur while fetching facts from an upstream
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Authentication failed: {0}")]
    Authentication(String),

    #[error("Rate limit exceeded")]
    RateLimit,

    #[error("Upstream error: {0}")]
    Upstream(String),

    #[error("Failed to decode response: {0}")]
    Decode(String),
}
