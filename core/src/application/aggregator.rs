// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0

// Facts Aggregation Service
//
// Produces one filtered, size-bounded fact list from three independently
// fetched, independently degraded upstream sources. Repeated identical
// requests inside the TTL window are served from the result cache with
// zero outbound calls.

use crate::application::fallback::facts_or_fallback;
use crate::application::stats::ApiStatisticsService;
use crate::domain::fact::{CategoryFilter, Fact, FactsContainer};
use crate::domain::provider::FactsProvider;
use crate::infrastructure::cache::{CacheKey, ResultCache};
use futures::future;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::debug;

/// Orchestrates the cache-check / fan-out / merge / filter / truncate pass.
///
/// Constructed once at service start and shared across requests; holds the
/// result cache as an owned component so tests can substitute providers
/// freely.
pub struct FactsAggregateService {
    providers: Vec<Arc<dyn FactsProvider>>,
    cache: ResultCache,
    cache_ttl: Duration,
    stats: Arc<ApiStatisticsService>,
}

impl FactsAggregateService {
    pub fn new(
        providers: Vec<Arc<dyn FactsProvider>>,
        cache_ttl: Duration,
        stats: Arc<ApiStatisticsService>,
    ) -> Self {
        Self {
            providers,
            cache: ResultCache::new(),
            cache_ttl,
            stats,
        }
    }

    /// Return up to `limit` facts, optionally filtered by category.
    ///
    /// Never fails from the caller's perspective: individual provider
    /// failures surface as one placeholder fact each. Merge order follows
    /// provider registration order; callers get no ordering guarantee.
    pub async fn get_facts(&self, limit: u32, category: Option<&str>) -> Arc<FactsContainer> {
        let filter = CategoryFilter::parse(category);
        let key = CacheKey::new(limit, &filter);

        if let Some(cached) = self.cache.get(&key) {
            debug!("Returning facts from cache for {:?}", key);
            return cached;
        }

        debug!(
            "Cache miss for {:?}, fanning out to {} providers",
            key,
            self.providers.len()
        );

        // Fan-out/fan-in barrier: all providers settle before the merge.
        // The fallback wrapper never fails, so the wait always completes.
        let fetches = self.providers.iter().map(|provider| {
            let provider = Arc::clone(provider);
            let stats = Arc::clone(&self.stats);
            async move {
                let started = Instant::now();
                let facts = facts_or_fallback(provider.as_ref(), limit).await;
                stats.record_call(provider.category(), started.elapsed());
                facts
            }
        });
        let settled = future::join_all(fetches).await;

        let mut merged: Vec<Fact> = settled
            .into_iter()
            .flat_map(|container| container.facts)
            .collect();
        merged.retain(|fact| filter.matches(&fact.category));
        merged.truncate(limit as usize);

        let container = Arc::new(FactsContainer::new(merged));
        self.cache
            .insert(key, Arc::clone(&container), self.cache_ttl);
        container
    }
}
