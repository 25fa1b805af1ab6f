// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0

// Result Cache
//
// Time-bounded memo for aggregated fact lists, keyed by (limit, normalized
// category filter). Expiry is lazy: staleness is checked at read time and
// stale entries stay in place until the next write supersedes them. No
// background sweeper.
//
// DashMap sharding keeps writes for different keys from blocking each
// other; replacing the value for one key is atomic with respect to
// concurrent reads of that key.

use crate::domain::fact::{CategoryFilter, FactsContainer};
use dashmap::DashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Pure function of the request parameters
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    limit: u32,
    category: String,
}

/// Sentinel for unfiltered requests
const ALL_CATEGORIES: &str = "ALL";

impl CacheKey {
    pub fn new(limit: u32, filter: &CategoryFilter) -> Self {
        let category = match filter {
            CategoryFilter::All => ALL_CATEGORIES.to_string(),
            CategoryFilter::Only(category) => category.clone(),
        };
        Self { limit, category }
    }
}

struct CacheEntry {
    facts: Arc<FactsContainer>,
    expires_at: Instant,
}

/// Concurrent in-memory cache of aggregated results.
///
/// Values are shared immutably (`Arc`); the cache's copy is never aliased
/// with a list a caller could mutate. Process lifetime, no persistence.
#[derive(Default)]
pub struct ResultCache {
    entries: DashMap<CacheKey, CacheEntry>,
}

impl ResultCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up an unexpired entry. Expired entries read as absent.
    pub fn get(&self, key: &CacheKey) -> Option<Arc<FactsContainer>> {
        let entry = self.entries.get(key)?;
        if Instant::now() >= entry.expires_at {
            return None;
        }
        Some(Arc::clone(&entry.facts))
    }

    /// Store a value under `key`, superseding any previous entry
    pub fn insert(&self, key: CacheKey, facts: Arc<FactsContainer>, ttl: Duration) {
        self.entries.insert(
            key,
            CacheEntry {
                facts,
                expires_at: Instant::now() + ttl,
            },
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::fact::Fact;

    fn container(text: &str) -> Arc<FactsContainer> {
        Arc::new(FactsContainer::new(vec![Fact {
            text: text.to_string(),
            category: "Cats".to_string(),
        }]))
    }

    #[test]
    fn test_miss_on_empty_cache() {
        let cache = ResultCache::new();
        let key = CacheKey::new(10, &CategoryFilter::All);
        assert!(cache.get(&key).is_none());
    }

    #[test]
    fn test_hit_within_ttl() {
        let cache = ResultCache::new();
        let key = CacheKey::new(10, &CategoryFilter::All);
        cache.insert(key.clone(), container("Cat fact 1"), Duration::from_secs(60));

        let hit = cache.get(&key).unwrap();
        assert_eq!(hit.facts[0].text, "Cat fact 1");
    }

    #[test]
    fn test_expired_entry_reads_as_absent() {
        let cache = ResultCache::new();
        let key = CacheKey::new(10, &CategoryFilter::All);
        cache.insert(key.clone(), container("stale"), Duration::ZERO);

        assert!(cache.get(&key).is_none());
    }

    #[test]
    fn test_insert_supersedes_previous_entry() {
        let cache = ResultCache::new();
        let key = CacheKey::new(10, &CategoryFilter::All);
        cache.insert(key.clone(), container("old"), Duration::from_secs(60));
        cache.insert(key.clone(), container("new"), Duration::from_secs(60));

        assert_eq!(cache.get(&key).unwrap().facts[0].text, "new");
    }

    #[test]
    fn test_keys_distinguish_limit_and_filter() {
        let all_10 = CacheKey::new(10, &CategoryFilter::All);
        let all_20 = CacheKey::new(20, &CategoryFilter::All);
        let cats_10 = CacheKey::new(10, &CategoryFilter::parse(Some("Cats")));
        let cats_10_again = CacheKey::new(10, &CategoryFilter::parse(Some("CATS")));

        assert_ne!(all_10, all_20);
        assert_ne!(all_10, cats_10);
        // Normalization makes differently-cased filters share one entry
        assert_eq!(cats_10, cats_10_again);
    }
}
