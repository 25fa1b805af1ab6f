// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0

// Call Statistics Service
//
// Records per-provider call durations for the /api/stats endpoint.
// Advisory only: not on any correctness path.

use chrono::{DateTime, Utc};
use dashmap::DashMap;
use serde::Serialize;
use std::collections::HashMap;
use std::time::Duration;

/// Latency buckets: fast < 100ms, average <= 200ms, slow > 200ms
const FAST_THRESHOLD_MS: f64 = 100.0;
const AVERAGE_THRESHOLD_MS: f64 = 200.0;

/// Accumulated statistics for one upstream API
#[derive(Debug, Clone, Default, Serialize)]
pub struct ApiStats {
    pub total_requests: u64,
    pub total_response_ms: f64,
    pub average_response_ms: f64,
    pub fast_requests: u64,
    pub average_requests: u64,
    pub slow_requests: u64,
    pub last_called_at: Option<DateTime<Utc>>,
}

/// Thread-safe per-API call statistics, keyed by provider category
#[derive(Debug, Default)]
pub struct ApiStatisticsService {
    stats: DashMap<String, ApiStats>,
}

impl ApiStatisticsService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one call against the named API
    pub fn record_call(&self, api_name: &str, duration: Duration) {
        let elapsed_ms = duration.as_secs_f64() * 1000.0;

        let mut entry = self.stats.entry(api_name.to_string()).or_default();
        entry.total_requests += 1;
        entry.total_response_ms += elapsed_ms;
        entry.average_response_ms = entry.total_response_ms / entry.total_requests as f64;
        entry.last_called_at = Some(Utc::now());

        if elapsed_ms < FAST_THRESHOLD_MS {
            entry.fast_requests += 1;
        } else if elapsed_ms <= AVERAGE_THRESHOLD_MS {
            entry.average_requests += 1;
        } else {
            entry.slow_requests += 1;
        }
    }

    /// Snapshot all statistics for serialization
    pub fn snapshot(&self) -> HashMap<String, ApiStats> {
        self.stats
            .iter()
            .map(|entry| (entry.key().clone(), entry.value().clone()))
            .collect()
    }
}
