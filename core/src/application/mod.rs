// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0

pub mod aggregator;
pub mod fallback;
pub mod stats;

// Re-export the aggregation surface for convenience
pub use aggregator::FactsAggregateService;
pub use stats::{ApiStatisticsService, ApiStats};
