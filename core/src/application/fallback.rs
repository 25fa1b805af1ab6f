// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0

// Fallback Wrapper - Per-Provider Failure Absorption
//
// Makes a single upstream's unreliability invisible to the aggregate
// result: any provider error is converted into one synthetic placeholder
// fact tagged with the provider's category. This is the system's sole
// error-recovery mechanism; nothing below this boundary escapes to the
// aggregator.

use crate::domain::fact::{Fact, FactsContainer};
use crate::domain::provider::FactsProvider;
use tracing::error;

/// Invoke a provider and absorb any failure.
///
/// On success, facts the provider left untagged are defaulted to the
/// provider's category. On failure, returns a singleton container holding
/// the placeholder fact for that category. Never fails.
pub async fn facts_or_fallback(provider: &dyn FactsProvider, limit: u32) -> FactsContainer {
    match provider.fetch_facts(limit).await {
        Ok(container) => with_default_category(container, provider.category()),
        Err(e) => {
            error!(
                "Failed to fetch {} facts: {}",
                provider.category(),
                e
            );
            fallback_container(provider.category())
        }
    }
}

fn with_default_category(mut container: FactsContainer, category: &str) -> FactsContainer {
    for fact in &mut container.facts {
        if fact.category.is_empty() {
            fact.category = category.to_string();
        }
    }
    container
}

/// The degraded-but-successful substitute for one failed provider
pub fn fallback_container(category: &str) -> FactsContainer {
    FactsContainer::new(vec![Fact {
        text: format!(
            "No {} facts available at the moment. Please try again later.",
            category
        ),
        category: category.to_string(),
    }])
}
