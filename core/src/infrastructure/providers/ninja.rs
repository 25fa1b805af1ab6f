// Ninja Facts Provider Adapter
//
// Anti-Corruption Layer for the ninja facts upstream
// (api-ninjas-compatible: top-level array, X-Api-Key header required).
// The upstream has no limit parameter, so the adapter truncates
// client-side to honor the fewer-never-more contract.

use crate::domain::fact::{Fact, FactsContainer};
use crate::domain::provider::{FactsProvider, ProviderError};
use async_trait::async_trait;
use serde::Deserialize;

pub struct NinjaFactsAdapter {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
}

#[derive(Deserialize)]
struct NinjaFact {
    fact: String,
}

impl NinjaFactsAdapter {
    pub const CATEGORY: &'static str = "Ninjas";

    pub fn new(endpoint: String, api_key: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint,
            api_key,
        }
    }
}

#[async_trait]
impl FactsProvider for NinjaFactsAdapter {
    fn category(&self) -> &str {
        Self::CATEGORY
    }

    async fn fetch_facts(&self, limit: u32) -> Result<FactsContainer, ProviderError> {
        let url = format!("{}/facts", self.endpoint.trim_end_matches('/'));

        let response = self
            .client
            .get(&url)
            .header("X-Api-Key", &self.api_key)
            .send()
            .await
            .map_err(|e| ProviderError::Network(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();

            return Err(if status == 401 || status == 403 {
                ProviderError::Authentication(error_text)
            } else if status == 429 {
                ProviderError::RateLimit
            } else {
                ProviderError::Upstream(format!("HTTP {}: {}", status, error_text))
            });
        }

        let ninja_facts: Vec<NinjaFact> = response
            .json()
            .await
            .map_err(|e| ProviderError::Decode(e.to_string()))?;

        Ok(FactsContainer::new(
            ninja_facts
                .into_iter()
                .take(limit as usize)
                .map(|entry| Fact {
                    text: entry.fact,
                    category: Self::CATEGORY.to_string(),
                })
                .collect(),
        ))
    }

    async fn health_check(&self) -> Result<(), ProviderError> {
        let url = format!("{}/facts", self.endpoint.trim_end_matches('/'));

        let response = self
            .client
            .get(&url)
            .header("X-Api-Key", &self.api_key)
            .send()
            .await
            .map_err(|e| ProviderError::Network(e.to_string()))?;

        if response.status().is_success() {
            Ok(())
        } else if response.status() == 401 || response.status() == 403 {
            Err(ProviderError::Authentication("Invalid API key".into()))
        } else {
            Err(ProviderError::Network(format!("HTTP {}", response.status())))
        }
    }
}
