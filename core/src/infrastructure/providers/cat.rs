// Cat Facts Provider Adapter
//
// Anti-Corruption Layer for the cat facts upstream
// (catfact.ninja-compatible: paginated `data` envelope)

use crate::domain::fact::{Fact, FactsContainer};
use crate::domain::provider::{FactsProvider, ProviderError};
use async_trait::async_trait;
use serde::Deserialize;

pub struct CatFactsAdapter {
    client: reqwest::Client,
    endpoint: String,
}

#[derive(Deserialize)]
struct CatFactsResponse {
    data: Vec<CatFact>,
}

#[derive(Deserialize)]
struct CatFact {
    fact: String,
}

impl CatFactsAdapter {
    pub const CATEGORY: &'static str = "Cats";

    pub fn new(endpoint: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint,
        }
    }
}

#[async_trait]
impl FactsProvider for CatFactsAdapter {
    fn category(&self) -> &str {
        Self::CATEGORY
    }

    async fn fetch_facts(&self, limit: u32) -> Result<FactsContainer, ProviderError> {
        let url = format!(
            "{}/facts?limit={}",
            self.endpoint.trim_end_matches('/'),
            limit
        );

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ProviderError::Network(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();

            return Err(if status == 429 {
                ProviderError::RateLimit
            } else {
                ProviderError::Upstream(format!("HTTP {}: {}", status, error_text))
            });
        }

        let cat_response: CatFactsResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::Decode(e.to_string()))?;

        Ok(FactsContainer::new(
            cat_response
                .data
                .into_iter()
                .map(|entry| Fact {
                    text: entry.fact,
                    category: Self::CATEGORY.to_string(),
                })
                .collect(),
        ))
    }

    async fn health_check(&self) -> Result<(), ProviderError> {
        let url = format!("{}/facts?limit=1", self.endpoint.trim_end_matches('/'));

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ProviderError::Network(e.to_string()))?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(ProviderError::Network(format!("HTTP {}", response.status())))
        }
    }
}
