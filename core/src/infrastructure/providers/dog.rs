// Dog Facts Provider Adapter
//
// Anti-Corruption Layer for the dog facts upstream
// (dogapi.dog-compatible: JSON:API `data[].attributes.body` shape)

use crate::domain::fact::{Fact, FactsContainer};
use crate::domain::provider::{FactsProvider, ProviderError};
use async_trait::async_trait;
use serde::Deserialize;

pub struct DogFactsAdapter {
    client: reqwest::Client,
    endpoint: String,
}

#[derive(Deserialize)]
struct DogFactsResponse {
    data: Vec<DogFact>,
}

#[derive(Deserialize)]
struct DogFact {
    attributes: DogFactAttributes,
}

#[derive(Deserialize)]
struct DogFactAttributes {
    body: String,
}

impl DogFactsAdapter {
    pub const CATEGORY: &'static str = "Dogs";

    pub fn new(endpoint: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint,
        }
    }
}

#[async_trait]
impl FactsProvider for DogFactsAdapter {
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

        let dog_response: DogFactsResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::Decode(e.to_string()))?;

        Ok(FactsContainer::new(
            dog_response
                .data
                .into_iter()
                .map(|entry| Fact {
                    text: entry.attributes.body,
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
