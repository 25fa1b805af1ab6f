// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0

// Provider Registry - Adapter Construction and Health Reporting
//
// Builds the enabled provider adapters from service configuration and
// resolves API keys, keeping credential handling out of the adapters.

use crate::domain::config::{ProviderSettings, ServiceConfig};
use crate::domain::provider::{FactsProvider, ProviderError};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{info, warn};

use super::cat::CatFactsAdapter;
use super::dog::DogFactsAdapter;
use super::ninja::NinjaFactsAdapter;

/// Registry holding the configured provider set in registration order
/// (Cats, Dogs, Ninjas)
pub struct ProviderRegistry {
    providers: Vec<Arc<dyn FactsProvider>>,
}

impl ProviderRegistry {
    /// Create the provider set from service configuration.
    ///
    /// Disabled providers are skipped; a fully empty set is a warning
    /// rather than an error so the service can still serve cached or
    /// empty results.
    pub fn from_config(config: &ServiceConfig) -> anyhow::Result<Self> {
        let mut providers: Vec<Arc<dyn FactsProvider>> = Vec::new();

        info!("Initializing facts provider registry");

        if config.providers.cat_facts.enabled {
            info!("Initializing provider: {}", CatFactsAdapter::CATEGORY);
            providers.push(Arc::new(CatFactsAdapter::new(
                config.providers.cat_facts.endpoint.clone(),
            )));
        } else {
            info!("Provider '{}' disabled, skipping", CatFactsAdapter::CATEGORY);
        }

        if config.providers.dog_facts.enabled {
            info!("Initializing provider: {}", DogFactsAdapter::CATEGORY);
            providers.push(Arc::new(DogFactsAdapter::new(
                config.providers.dog_facts.endpoint.clone(),
            )));
        } else {
            info!("Provider '{}' disabled, skipping", DogFactsAdapter::CATEGORY);
        }

        if config.providers.ninja_facts.enabled {
            info!("Initializing provider: {}", NinjaFactsAdapter::CATEGORY);
            let api_key = Self::resolve_api_key(&config.providers.ninja_facts)?;
            providers.push(Arc::new(NinjaFactsAdapter::new(
                config.providers.ninja_facts.endpoint.clone(),
                api_key,
            )));
        } else {
            info!(
                "Provider '{}' disabled, skipping",
                NinjaFactsAdapter::CATEGORY
            );
        }

        if providers.is_empty() {
            warn!("No facts providers configured - responses will be empty");
        }

        Ok(Self { providers })
    }

    /// Resolve an API key from settings (supports "env:VAR_NAME" syntax)
    fn resolve_api_key(settings: &ProviderSettings) -> anyhow::Result<String> {
        match &settings.api_key {
            Some(key) if key.starts_with("env:") => {
                let var_name = key.strip_prefix("env:").unwrap();
                std::env::var(var_name)
                    .map_err(|_| anyhow::anyhow!("Environment variable not set: {}", var_name))
            }
            Some(key) => Ok(key.clone()),
            None => Ok(String::new()),
        }
    }

    /// Providers in registration order
    pub fn providers(&self) -> &[Arc<dyn FactsProvider>] {
        &self.providers
    }

    /// Check health of all providers, keyed by category
    pub async fn health_check_all(&self) -> HashMap<String, Result<(), ProviderError>> {
        let mut results = HashMap::new();

        for provider in &self.providers {
            info!("Health checking provider: {}", provider.category());
            results.insert(
                provider.category().to_string(),
                provider.health_check().await,
            );
        }

        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_from_default_config() {
        let mut config = ServiceConfig::default();
        // Inline key keeps the test independent of the environment
        config.providers.ninja_facts.api_key = Some("test-key".to_string());

        let registry = ProviderRegistry::from_config(&config).unwrap();
        let categories: Vec<&str> = registry
            .providers()
            .iter()
            .map(|p| p.category())
            .collect();

        assert_eq!(categories, vec!["Cats", "Dogs", "Ninjas"]);
    }

    #[test]
    fn test_disabled_providers_are_skipped() {
        let mut config = ServiceConfig::default();
        config.providers.dog_facts.enabled = false;
        config.providers.ninja_facts.enabled = false;

        let registry = ProviderRegistry::from_config(&config).unwrap();
        assert_eq!(registry.providers().len(), 1);
        assert_eq!(registry.providers()[0].category(), "Cats");
    }

    #[test]
    fn test_env_api_key_resolution() {
        let settings = ProviderSettings {
            endpoint: "https://api.api-ninjas.com/v1".to_string(),
            api_key: Some("env:FACTS_TEST_NINJA_KEY".to_string()),
            enabled: true,
        };

        std::env::set_var("FACTS_TEST_NINJA_KEY", "from-env");
        assert_eq!(
            ProviderRegistry::resolve_api_key(&settings).unwrap(),
            "from-env"
        );
        std::env::remove_var("FACTS_TEST_NINJA_KEY");

        assert!(ProviderRegistry::resolve_api_key(&settings).is_err());
    }

    #[test]
    fn test_missing_api_key_defaults_to_empty() {
        let settings = ProviderSettings {
            endpoint: "https://catfact.ninja".to_string(),
            api_key: None,
            enabled: true,
        };

        assert_eq!(ProviderRegistry::resolve_api_key(&settings).unwrap(), "");
    }
}
