// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0

// Service Configuration Types
//
// Defines the YAML configuration schema for the facts API service:
// - HTTP server bind address
// - Result cache TTL
// - Upstream provider endpoints, enablement, and API keys
//
// API keys support "env:VAR_NAME" indirection so secrets stay out of
// config files.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Top-level service configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// HTTP server settings
    #[serde(default)]
    pub server: ServerConfig,

    /// Result cache settings
    #[serde(default)]
    pub cache: CacheConfig,

    /// Upstream provider settings
    #[serde(default)]
    pub providers: ProvidersConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind host
    #[serde(default = "default_host")]
    pub host: String,

    /// Bind port
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Time-to-live for aggregated results (humantime format, e.g. "5m").
    /// Staleness is traded for upstream load reduction; fact content churns
    /// rarely and callers tolerate repetition.
    #[serde(with = "humantime_serde", default = "default_cache_ttl")]
    pub ttl: Duration,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: default_cache_ttl(),
        }
    }
}

/// The provider set is fixed at three; each can be disabled independently.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProvidersConfig {
    #[serde(default = "default_cat_facts")]
    pub cat_facts: ProviderSettings,

    #[serde(default = "default_dog_facts")]
    pub dog_facts: ProviderSettings,

    #[serde(default = "default_ninja_facts")]
    pub ninja_facts: ProviderSettings,
}

impl Default for ProvidersConfig {
    fn default() -> Self {
        Self {
            cat_facts: default_cat_facts(),
            dog_facts: default_dog_facts(),
            ninja_facts: default_ninja_facts(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderSettings {
    /// Upstream base URL
    pub endpoint: String,

    /// API key, either inline or "env:VAR_NAME"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Disabled providers are skipped at registry construction
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_cache_ttl() -> Duration {
    Duration::from_secs(5 * 60)
}

fn default_enabled() -> bool {
    true
}

fn default_cat_facts() -> ProviderSettings {
    ProviderSettings {
        endpoint: "https://catfact.ninja".to_string(),
        api_key: None,
        enabled: true,
    }
}

fn default_dog_facts() -> ProviderSettings {
    ProviderSettings {
        endpoint: "https://dogapi.dog/api/v2".to_string(),
        api_key: None,
        enabled: true,
    }
}

fn default_ninja_facts() -> ProviderSettings {
    ProviderSettings {
        endpoint: "https://api.api-ninjas.com/v1".to_string(),
        api_key: Some("env:NINJA_FACTS_API_KEY".to_string()),
        enabled: true,
    }
}

impl ServiceConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config = Self::from_yaml_str(&content)?;
        Ok(config)
    }

    /// Parse configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> anyhow::Result<Self> {
        let config = serde_yaml::from_str(yaml)?;
        Ok(config)
    }

    /// Serialize configuration to YAML
    pub fn to_yaml(&self) -> anyhow::Result<String> {
        let yaml = serde_yaml::to_string(self)?;
        Ok(yaml)
    }

    /// Search well-known locations for a config file
    ///
    /// Order: ./facts-config.yaml, ~/.facts-api/config.yaml,
    /// /etc/facts-api/config.yaml
    pub fn discover_config() -> Option<PathBuf> {
        let candidates = [
            Some(PathBuf::from("./facts-config.yaml")),
            dirs::home_dir().map(|home| home.join(".facts-api/config.yaml")),
            Some(PathBuf::from("/etc/facts-api/config.yaml")),
        ];

        candidates
            .into_iter()
            .flatten()
            .find(|candidate| candidate.exists())
    }

    /// Load configuration with discovery, fallback to defaults
    pub fn load_or_default(path: Option<PathBuf>) -> anyhow::Result<Self> {
        if let Some(path) = path {
            tracing::info!("Loading configuration from {:?}", path);
            return Self::from_yaml_file(&path);
        }

        if let Some(config_path) = Self::discover_config() {
            tracing::info!("Loading configuration from discovered path: {:?}", config_path);
            return Self::from_yaml_file(config_path);
        }

        tracing::info!("No configuration file found, using defaults");
        Ok(Self::default())
    }

    /// Validate configuration invariants
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.cache.ttl.is_zero() {
            anyhow::bail!("cache.ttl must be greater than zero");
        }

        for (name, settings) in [
            ("cat_facts", &self.providers.cat_facts),
            ("dog_facts", &self.providers.dog_facts),
            ("ninja_facts", &self.providers.ninja_facts),
        ] {
            if settings.enabled && settings.endpoint.is_empty() {
                anyhow::bail!("providers.{}.endpoint cannot be empty", name);
            }
        }

        Ok(())
    }
}
