// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0

//! HTTP server bootstrap
//!
//! Loads configuration, wires the provider registry, aggregation service,
//! and statistics service together, and serves the API with graceful
//! shutdown on Ctrl+C / SIGTERM.

use anyhow::{Context, Result};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::info;

use facts_core::application::{ApiStatisticsService, FactsAggregateService};
use facts_core::domain::config::ServiceConfig;
use facts_core::infrastructure::ProviderRegistry;
use facts_core::presentation::api::{app, AppState};

pub async fn run(
    config_path: Option<PathBuf>,
    host_override: Option<String>,
    port_override: Option<u16>,
) -> Result<()> {
    let mut config =
        ServiceConfig::load_or_default(config_path).context("Failed to load configuration")?;

    if let Some(host) = host_override {
        config.server.host = host;
    }
    if let Some(port) = port_override {
        config.server.port = port;
    }

    config
        .validate()
        .context("Configuration validation failed")?;

    let registry = Arc::new(
        ProviderRegistry::from_config(&config).context("Failed to initialize facts providers")?,
    );

    info!(
        "Configuration loaded: cache ttl {:?}, {} providers enabled",
        config.cache.ttl,
        registry.providers().len()
    );
    let stats = Arc::new(ApiStatisticsService::new());
    let aggregator = Arc::new(FactsAggregateService::new(
        registry.providers().to_vec(),
        config.cache.ttl,
        Arc::clone(&stats),
    ));

    let state = Arc::new(AppState {
        aggregator,
        registry,
        stats,
        start_time: Instant::now(),
    });

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    info!("Facts API listening on {}", addr);

    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server failed")?;

    info!("Server shutting down");

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C signal");
        },
        _ = terminate => {
            info!("Received SIGTERM signal");
        },
    }
}
