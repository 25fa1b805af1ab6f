use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde_json::json;
use std::sync::Arc;
use std::time::Instant;
use tower_http::trace::TraceLayer;

use crate::application::aggregator::FactsAggregateService;
use crate::application::stats::ApiStatisticsService;
use crate::domain::fact::FactsContainer;
use crate::infrastructure::providers::ProviderRegistry;

/// Default fact count when the caller omits `limit`
const DEFAULT_LIMIT: u32 = 20;

pub struct AppState {
    pub aggregator: Arc<FactsAggregateService>,
    pub registry: Arc<ProviderRegistry>,
    pub stats: Arc<ApiStatisticsService>,
    pub start_time: Instant,
}

pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/facts", get(get_facts))
        .route("/api/stats", get(get_stats))
        .route("/health", get(health))
        .route("/health/providers", get(provider_health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[derive(serde::Deserialize)]
pub struct FactsQuery {
    pub limit: Option<u32>,
    pub category: Option<String>,
}

/// Aggregated facts endpoint. Never fails from the caller's perspective:
/// upstream outages surface as placeholder facts, not error responses.
async fn get_facts(
    State(state): State<Arc<AppState>>,
    Query(query): Query<FactsQuery>,
) -> Json<FactsContainer> {
    let limit = query.limit.unwrap_or(DEFAULT_LIMIT);
    let facts = state
        .aggregator
        .get_facts(limit, query.category.as_deref())
        .await;

    Json(facts.as_ref().clone())
}

async fn get_stats(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    Json(json!({
        "uptime_seconds": state.start_time.elapsed().as_secs(),
        "apis": state.stats.snapshot(),
    }))
}

async fn health(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    Json(json!({
        "status": "healthy",
        "uptime_seconds": state.start_time.elapsed().as_secs(),
    }))
}

/// Pings every configured upstream; slow by design, intended for operators
async fn provider_health(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    let results = state.registry.health_check_all().await;

    let providers: serde_json::Map<String, serde_json::Value> = results
        .into_iter()
        .map(|(category, result)| {
            let status = match result {
                Ok(()) => json!({ "status": "ok" }),
                Err(e) => json!({ "status": "unavailable", "error": e.to_string() }),
            };
            (category, status)
        })
        .collect();

    Json(json!({ "providers": providers }))
}
