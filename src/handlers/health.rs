use axum::{extract::State, response::Json};
use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::Serialize;
use utoipa::ToSchema;

use crate::handlers::AppState;

const SERVICE_MESSAGE: &str = "FlowMind AI - Autonomous Marketing Dashboard API";

/// Liveness payload. Not wrapped in the success envelope.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct HealthResponse {
    #[schema(example = "healthy")]
    pub status: &'static str,
    pub timestamp: DateTime<Utc>,
    #[schema(example = "FlowMind AI Backend")]
    pub service: String,
}

/// Root descriptor listing the endpoint groups.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ServiceDescriptor {
    pub message: &'static str,
    #[schema(example = "1.0.0")]
    pub version: &'static str,
    #[schema(value_type = Object)]
    pub endpoints: IndexMap<&'static str, &'static str>,
}

#[utoipa::path(
    get,
    path = "/api/health",
    responses(
        (status = 200, description = "Service is up", body = HealthResponse)
    ),
    tag = "Health"
)]
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        timestamp: state.now(),
        service: state.config.service_name.clone(),
    })
}

#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service name, version and endpoint groups", body = ServiceDescriptor)
    ),
    tag = "Health"
)]
pub async fn service_descriptor() -> Json<ServiceDescriptor> {
    let endpoints = IndexMap::from([
        ("health", "/api/health"),
        ("analytics", "/api/analytics"),
        ("ai", "/api/ai"),
        ("automation", "/api/automation"),
        ("integrations", "/api/integrations"),
        ("docs", "/swagger-ui"),
        ("metrics", "/metrics"),
    ]);

    Json(ServiceDescriptor {
        message: SERVICE_MESSAGE,
        version: env!("CARGO_PKG_VERSION"),
        endpoints,
    })
}
