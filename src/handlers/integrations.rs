use axum::{
    extract::State,
    response::Json,
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use serde_json::Value;
use utoipa::ToSchema;
use validator::Validate;

use crate::{
    errors::ErrorResponse,
    handlers::common::{LenientJson, ValidatedJson},
    models::{ConnectResult, Integrations, SyncResult, YoutubeStats},
    services::{integrations::ALL_PLATFORMS, IntegrationService},
    ApiResult, AppState,
};

/// Build the integrations Router scoped under `/api/integrations`.
pub fn integration_routes() -> Router<AppState> {
    Router::new()
        .route("/status", get(get_status))
        .route("/youtube/stats", get(get_youtube_stats))
        .route("/sync", post(sync_data))
        .route("/connect", post(connect_integration))
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct SyncRequest {
    /// Platform to sync (default: all)
    pub platform: Option<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct ConnectRequest {
    #[validate(length(min = 1, max = 64))]
    #[schema(example = "youtube")]
    pub platform: String,
    /// Accepted and discarded
    #[serde(default)]
    #[schema(value_type = Object)]
    pub credentials: Value,
}

#[utoipa::path(
    get,
    path = "/api/integrations/status",
    responses(
        (status = 200, description = "Platform name to connection status", body = serde_json::Value)
    ),
    tag = "Integrations"
)]
pub async fn get_status(State(state): State<AppState>) -> ApiResult<Integrations> {
    let status = IntegrationService::from_state(&state).status();
    Ok(Json(state.envelope(status)))
}

#[utoipa::path(
    get,
    path = "/api/integrations/youtube/stats",
    responses(
        (status = 200, description = "YouTube channel statistics", body = YoutubeStats)
    ),
    tag = "Integrations"
)]
pub async fn get_youtube_stats(State(state): State<AppState>) -> ApiResult<YoutubeStats> {
    let stats = IntegrationService::from_state(&state).youtube_stats();
    Ok(Json(state.envelope(stats)))
}

#[utoipa::path(
    post,
    path = "/api/integrations/sync",
    request_body = SyncRequest,
    responses(
        (status = 200, description = "Sync started", body = SyncResult)
    ),
    tag = "Integrations"
)]
pub async fn sync_data(State(state): State<AppState>, body: LenientJson) -> ApiResult<SyncResult> {
    let platform = body.string_or("platform", ALL_PLATFORMS);
    let result = IntegrationService::from_state(&state).sync(&platform);
    Ok(Json(state.envelope(result)))
}

#[utoipa::path(
    post,
    path = "/api/integrations/connect",
    request_body = ConnectRequest,
    responses(
        (status = 200, description = "Integration connected", body = ConnectResult),
        (status = 400, description = "Missing or empty platform", body = ErrorResponse)
    ),
    tag = "Integrations"
)]
pub async fn connect_integration(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<ConnectRequest>,
) -> ApiResult<ConnectResult> {
    let result = IntegrationService::from_state(&state).connect(&request.platform);
    Ok(Json(state.envelope(result)))
}
