use axum::{
    extract::State,
    response::Json,
    routing::get,
    Router,
};
use utoipa::IntoParams;

use crate::{
    handlers::common::{CountInput, QueryPairs, DEFAULT_WINDOW},
    metrics,
    models::{MetricPoint, OverviewMetrics, SeoHealth, SocialMetrics},
    services::AnalyticsService,
    ApiResult, AppState,
};

/// Build the analytics Router scoped under `/api/analytics`.
pub fn analytics_routes() -> Router<AppState> {
    Router::new()
        .route("/overview", get(get_overview))
        .route("/timeseries", get(get_timeseries))
        .route("/social-metrics", get(get_social_metrics))
        .route("/seo-health", get(get_seo_health))
}

/// Query parameters for the daily series
#[derive(Debug, Default, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct TimeseriesQuery {
    /// Number of days ending today (default: 7). Non-numeric values fall
    /// back to the default; out-of-range values are clamped.
    #[param(value_type = Option<u32>, example = 30)]
    pub days: Option<String>,
}

impl TimeseriesQuery {
    /// First `days` value wins when the key is repeated.
    pub fn from_pairs(pairs: &QueryPairs) -> Self {
        Self {
            days: pairs.first("days").map(str::to_string),
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/analytics/overview",
    responses(
        (status = 200, description = "Headline SEO, social and content numbers", body = OverviewMetrics)
    ),
    tag = "Analytics"
)]
pub async fn get_overview(State(state): State<AppState>) -> ApiResult<OverviewMetrics> {
    let overview = AnalyticsService::from_state(&state).overview();
    Ok(Json(state.envelope(overview)))
}

#[utoipa::path(
    get,
    path = "/api/analytics/timeseries",
    params(TimeseriesQuery),
    responses(
        (status = 200, description = "Daily metric points, oldest first", body = Vec<MetricPoint>)
    ),
    tag = "Analytics"
)]
pub async fn get_timeseries(
    State(state): State<AppState>,
    pairs: QueryPairs,
) -> ApiResult<Vec<MetricPoint>> {
    let params = TimeseriesQuery::from_pairs(&pairs);
    let days = CountInput::from_str_value(params.days.as_deref()).resolve(
        "days",
        DEFAULT_WINDOW,
        state.config.max_series_days,
    );

    let series = AnalyticsService::from_state(&state).timeseries(days);
    metrics::record_series_points(series.len());
    Ok(Json(state.envelope(series)))
}

#[utoipa::path(
    get,
    path = "/api/analytics/social-metrics",
    responses(
        (status = 200, description = "Per-platform audience and engagement", body = SocialMetrics)
    ),
    tag = "Analytics"
)]
pub async fn get_social_metrics(State(state): State<AppState>) -> ApiResult<SocialMetrics> {
    let social = AnalyticsService::from_state(&state).social_metrics();
    Ok(Json(state.envelope(social)))
}

#[utoipa::path(
    get,
    path = "/api/analytics/seo-health",
    responses(
        (status = 200, description = "SEO score, open issues and keyword positions", body = SeoHealth)
    ),
    tag = "Analytics"
)]
pub async fn get_seo_health(State(state): State<AppState>) -> ApiResult<SeoHealth> {
    let health = AnalyticsService::from_state(&state).seo_health();
    Ok(Json(state.envelope(health)))
}
