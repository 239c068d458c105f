use axum::{
    extract::State,
    response::Json,
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

use crate::{
    handlers::common::{CountInput, LenientJson, QueryPairs, DEFAULT_WINDOW},
    metrics,
    models::{
        forecast::BestTimes, Insight, PlatformBestTimes, Prediction, Recommendation, Sentiment,
        TrendAnalysis,
    },
    services::{insights::CategoryFilter, ForecastingService, InsightsService},
    ApiResult, AppState,
};

const DEFAULT_METRIC_TYPE: &str = "engagement";
const DEFAULT_TREND_METRIC: &str = "traffic";
const DEFAULT_PLATFORM: &str = "all";

/// Build the AI Router scoped under `/api/ai`.
pub fn ai_routes() -> Router<AppState> {
    Router::new()
        .route("/insights", get(get_insights))
        .route("/predict", post(predict))
        .route("/recommendations", get(get_recommendations))
        .route("/best-time-to-post", get(best_time_to_post))
        .route("/trend-analysis", post(trend_analysis))
        .route("/sentiment", post(analyze_sentiment))
}

/// Body accepted by `POST /api/ai/predict`. Both fields are optional and
/// the body itself may be missing or malformed.
#[derive(Debug, Deserialize, ToSchema)]
pub struct PredictRequest {
    #[schema(example = "engagement")]
    pub metric_type: Option<String>,
    /// Days ahead to forecast (default: 7)
    #[schema(example = 7)]
    pub time_horizon: Option<u32>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct TrendAnalysisRequest {
    #[schema(example = "traffic")]
    pub metric: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct SentimentRequest {
    pub text: Option<String>,
}

#[derive(Debug, Default, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct RecommendationsQuery {
    /// seo, social, content, automation or all (default)
    pub category: Option<String>,
}

impl RecommendationsQuery {
    pub fn from_pairs(pairs: &QueryPairs) -> Self {
        Self {
            category: pairs.first("category").map(str::to_string),
        }
    }
}

#[derive(Debug, Default, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct BestTimeQuery {
    /// Platform name echoed back in the response (default: all)
    pub platform: Option<String>,
}

impl BestTimeQuery {
    pub fn from_pairs(pairs: &QueryPairs) -> Self {
        Self {
            platform: pairs.first("platform").map(str::to_string),
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/ai/insights",
    responses(
        (status = 200, description = "Current dashboard insights", body = Vec<Insight>)
    ),
    tag = "AI"
)]
pub async fn get_insights(State(state): State<AppState>) -> ApiResult<Vec<Insight>> {
    let insights = InsightsService::from_state(&state).insights();
    Ok(Json(state.envelope(insights)))
}

#[utoipa::path(
    post,
    path = "/api/ai/predict",
    request_body(content = PredictRequest, description = "Optional; `{}` is assumed when absent"),
    responses(
        (status = 200, description = "Forecast starting tomorrow", body = Prediction)
    ),
    tag = "AI"
)]
pub async fn predict(State(state): State<AppState>, body: LenientJson) -> ApiResult<Prediction> {
    let metric_type = body.string_or("metric_type", DEFAULT_METRIC_TYPE);
    let horizon = CountInput::from_json_value(body.get("time_horizon")).resolve(
        "time_horizon",
        DEFAULT_WINDOW,
        state.config.max_prediction_horizon,
    );

    let prediction = ForecastingService::from_state(&state).predict(metric_type, horizon);
    metrics::record_prediction_points(prediction.predictions.len());
    Ok(Json(state.envelope(prediction)))
}

#[utoipa::path(
    get,
    path = "/api/ai/recommendations",
    params(RecommendationsQuery),
    responses(
        (status = 200, description = "Recommendations for the category; empty for unknown categories", body = Vec<Recommendation>)
    ),
    tag = "AI"
)]
pub async fn get_recommendations(
    State(state): State<AppState>,
    pairs: QueryPairs,
) -> ApiResult<Vec<Recommendation>> {
    let params = RecommendationsQuery::from_pairs(&pairs);
    let filter = CategoryFilter::parse(params.category.as_deref());
    let recommendations = InsightsService::from_state(&state).recommendations(filter);
    Ok(Json(state.envelope(recommendations)))
}

#[utoipa::path(
    get,
    path = "/api/ai/best-time-to-post",
    params(BestTimeQuery),
    responses(
        (status = 200, description = "Posting windows for today and the weekly pattern; `platform` is echoed beside `data`", body = BestTimes)
    ),
    tag = "AI"
)]
pub async fn best_time_to_post(
    State(state): State<AppState>,
    pairs: QueryPairs,
) -> ApiResult<PlatformBestTimes> {
    let params = BestTimeQuery::from_pairs(&pairs);
    let platform = params
        .platform
        .unwrap_or_else(|| DEFAULT_PLATFORM.to_string());
    let best = ForecastingService::from_state(&state).best_times(platform);
    Ok(Json(state.envelope(best)))
}

#[utoipa::path(
    post,
    path = "/api/ai/trend-analysis",
    request_body = TrendAnalysisRequest,
    responses(
        (status = 200, description = "Trend reading for the metric", body = TrendAnalysis)
    ),
    tag = "AI"
)]
pub async fn trend_analysis(
    State(state): State<AppState>,
    body: LenientJson,
) -> ApiResult<TrendAnalysis> {
    let metric = body.string_or("metric", DEFAULT_TREND_METRIC);
    let trend = ForecastingService::from_state(&state).trend_analysis(metric);
    Ok(Json(state.envelope(trend)))
}

#[utoipa::path(
    post,
    path = "/api/ai/sentiment",
    request_body = SentimentRequest,
    responses(
        (status = 200, description = "Sentiment score and label", body = Sentiment)
    ),
    tag = "AI"
)]
pub async fn analyze_sentiment(
    State(state): State<AppState>,
    body: LenientJson,
) -> ApiResult<Sentiment> {
    let text = body.string_or("text", "");
    let sentiment = InsightsService::from_state(&state).sentiment(&text);
    Ok(Json(state.envelope(sentiment)))
}
