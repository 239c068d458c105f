use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "FlowMind API",
        version = "1.0.0",
        description = r#"
# FlowMind AI Marketing Dashboard API

Synthetic analytics backend for the FlowMind dashboard. Every call generates
fresh, bounded values or returns a fixed catalog.

## Response envelope

Successful responses are wrapped as

```json
{
  "success": true,
  "<key>": { },
  "timestamp": "2024-06-10T12:00:00Z"
}
```

where `<key>` is `data`, `prediction`, `insights`, `triggers`,
`integrations`, `recommendations`, `trend`, `sentiment`, `logs`, `result`
or `workflow` depending on the endpoint. `/api/health` and `/` are not
wrapped.

## Lenient inputs

`days` and `time_horizon` fall back to 7 when missing or non-numeric, clamp
negative values to 0 and clamp values above the configured maximum.
        "#,
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    ),
    servers(
        (url = "http://localhost:5000", description = "Local development")
    ),
    tags(
        (name = "Analytics", description = "Overview, daily series and channel breakdowns"),
        (name = "AI", description = "Predictions, insights and recommendations"),
        (name = "Automation", description = "Triggers, actions and workflows"),
        (name = "Integrations", description = "Third-party platform connections"),
        (name = "Health", description = "Health check endpoints")
    ),
    paths(
        // Health
        crate::handlers::health::health_check,
        crate::handlers::health::service_descriptor,

        // Analytics
        crate::handlers::analytics::get_overview,
        crate::handlers::analytics::get_timeseries,
        crate::handlers::analytics::get_social_metrics,
        crate::handlers::analytics::get_seo_health,

        // AI
        crate::handlers::ai::get_insights,
        crate::handlers::ai::predict,
        crate::handlers::ai::get_recommendations,
        crate::handlers::ai::best_time_to_post,
        crate::handlers::ai::trend_analysis,
        crate::handlers::ai::analyze_sentiment,

        // Automation
        crate::handlers::automation::get_triggers,
        crate::handlers::automation::execute_action,
        crate::handlers::automation::create_workflow,
        crate::handlers::automation::get_logs,

        // Integrations
        crate::handlers::integrations::get_status,
        crate::handlers::integrations::get_youtube_stats,
        crate::handlers::integrations::sync_data,
        crate::handlers::integrations::connect_integration,
    ),
    components(
        schemas(
            crate::models::MetricPoint,
            crate::models::PredictionPoint,
            crate::models::insights::RecommendationCategory,
            crate::models::integrations::IntegrationStatus,
            crate::handlers::ai::PredictRequest,

            // Error types
            crate::errors::ErrorResponse
        )
    )
)]
pub struct ApiDoc;

pub fn swagger_ui() -> SwaggerUi {
    SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_route_is_documented() {
        let openapi = ApiDoc::openapi();
        let json = serde_json::to_string(&openapi).unwrap();
        assert!(json.contains("FlowMind API"));
        for path in [
            "/api/health",
            "/api/analytics/timeseries",
            "/api/ai/predict",
            "/api/ai/best-time-to-post",
            "/api/automation/workflow/create",
            "/api/integrations/connect",
        ] {
            assert!(openapi.paths.paths.contains_key(path), "missing {path}");
        }
    }

    #[test]
    fn error_body_schema_is_registered() {
        let openapi = ApiDoc::openapi();
        let schemas = openapi.components.expect("components").schemas;
        assert!(schemas.contains_key("ErrorResponse"));
        assert!(schemas.contains_key("MetricPoint"));
    }
}
