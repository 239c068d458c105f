//! FlowMind API Library
//!
//! Synthetic marketing-analytics backend: bounded random time series,
//! forward-looking prediction series and fixed catalog payloads, each wrapped
//! in a uniform `{success, <payload>, timestamp}` envelope.
#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]
#![allow(elided_lifetimes_in_paths)]
#![warn(clippy::all, clippy::perf, clippy::dbg_macro)]

// Core modules
pub mod common;
pub mod config;
pub mod errors;
pub mod handlers;
pub mod metrics;
pub mod middleware_helpers;
pub mod models;
pub mod openapi;
pub mod services;
pub mod tracing;

use std::any::Any;
use std::sync::Arc;

use axum::{
    http::HeaderValue,
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{ser::SerializeMap, Serialize, Serializer};
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{Any as AnyOrigin, CorsLayer},
};

use crate::common::{Clock, RandomSource, SystemClock};
use crate::config::AppConfig;
use crate::errors::ServiceError;

// App state definition
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub clock: Arc<dyn Clock>,
    pub rng: RandomSource,
}

impl AppState {
    /// State backed by the wall clock and the random source the config asks for.
    pub fn new(config: AppConfig) -> Self {
        let rng = RandomSource::from_seed(config.rng_seed);
        Self {
            config: Arc::new(config),
            clock: Arc::new(SystemClock),
            rng,
        }
    }

    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    pub fn with_rng(mut self, rng: RandomSource) -> Self {
        self.rng = rng;
        self
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    /// Wrap a payload in a success envelope stamped with the current instant.
    pub fn envelope<P: Payload>(&self, payload: P) -> Envelope<P> {
        Envelope::success(payload, self.now())
    }
}

/// A response body that knows which envelope key it travels under.
pub trait Payload: Serialize {
    const KEY: &'static str;

    /// Write this payload's entries into the envelope map. Payloads that
    /// carry sibling fields next to their main key override this.
    fn serialize_entries<M: SerializeMap>(&self, map: &mut M) -> Result<(), M::Error> {
        map.serialize_entry(Self::KEY, self)
    }
}

/// Uniform response wrapper: `{success, <P::KEY>: payload, timestamp}`.
#[derive(Debug, Clone, PartialEq)]
pub struct Envelope<P> {
    pub success: bool,
    pub payload: P,
    pub timestamp: DateTime<Utc>,
}

impl<P> Envelope<P> {
    pub fn success(payload: P, timestamp: DateTime<Utc>) -> Self {
        Self {
            success: true,
            payload,
            timestamp,
        }
    }
}

impl<P: Payload> Serialize for Envelope<P> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("success", &self.success)?;
        self.payload.serialize_entries(&mut map)?;
        map.serialize_entry("timestamp", &self.timestamp)?;
        map.end()
    }
}

/// Standard API result type for JSON responses
pub type ApiResult<P> = Result<Json<Envelope<P>>, ServiceError>;

/// Routes mounted under `/api`.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health::health_check))
        .nest("/analytics", handlers::analytics::analytics_routes())
        .nest("/ai", handlers::ai::ai_routes())
        .nest("/automation", handlers::automation::automation_routes())
        .nest("/integrations", handlers::integrations::integration_routes())
}

/// Full application router with middleware, ready to serve.
pub fn app_router(state: AppState) -> Router {
    let cors = cors_layer(&state.config);

    Router::new()
        .route("/", get(handlers::health::service_descriptor))
        .route("/metrics", get(metrics::metrics_handler))
        .nest("/api", api_routes())
        .merge(openapi::swagger_ui())
        .fallback(handlers::not_found)
        .layer(axum::middleware::from_fn(metrics::track_requests))
        // HTTP tracing layer for consistent request/response telemetry
        .layer(crate::tracing::configure_http_tracing())
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(cors)
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            middleware_helpers::request_clock_middleware,
        ))
        // Ensure every request carries a request id for traceability
        .layer(axum::middleware::from_fn(
            middleware_helpers::request_id_middleware,
        ))
        .with_state(state)
}

/// Build the CORS layer: explicit origins when configured, otherwise
/// permissive when allowed, otherwise same-origin only.
pub fn cors_layer(config: &AppConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .cors_origins()
        .iter()
        .filter_map(|origin| HeaderValue::from_str(origin).ok())
        .collect();

    if !origins.is_empty() {
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(AnyOrigin)
            .allow_headers(AnyOrigin)
    } else if config.should_allow_permissive_cors() {
        CorsLayer::permissive()
    } else {
        ::tracing::warn!(
            "No CORS origins configured and permissive CORS disabled; cross-origin requests will be refused"
        );
        CorsLayer::new()
    }
}

fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = err
        .downcast_ref::<String>()
        .cloned()
        .or_else(|| err.downcast_ref::<&str>().map(|s| s.to_string()))
        .unwrap_or_else(|| "unknown panic payload".to_string());
    ::tracing::error!(panic = %detail, "handler panicked");
    ServiceError::InternalError(detail).into_response()
}

#[cfg(test)]
mod envelope_tests {
    use super::*;
    use crate::common::FixedClock;
    use crate::models::MetricPoint;
    use serde_json::json;

    #[derive(Serialize)]
    struct Greeting {
        text: &'static str,
    }

    impl Payload for Greeting {
        const KEY: &'static str = "greeting";
    }

    fn fixed_time() -> DateTime<Utc> {
        FixedClock::on_date(2024, 6, 10).unwrap().now()
    }

    #[test]
    fn envelope_uses_payload_key() {
        let value = serde_json::to_value(Envelope::success(Greeting { text: "hi" }, fixed_time()))
            .unwrap();
        assert_eq!(
            value,
            json!({
                "success": true,
                "greeting": {"text": "hi"},
                "timestamp": "2024-06-10T12:00:00Z"
            })
        );
    }

    #[test]
    fn series_travels_under_data() {
        let point = MetricPoint {
            date: NaiveDate::from_ymd_opt(2024, 6, 10).unwrap(),
            traffic: 10_000,
            engagement: 5_000,
            conversions: 100,
        };
        let value = serde_json::to_value(Envelope::success(vec![point], fixed_time())).unwrap();
        assert_eq!(value["data"][0]["date"], "2024-06-10");
        assert_eq!(value["success"], true);
        assert_eq!(value.as_object().unwrap().len(), 3);
    }

    #[test]
    fn state_envelope_is_stamped_by_the_clock() {
        let state = AppState::new(AppConfig::default())
            .with_clock(FixedClock::on_date(2024, 6, 10).unwrap());
        let envelope = state.envelope(Greeting { text: "x" });
        assert_eq!(envelope.timestamp, fixed_time());
        assert_eq!(state.today(), NaiveDate::from_ymd_opt(2024, 6, 10).unwrap());
    }

    #[test]
    fn panic_payloads_become_internal_errors() {
        let response = panic_response(Box::new("kaboom"));
        assert_eq!(
            response.status(),
            axum::http::StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
