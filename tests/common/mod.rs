#![allow(dead_code)]

use axum::{
    body::{to_bytes, Body},
    http::{Method, Request},
    response::Response,
    Router,
};
use chrono::NaiveDate;
use flowmind_api::{
    app_router,
    common::{FixedClock, RandomSource},
    config::AppConfig,
    AppState,
};
use serde_json::Value;
use tower::ServiceExt;

pub const TEST_SEED: u64 = 42;

pub fn test_today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 10).expect("valid date")
}

/// Full router with the clock frozen at 2024-06-10T12:00:00Z and a seeded
/// random source.
pub struct TestApp {
    router: Router,
    pub state: AppState,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_config(AppConfig::default())
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::build(AppConfig::default(), RandomSource::seeded(seed))
    }

    pub fn with_config(config: AppConfig) -> Self {
        Self::build(config, RandomSource::seeded(TEST_SEED))
    }

    fn build(config: AppConfig, rng: RandomSource) -> Self {
        let clock = FixedClock::on_date(2024, 6, 10).expect("valid date");
        let state = AppState::new(config).with_clock(clock).with_rng(rng);
        Self {
            router: app_router(state.clone()),
            state,
        }
    }

    /// Send a request with an optional JSON body.
    pub async fn request(&self, method: Method, uri: &str, body: Option<Value>) -> Response {
        let body = body.map(|json| {
            serde_json::to_vec(&json).expect("failed to serialize json request body")
        });
        self.request_raw(method, uri, body, &[]).await
    }

    /// Send raw bytes as a JSON body, plus extra headers.
    pub async fn request_raw(
        &self,
        method: Method,
        uri: &str,
        body: Option<Vec<u8>>,
        headers: &[(&str, &str)],
    ) -> Response {
        let mut builder = Request::builder().method(method).uri(uri);
        for (name, value) in headers {
            builder = builder.header(*name, *value);
        }

        let body = match body {
            Some(bytes) => {
                builder = builder.header("content-type", "application/json");
                Body::from(bytes)
            }
            None => Body::empty(),
        };

        let request = builder.body(body).expect("failed to build request");
        self.router
            .clone()
            .oneshot(request)
            .await
            .expect("router error during test request")
    }

    pub async fn get_json(&self, uri: &str) -> Value {
        read_json(self.request(Method::GET, uri, None).await).await
    }

    pub async fn post_json(&self, uri: &str, body: Value) -> Value {
        read_json(self.request(Method::POST, uri, Some(body)).await).await
    }
}

pub async fn read_body(response: Response) -> Vec<u8> {
    to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("failed to read body")
        .to_vec()
}

pub async fn read_json(response: Response) -> Value {
    let bytes = read_body(response).await;
    serde_json::from_slice(&bytes).expect("response body is not JSON")
}

/// Dates of a `data`/`predictions` array as strings.
pub fn dates(points: &Value) -> Vec<String> {
    points
        .as_array()
        .expect("array of points")
        .iter()
        .map(|p| p["date"].as_str().expect("date string").to_string())
        .collect()
}
