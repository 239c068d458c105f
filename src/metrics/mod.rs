/*!
 * # Metrics Module
 *
 * In-process counters for the FlowMind API, exported in Prometheus text
 * format at `/metrics`.
 *
 * - HTTP requests by route and status class
 * - Generated series points and prediction points
 */

use axum::{
    extract::{MatchedPath, Request},
    http::header,
    middleware::Next,
    response::{IntoResponse, Response},
};
use dashmap::DashMap;
use once_cell::sync::Lazy;
use std::fmt::Write as _;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

#[derive(Debug, Clone, Default)]
pub struct Counter {
    value: Arc<AtomicU64>,
}

impl Counter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn inc(&self) {
        self.value.fetch_add(1, Ordering::Relaxed);
    }

    pub fn inc_by(&self, value: u64) {
        self.value.fetch_add(value, Ordering::Relaxed);
    }

    pub fn get(&self) -> u64 {
        self.value.load(Ordering::Relaxed)
    }
}

/// Status class label used for request counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StatusClass {
    Success,
    ClientError,
    ServerError,
    Other,
}

impl StatusClass {
    pub fn from_code(code: u16) -> Self {
        match code {
            200..=299 => Self::Success,
            400..=499 => Self::ClientError,
            500..=599 => Self::ServerError,
            _ => Self::Other,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Success => "2xx",
            Self::ClientError => "4xx",
            Self::ServerError => "5xx",
            Self::Other => "other",
        }
    }
}

#[derive(Debug, Default)]
pub struct MetricsRegistry {
    requests: DashMap<(String, StatusClass), Counter>,
    pub series_points: Counter,
    pub prediction_points: Counter,
}

impl MetricsRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_request(&self, route: &str, status: u16) {
        self.requests
            .entry((route.to_string(), StatusClass::from_code(status)))
            .or_default()
            .inc();
    }

    pub fn requests_for(&self, route: &str, class: StatusClass) -> u64 {
        self.requests
            .get(&(route.to_string(), class))
            .map(|counter| counter.get())
            .unwrap_or(0)
    }

    pub fn requests_total(&self) -> u64 {
        self.requests.iter().map(|entry| entry.value().get()).sum()
    }

    /// Render every counter in Prometheus text exposition format.
    pub fn export_prometheus(&self) -> String {
        let mut output = String::new();

        let mut rows: Vec<((String, StatusClass), u64)> = self
            .requests
            .iter()
            .map(|entry| (entry.key().clone(), entry.value().get()))
            .collect();
        rows.sort();

        output.push_str("# HELP flowmind_http_requests_total HTTP requests by route and status class\n");
        output.push_str("# TYPE flowmind_http_requests_total counter\n");
        for ((route, class), count) in rows {
            let _ = writeln!(
                output,
                "flowmind_http_requests_total{{route=\"{}\",status=\"{}\"}} {}",
                escape_label(&route),
                class.label(),
                count
            );
        }

        output.push_str("# HELP flowmind_series_points_total Time-series points generated\n");
        output.push_str("# TYPE flowmind_series_points_total counter\n");
        let _ = writeln!(output, "flowmind_series_points_total {}", self.series_points.get());

        output.push_str("# HELP flowmind_prediction_points_total Prediction points generated\n");
        output.push_str("# TYPE flowmind_prediction_points_total counter\n");
        let _ = writeln!(
            output,
            "flowmind_prediction_points_total {}",
            self.prediction_points.get()
        );

        output
    }
}

fn escape_label(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}

// Global metrics registry
pub static METRICS: Lazy<MetricsRegistry> = Lazy::new(MetricsRegistry::new);

pub fn record_series_points(count: usize) {
    METRICS.series_points.inc_by(count as u64);
}

pub fn record_prediction_points(count: usize) {
    METRICS.prediction_points.inc_by(count as u64);
}

/// Count every response under its matched route template. Unmatched
/// requests share one label so arbitrary paths cannot grow the registry.
pub async fn track_requests(request: Request, next: Next) -> Response {
    let route = request
        .extensions()
        .get::<MatchedPath>()
        .map(|path| path.as_str().to_string())
        .unwrap_or_else(|| "unmatched".to_string());

    let response = next.run(request).await;
    METRICS.record_request(&route, response.status().as_u16());
    response
}

// HTTP endpoint handler for metrics
pub async fn metrics_handler() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        METRICS.export_prometheus(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn requests_are_bucketed_by_status_class() {
        let registry = MetricsRegistry::new();
        registry.record_request("/api/health", 200);
        registry.record_request("/api/health", 204);
        registry.record_request("/api/automation/execute", 400);
        registry.record_request("unmatched", 404);

        assert_eq!(registry.requests_for("/api/health", StatusClass::Success), 2);
        assert_eq!(
            registry.requests_for("/api/automation/execute", StatusClass::ClientError),
            1
        );
        assert_eq!(registry.requests_for("/api/health", StatusClass::ServerError), 0);
        assert_eq!(registry.requests_total(), 4);
    }

    #[test]
    fn export_lists_every_family() {
        let registry = MetricsRegistry::new();
        registry.record_request("/api/analytics/timeseries", 200);
        registry.series_points.inc_by(7);

        let text = registry.export_prometheus();
        assert!(text.contains(
            "flowmind_http_requests_total{route=\"/api/analytics/timeseries\",status=\"2xx\"} 1"
        ));
        assert!(text.contains("flowmind_series_points_total 7"));
        assert!(text.contains("flowmind_prediction_points_total 0"));
    }

    #[test]
    fn status_classes() {
        assert_eq!(StatusClass::from_code(201), StatusClass::Success);
        assert_eq!(StatusClass::from_code(500), StatusClass::ServerError);
        assert_eq!(StatusClass::from_code(302).label(), "other");
    }
}
