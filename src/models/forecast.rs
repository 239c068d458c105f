use chrono::NaiveDate;
use indexmap::IndexMap;
use serde::{ser::SerializeMap, Deserialize, Serialize};
use utoipa::ToSchema;

use crate::Payload;

/// Forecast value for one future day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PredictionPoint {
    #[schema(example = "2024-06-11")]
    pub date: NaiveDate,
    #[schema(example = 4210)]
    pub predicted_value: u32,
    /// Always within `[0.85, 0.95)`
    #[schema(example = 0.91)]
    pub confidence: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Increasing,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Prediction {
    #[schema(example = "engagement")]
    pub metric_type: String,
    pub predictions: Vec<PredictionPoint>,
    #[schema(example = 0.87)]
    pub model_accuracy: f64,
    pub trend: Trend,
}

impl Payload for Prediction {
    const KEY: &'static str = "prediction";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Upward,
    Downward,
    Stable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Outlook {
    Increase,
    Decrease,
    Maintain,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TrendForecast {
    pub next_week: Outlook,
    pub probability: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Seasonality {
    pub weekly_pattern: bool,
    pub peak_days: Vec<String>,
    pub low_days: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TrendAnalysis {
    pub metric: String,
    pub current_trend: TrendDirection,
    pub strength: f64,
    pub forecast: TrendForecast,
    pub anomalies_detected: u32,
    pub seasonality: Seasonality,
}

impl Payload for TrendAnalysis {
    const KEY: &'static str = "trend";
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PostingWindow {
    #[schema(example = "13:00")]
    pub time: String,
    pub score: f64,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct BestTimes {
    pub today: Vec<PostingWindow>,
    /// Weekday name to relative engagement score
    #[schema(value_type = Object)]
    pub weekly_pattern: IndexMap<String, f64>,
}

/// Best posting times together with the platform they were requested for.
/// Serialized as sibling `data` and `platform` keys of the envelope.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlatformBestTimes {
    pub platform: String,
    pub data: BestTimes,
}

impl Payload for PlatformBestTimes {
    const KEY: &'static str = "data";

    fn serialize_entries<M: SerializeMap>(&self, map: &mut M) -> Result<(), M::Error> {
        map.serialize_entry(Self::KEY, &self.data)?;
        map.serialize_entry("platform", &self.platform)
    }
}
