use std::sync::Arc;

use chrono::{Days, NaiveDate};
use indexmap::IndexMap;
use rand::{seq::SliceRandom, Rng};
use tracing::debug;

use crate::{
    common::{rate_between, Clock, RandomSource},
    models::forecast::{
        BestTimes, Outlook, PlatformBestTimes, PostingWindow, Prediction, PredictionPoint,
        Seasonality, Trend, TrendAnalysis, TrendDirection, TrendForecast,
    },
    AppState,
};

pub const PREDICTED_VALUE_RANGE: std::ops::Range<u32> = 2_000..7_000;
pub const CONFIDENCE_RANGE: std::ops::Range<f64> = 0.85..0.95;
pub const MODEL_ACCURACY: f64 = 0.87;

const POSTING_WINDOWS: [(&str, f64, &str); 3] = [
    ("09:00", 0.92, "High engagement period"),
    ("13:00", 0.85, "Lunch break peak"),
    ("19:00", 0.88, "Evening engagement spike"),
];

const WEEKLY_PATTERN: [(&str, f64); 7] = [
    ("Monday", 0.78),
    ("Tuesday", 0.85),
    ("Wednesday", 0.92),
    ("Thursday", 0.88),
    ("Friday", 0.75),
    ("Saturday", 0.65),
    ("Sunday", 0.70),
];

/// Build `horizon` forecast points starting tomorrow. Per point the draws
/// are predicted value, then confidence.
pub fn generate_predictions<R: Rng + ?Sized>(
    rng: &mut R,
    today: NaiveDate,
    horizon: u32,
) -> Vec<PredictionPoint> {
    (1..=u64::from(horizon))
        .filter_map(|ahead| today.checked_add_days(Days::new(ahead)))
        .map(|date| PredictionPoint {
            date,
            predicted_value: rng.gen_range(PREDICTED_VALUE_RANGE),
            confidence: rng.gen_range(CONFIDENCE_RANGE),
        })
        .collect()
}

#[derive(Clone)]
pub struct ForecastingService {
    clock: Arc<dyn Clock>,
    rng: RandomSource,
}

impl ForecastingService {
    pub fn new(clock: Arc<dyn Clock>, rng: RandomSource) -> Self {
        Self { clock, rng }
    }

    pub fn from_state(state: &AppState) -> Self {
        Self::new(state.clock.clone(), state.rng.clone())
    }

    pub fn predict(&self, metric_type: impl Into<String>, horizon: u32) -> Prediction {
        let today = self.clock.today();
        let predictions = self.rng.with(|rng| generate_predictions(rng, today, horizon));
        let metric_type = metric_type.into();
        debug!(%metric_type, horizon, "generated prediction");

        Prediction {
            metric_type,
            predictions,
            model_accuracy: MODEL_ACCURACY,
            trend: Trend::Increasing,
        }
    }

    /// Random trend reading with fixed weekly seasonality.
    pub fn trend_analysis(&self, metric: impl Into<String>) -> TrendAnalysis {
        self.rng.with(|rng| {
            let current_trend = *[
                TrendDirection::Upward,
                TrendDirection::Downward,
                TrendDirection::Stable,
            ]
            .choose(rng)
            .unwrap_or(&TrendDirection::Stable);
            let strength = rate_between(rng, 0.6, 0.95);
            let next_week = *[Outlook::Increase, Outlook::Decrease, Outlook::Maintain]
                .choose(rng)
                .unwrap_or(&Outlook::Maintain);
            let probability = rate_between(rng, 0.7, 0.95);

            TrendAnalysis {
                metric: metric.into(),
                current_trend,
                strength,
                forecast: TrendForecast {
                    next_week,
                    probability,
                },
                anomalies_detected: rng.gen_range(0..=3),
                seasonality: Seasonality {
                    weekly_pattern: true,
                    peak_days: vec!["Wednesday".into(), "Thursday".into()],
                    low_days: vec!["Saturday".into(), "Sunday".into()],
                },
            }
        })
    }

    pub fn best_times(&self, platform: impl Into<String>) -> PlatformBestTimes {
        let today = POSTING_WINDOWS
            .iter()
            .map(|(time, score, reason)| PostingWindow {
                time: (*time).to_string(),
                score: *score,
                reason: (*reason).to_string(),
            })
            .collect();
        let weekly_pattern: IndexMap<String, f64> = WEEKLY_PATTERN
            .iter()
            .map(|(day, score)| ((*day).to_string(), *score))
            .collect();

        PlatformBestTimes {
            platform: platform.into(),
            data: BestTimes {
                today,
                weekly_pattern,
            },
        }
    }
}
