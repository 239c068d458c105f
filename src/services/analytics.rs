use std::sync::Arc;

use chrono::{Days, NaiveDate};
use rand::Rng;
use tracing::debug;

use crate::{
    common::{rate_between, Clock, RandomSource},
    models::analytics::{
        ContentOverview, InstagramMetrics, KeywordRanking, MetricPoint, OverviewMetrics,
        SeoHealth, SeoIssues, SeoOverview, SocialMetrics, SocialOverview, TwitterMetrics,
        YoutubeChannelMetrics,
    },
    AppState,
};

/// Half-open ranges for the daily series fields.
pub const TRAFFIC_RANGE: std::ops::Range<u32> = 10_000..15_000;
pub const ENGAGEMENT_RANGE: std::ops::Range<u32> = 5_000..7_000;
pub const CONVERSIONS_RANGE: std::ops::Range<u32> = 100..150;

const TRACKED_KEYWORDS: [(&str, u32); 3] = [
    ("AI marketing", 12_000),
    ("automation tools", 8_500),
    ("predictive analytics", 6_200),
];

/// Build `days` points ending at `today`, oldest first. Each field is an
/// independent uniform draw; per point the draws are traffic, engagement,
/// then conversions.
pub fn generate_timeseries<R: Rng + ?Sized>(
    rng: &mut R,
    today: NaiveDate,
    days: u32,
) -> Vec<MetricPoint> {
    (0..days)
        .rev()
        .filter_map(|offset| today.checked_sub_days(Days::new(u64::from(offset))))
        .map(|date| MetricPoint {
            date,
            traffic: rng.gen_range(TRAFFIC_RANGE),
            engagement: rng.gen_range(ENGAGEMENT_RANGE),
            conversions: rng.gen_range(CONVERSIONS_RANGE),
        })
        .collect()
}

/// Dashboard analytics: the headline overview, daily series and the
/// per-channel breakdowns.
#[derive(Clone)]
pub struct AnalyticsService {
    clock: Arc<dyn Clock>,
    rng: RandomSource,
}

impl AnalyticsService {
    pub fn new(clock: Arc<dyn Clock>, rng: RandomSource) -> Self {
        Self { clock, rng }
    }

    pub fn from_state(state: &AppState) -> Self {
        Self::new(state.clock.clone(), state.rng.clone())
    }

    /// Fixed headline numbers.
    pub fn overview(&self) -> OverviewMetrics {
        OverviewMetrics {
            seo: SeoOverview {
                organic_traffic: 15_420,
                keywords_ranking: 245,
                backlinks: 89,
            },
            social: SocialOverview {
                total_followers: 12_850,
                engagement_rate: 4.2,
                reach: 45_600,
            },
            content: ContentOverview {
                conversions: 234,
                bounce_rate: 32.1,
                avg_session_duration: 145,
            },
        }
    }

    pub fn timeseries(&self, days: u32) -> Vec<MetricPoint> {
        let today = self.clock.today();
        let series = self.rng.with(|rng| generate_timeseries(rng, today, days));
        debug!(days, %today, points = series.len(), "generated timeseries");
        series
    }

    pub fn social_metrics(&self) -> SocialMetrics {
        self.rng.with(|rng| SocialMetrics {
            youtube: YoutubeChannelMetrics {
                subscribers: rng.gen_range(5_000..=50_000),
                views: rng.gen_range(100_000..=500_000),
                engagement: rate_between(rng, 3.5, 7.5),
                videos: rng.gen_range(50..=200),
            },
            twitter: TwitterMetrics {
                followers: rng.gen_range(10_000..=100_000),
                impressions: rng.gen_range(50_000..=500_000),
                engagement: rate_between(rng, 2.0, 6.0),
                tweets: rng.gen_range(100..=1_000),
            },
            instagram: InstagramMetrics {
                followers: rng.gen_range(8_000..=80_000),
                reach: rng.gen_range(30_000..=300_000),
                engagement: rate_between(rng, 4.0, 9.0),
                posts: rng.gen_range(50..=500),
            },
        })
    }

    pub fn seo_health(&self) -> SeoHealth {
        self.rng.with(|rng| SeoHealth {
            overall_score: rng.gen_range(65..=95),
            issues: SeoIssues {
                critical: rng.gen_range(0..=3),
                warnings: rng.gen_range(2..=8),
                notices: rng.gen_range(5..=15),
            },
            top_keywords: TRACKED_KEYWORDS
                .iter()
                .map(|(keyword, volume)| KeywordRanking {
                    keyword: (*keyword).to_string(),
                    position: rng.gen_range(1..=20),
                    volume: *volume,
                })
                .collect(),
            page_speed: rng.gen_range(70..=95),
            mobile_friendly: true,
        })
    }
}
