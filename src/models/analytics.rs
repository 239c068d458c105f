use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::Payload;

/// One day of synthetic traffic, engagement and conversion counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MetricPoint {
    #[schema(example = "2024-06-10")]
    pub date: NaiveDate,
    #[schema(example = 12480)]
    pub traffic: u32,
    #[schema(example = 6120)]
    pub engagement: u32,
    #[schema(example = 131)]
    pub conversions: u32,
}

impl Payload for Vec<MetricPoint> {
    const KEY: &'static str = "data";
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SeoOverview {
    pub organic_traffic: u32,
    pub keywords_ranking: u32,
    pub backlinks: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SocialOverview {
    pub total_followers: u32,
    pub engagement_rate: f64,
    pub reach: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ContentOverview {
    pub conversions: u32,
    pub bounce_rate: f64,
    /// Seconds
    pub avg_session_duration: u32,
}

/// Dashboard headline numbers across the three channels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct OverviewMetrics {
    pub seo: SeoOverview,
    pub social: SocialOverview,
    pub content: ContentOverview,
}

impl Payload for OverviewMetrics {
    const KEY: &'static str = "data";
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct YoutubeChannelMetrics {
    pub subscribers: u32,
    pub views: u32,
    pub engagement: f64,
    pub videos: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TwitterMetrics {
    pub followers: u32,
    pub impressions: u32,
    pub engagement: f64,
    pub tweets: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct InstagramMetrics {
    pub followers: u32,
    pub reach: u32,
    pub engagement: f64,
    pub posts: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SocialMetrics {
    pub youtube: YoutubeChannelMetrics,
    pub twitter: TwitterMetrics,
    pub instagram: InstagramMetrics,
}

impl Payload for SocialMetrics {
    const KEY: &'static str = "data";
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SeoIssues {
    pub critical: u32,
    pub warnings: u32,
    pub notices: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct KeywordRanking {
    pub keyword: String,
    pub position: u32,
    pub volume: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SeoHealth {
    pub overall_score: u32,
    pub issues: SeoIssues,
    pub top_keywords: Vec<KeywordRanking>,
    pub page_speed: u32,
    pub mobile_friendly: bool,
}

impl Payload for SeoHealth {
    const KEY: &'static str = "data";
}
