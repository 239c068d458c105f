use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::Payload;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum InsightType {
    Opportunity,
    Alert,
    Achievement,
    Recommendation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

/// Advisory record surfaced on the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Insight {
    pub id: u32,
    #[serde(rename = "type")]
    pub kind: InsightType,
    pub priority: Priority,
    pub title: String,
    pub description: String,
    pub impact: String,
    pub action: String,
    pub category: String,
    pub timestamp: DateTime<Utc>,
}

impl Payload for Vec<Insight> {
    const KEY: &'static str = "insights";
}

/// Coarse impact/effort grading, rendered capitalized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum Magnitude {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum RecommendationCategory {
    Seo,
    Social,
    Content,
    Automation,
}

impl RecommendationCategory {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "seo" => Some(Self::Seo),
            "social" => Some(Self::Social),
            "content" => Some(Self::Content),
            "automation" => Some(Self::Automation),
            _ => None,
        }
    }
}

/// Catalog recommendation. The category drives filtering and is not
/// part of the response body.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Recommendation {
    pub id: String,
    #[serde(skip)]
    pub category: RecommendationCategory,
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub impact: Magnitude,
    pub effort: Magnitude,
    pub estimated_improvement: String,
    pub action_items: Vec<String>,
}

impl Payload for Vec<Recommendation> {
    const KEY: &'static str = "recommendations";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Positive,
    Neutral,
    Negative,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Sentiment {
    /// Within `[0.5, 1.0]`, two decimals
    pub score: f64,
    pub label: SentimentLabel,
    pub keywords: Vec<String>,
}

impl Payload for Sentiment {
    const KEY: &'static str = "sentiment";
}
