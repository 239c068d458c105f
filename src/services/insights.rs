//! Advisory content: dashboard insights, recommendations and sentiment.
use std::sync::Arc;

use chrono::{DateTime, Utc};
use rand::seq::SliceRandom;

use crate::{
    common::{rate_between, Clock, RandomSource},
    models::insights::{
        Insight, InsightType, Magnitude, Priority, Recommendation, RecommendationCategory,
        Sentiment, SentimentLabel,
    },
    AppState,
};

const SENTIMENT_KEYWORDS: [&str; 4] = ["AI", "marketing", "automation", "growth"];

/// Which recommendations to return.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryFilter {
    All,
    Only(RecommendationCategory),
    /// A category nobody publishes recommendations for
    Unknown,
}

impl CategoryFilter {
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            None | Some("") => Self::All,
            Some(value) if value.eq_ignore_ascii_case("all") => Self::All,
            Some(value) => RecommendationCategory::parse(value)
                .map(Self::Only)
                .unwrap_or(Self::Unknown),
        }
    }

    fn admits(self, category: RecommendationCategory) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == category,
            Self::Unknown => false,
        }
    }
}

#[derive(Clone)]
pub struct InsightsService {
    clock: Arc<dyn Clock>,
    rng: RandomSource,
}

impl InsightsService {
    pub fn new(clock: Arc<dyn Clock>, rng: RandomSource) -> Self {
        Self { clock, rng }
    }

    pub fn from_state(state: &AppState) -> Self {
        Self::new(state.clock.clone(), state.rng.clone())
    }

    /// The insight catalog, each entry stamped with the current instant.
    pub fn insights(&self) -> Vec<Insight> {
        insight_catalog(self.clock.now())
    }

    pub fn recommendations(&self, filter: CategoryFilter) -> Vec<Recommendation> {
        recommendation_catalog()
            .into_iter()
            .filter(|rec| filter.admits(rec.category))
            .collect()
    }

    /// Placeholder scoring: the text is not inspected.
    pub fn sentiment(&self, text: &str) -> Sentiment {
        tracing::debug!(chars = text.chars().count(), "scoring sentiment");
        self.rng.with(|rng| {
            let score = rate_between(rng, 0.5, 1.0);
            let label = *[
                SentimentLabel::Positive,
                SentimentLabel::Neutral,
                SentimentLabel::Negative,
            ]
            .choose(rng)
            .unwrap_or(&SentimentLabel::Neutral);

            Sentiment {
                score,
                label,
                keywords: SENTIMENT_KEYWORDS.iter().map(|k| (*k).to_string()).collect(),
            }
        })
    }
}

struct InsightSeed {
    id: u32,
    kind: InsightType,
    priority: Priority,
    title: &'static str,
    description: &'static str,
    impact: &'static str,
    action: &'static str,
    category: &'static str,
}

impl InsightSeed {
    fn stamp(&self, timestamp: DateTime<Utc>) -> Insight {
        Insight {
            id: self.id,
            kind: self.kind,
            priority: self.priority,
            title: self.title.to_string(),
            description: self.description.to_string(),
            impact: self.impact.to_string(),
            action: self.action.to_string(),
            category: self.category.to_string(),
            timestamp,
        }
    }
}

const INSIGHTS: [InsightSeed; 4] = [
    InsightSeed {
        id: 1,
        kind: InsightType::Opportunity,
        priority: Priority::High,
        title: "Optimal Posting Window Detected",
        description: "Your audience engagement peaks between 1-3 PM today. Consider posting your prepared content during this window for maximum reach.",
        impact: "+35% expected engagement",
        action: "Schedule post for 2:00 PM",
        category: "social_media",
    },
    InsightSeed {
        id: 2,
        kind: InsightType::Alert,
        priority: Priority::Medium,
        title: "SEO Ranking Decline Detected",
        description: "Your keyword \"AI marketing tools\" dropped 5 positions in the last 48 hours. Competitors have published fresh content.",
        impact: "-12% organic traffic",
        action: "Update content or publish new article",
        category: "seo",
    },
    InsightSeed {
        id: 3,
        kind: InsightType::Achievement,
        priority: Priority::Low,
        title: "Engagement Milestone Reached",
        description: "Your average engagement rate has increased by 23% this week, exceeding your monthly target.",
        impact: "+23% engagement growth",
        action: "Continue current content strategy",
        category: "performance",
    },
    InsightSeed {
        id: 4,
        kind: InsightType::Recommendation,
        priority: Priority::Medium,
        title: "Content Gap Opportunity",
        description: "Analysis shows high search volume for \"automation workflows\" with low competition. This aligns with your expertise.",
        impact: "Potential 5K+ monthly visitors",
        action: "Create comprehensive guide",
        category: "content",
    },
];

fn insight_catalog(now: DateTime<Utc>) -> Vec<Insight> {
    INSIGHTS.iter().map(|seed| seed.stamp(now)).collect()
}

struct RecommendationSeed {
    id: &'static str,
    category: RecommendationCategory,
    title: &'static str,
    description: &'static str,
    priority: Priority,
    impact: Magnitude,
    effort: Magnitude,
    estimated_improvement: &'static str,
    action_items: [&'static str; 3],
}

impl From<&RecommendationSeed> for Recommendation {
    fn from(seed: &RecommendationSeed) -> Self {
        Self {
            id: seed.id.to_string(),
            category: seed.category,
            title: seed.title.to_string(),
            description: seed.description.to_string(),
            priority: seed.priority,
            impact: seed.impact,
            effort: seed.effort,
            estimated_improvement: seed.estimated_improvement.to_string(),
            action_items: seed.action_items.iter().map(|s| (*s).to_string()).collect(),
        }
    }
}

// Ordered seo, social, content, automation.
const RECOMMENDATIONS: [RecommendationSeed; 7] = [
    RecommendationSeed {
        id: "seo_1",
        category: RecommendationCategory::Seo,
        title: "Update Title Tags",
        description: "Optimize title tags for top 5 pages to include trending keywords",
        priority: Priority::High,
        impact: Magnitude::High,
        effort: Magnitude::Low,
        estimated_improvement: "+15% CTR",
        action_items: [
            "Review current title tags",
            "Research trending keywords",
            "Update and A/B test",
        ],
    },
    RecommendationSeed {
        id: "seo_2",
        category: RecommendationCategory::Seo,
        title: "Build Backlinks",
        description: "Reach out to 10 high-authority sites in your niche for backlink opportunities",
        priority: Priority::Medium,
        impact: Magnitude::High,
        effort: Magnitude::High,
        estimated_improvement: "+8 Domain Authority",
        action_items: [
            "Identify target websites",
            "Create outreach email template",
            "Track responses",
        ],
    },
    RecommendationSeed {
        id: "social_1",
        category: RecommendationCategory::Social,
        title: "Increase Posting Frequency",
        description: "Data shows posting 2x per day increases engagement by 40%",
        priority: Priority::High,
        impact: Magnitude::High,
        effort: Magnitude::Medium,
        estimated_improvement: "+40% engagement",
        action_items: [
            "Create content calendar",
            "Prepare 2 weeks of content",
            "Use auto-scheduling",
        ],
    },
    RecommendationSeed {
        id: "social_2",
        category: RecommendationCategory::Social,
        title: "Leverage Video Content",
        description: "Video posts generate 3x more engagement than static images",
        priority: Priority::Medium,
        impact: Magnitude::High,
        effort: Magnitude::High,
        estimated_improvement: "+200% reach",
        action_items: [
            "Plan video content strategy",
            "Create short-form videos",
            "Test on multiple platforms",
        ],
    },
    RecommendationSeed {
        id: "content_1",
        category: RecommendationCategory::Content,
        title: "Create Pillar Content",
        description: "Build comprehensive guide on \"Marketing Automation 2025\"",
        priority: Priority::High,
        impact: Magnitude::High,
        effort: Magnitude::High,
        estimated_improvement: "+5K monthly visitors",
        action_items: [
            "Research topic thoroughly",
            "Create detailed outline",
            "Write and optimize content",
        ],
    },
    RecommendationSeed {
        id: "content_2",
        category: RecommendationCategory::Content,
        title: "Repurpose Top Content",
        description: "Convert your best blog posts into infographics and videos",
        priority: Priority::Medium,
        impact: Magnitude::Medium,
        effort: Magnitude::Low,
        estimated_improvement: "+30% content reach",
        action_items: [
            "Identify top 5 performing posts",
            "Design infographics",
            "Create short video summaries",
        ],
    },
    RecommendationSeed {
        id: "auto_1",
        category: RecommendationCategory::Automation,
        title: "Set Up Engagement Alerts",
        description: "Get notified when engagement drops below threshold",
        priority: Priority::High,
        impact: Magnitude::Medium,
        effort: Magnitude::Low,
        estimated_improvement: "Faster response time",
        action_items: [
            "Define engagement thresholds",
            "Set up automated alerts",
            "Create response playbook",
        ],
    },
];

fn recommendation_catalog() -> Vec<Recommendation> {
    RECOMMENDATIONS.iter().map(Recommendation::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::FixedClock;
    use rstest::rstest;

    fn service() -> InsightsService {
        InsightsService::new(
            Arc::new(FixedClock::on_date(2024, 6, 10).unwrap()),
            RandomSource::seeded(11),
        )
    }

    #[test]
    fn insights_carry_clock_timestamp() {
        let svc = service();
        let insights = svc.insights();
        assert_eq!(insights.len(), 4);
        assert!(insights.iter().all(|i| i.timestamp == svc.clock.now()));
        assert_eq!(insights[0].kind, InsightType::Opportunity);
        assert_eq!(insights[1].title, "SEO Ranking Decline Detected");
    }

    #[rstest]
    #[case(None, 7)]
    #[case(Some("all"), 7)]
    #[case(Some("ALL"), 7)]
    #[case(Some("seo"), 2)]
    #[case(Some("social"), 2)]
    #[case(Some("content"), 2)]
    #[case(Some("automation"), 1)]
    #[case(Some("email"), 0)]
    fn recommendations_filter_by_category(#[case] raw: Option<&str>, #[case] expected: usize) {
        let recs = service().recommendations(CategoryFilter::parse(raw));
        assert_eq!(recs.len(), expected);
    }

    #[test]
    fn recommendation_ids_keep_catalog_order() {
        let ids: Vec<String> = service()
            .recommendations(CategoryFilter::All)
            .into_iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(
            ids,
            ["seo_1", "seo_2", "social_1", "social_2", "content_1", "content_2", "auto_1"]
        );
    }

    #[test]
    fn recommendation_json_hides_category() {
        let recs = service().recommendations(CategoryFilter::parse(Some("automation")));
        let value = serde_json::to_value(&recs[0]).unwrap();
        assert!(value.get("category").is_none());
        assert_eq!(value["impact"], "Medium");
        assert_eq!(value["priority"], "high");
    }

    #[test]
    fn sentiment_score_in_range() {
        let svc = service();
        for text in ["great launch", "", "meh"] {
            let sentiment = svc.sentiment(text);
            assert!((0.5..=1.0).contains(&sentiment.score));
            assert_eq!(sentiment.keywords, SENTIMENT_KEYWORDS);
        }
    }
}
