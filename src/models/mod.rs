//! Response records. Every record is built per request and dropped after
//! serialization.
pub mod analytics;
pub mod automation;
pub mod forecast;
pub mod insights;
pub mod integrations;

pub use analytics::{MetricPoint, OverviewMetrics, SeoHealth, SocialMetrics};
pub use automation::{ActionResult, AutomationLog, Trigger, Workflow};
pub use forecast::{PlatformBestTimes, Prediction, PredictionPoint, TrendAnalysis};
pub use insights::{Insight, Recommendation, Sentiment};
pub use integrations::{ConnectResult, Integrations, SyncResult, YoutubeStats};
