use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::Payload;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ConnectionState {
    Connected,
    Syncing,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct IntegrationStatus {
    pub status: ConnectionState,
    #[schema(example = "10 minutes ago")]
    pub last_sync: String,
}

/// Platform name to connection status, in display order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Integrations(pub IndexMap<String, IntegrationStatus>);

impl Payload for Integrations {
    const KEY: &'static str = "integrations";
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TopVideo {
    pub title: String,
    pub views: u32,
    pub likes: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct YoutubeStats {
    pub subscribers: u32,
    pub total_views: u32,
    pub videos: u32,
    /// Seconds
    pub avg_view_duration: u32,
    pub engagement_rate: f64,
    pub top_videos: Vec<TopVideo>,
}

impl Payload for YoutubeStats {
    const KEY: &'static str = "data";
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SyncResult {
    pub platform: String,
    pub status: ConnectionState,
    pub started_at: DateTime<Utc>,
}

impl Payload for SyncResult {
    const KEY: &'static str = "result";
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ConnectResult {
    pub platform: String,
    pub status: ConnectionState,
    pub connected_at: DateTime<Utc>,
}

impl Payload for ConnectResult {
    const KEY: &'static str = "result";
}
