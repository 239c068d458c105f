use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::Payload;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum RuleStatus {
    Active,
}

/// Named automation rule pairing a condition with an action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Trigger {
    pub id: u32,
    pub name: String,
    pub status: RuleStatus,
    pub condition: String,
    pub action: String,
    pub last_triggered: String,
}

impl Payload for Vec<Trigger> {
    const KEY: &'static str = "triggers";
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AutomationLog {
    pub timestamp: String,
    pub action: String,
    pub status: String,
    pub details: String,
}

impl Payload for Vec<AutomationLog> {
    const KEY: &'static str = "logs";
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ActionResult {
    pub action: String,
    pub status: String,
    pub details: String,
    pub execution_time: DateTime<Utc>,
}

impl Payload for ActionResult {
    const KEY: &'static str = "result";
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Workflow {
    #[schema(example = 4821)]
    pub id: u32,
    pub name: String,
    pub trigger: Option<String>,
    #[schema(value_type = Vec<Object>)]
    pub actions: Vec<serde_json::Value>,
    pub status: RuleStatus,
    pub created_at: DateTime<Utc>,
}

impl Payload for Workflow {
    const KEY: &'static str = "workflow";
}
