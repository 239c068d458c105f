use std::sync::Arc;

use rand::Rng;
use serde_json::Value;
use tracing::info;

use crate::{
    common::{Clock, RandomSource},
    models::automation::{ActionResult, AutomationLog, RuleStatus, Trigger, Workflow},
    AppState,
};

pub const WORKFLOW_ID_RANGE: std::ops::RangeInclusive<u32> = 1_000..=9_999;

/// Input for a new workflow.
#[derive(Debug, Clone, Default)]
pub struct NewWorkflow {
    pub name: String,
    pub trigger: Option<String>,
    pub actions: Vec<Value>,
}

#[derive(Clone)]
pub struct AutomationService {
    clock: Arc<dyn Clock>,
    rng: RandomSource,
}

impl AutomationService {
    pub fn new(clock: Arc<dyn Clock>, rng: RandomSource) -> Self {
        Self { clock, rng }
    }

    pub fn from_state(state: &AppState) -> Self {
        Self::new(state.clock.clone(), state.rng.clone())
    }

    pub fn triggers(&self) -> Vec<Trigger> {
        [
            (1, "Low Engagement Alert", "engagement_rate < 3%", "Send notification", "2 hours ago"),
            (2, "Auto-Post Scheduler", "Best time reached", "Post to social media", "5 hours ago"),
            (3, "SEO Rank Drop Alert", "rank_drop > 5 positions", "Notify team + suggest fixes", "Never"),
        ]
        .into_iter()
        .map(|(id, name, condition, action, last_triggered)| Trigger {
            id,
            name: name.to_string(),
            status: RuleStatus::Active,
            condition: condition.to_string(),
            action: action.to_string(),
            last_triggered: last_triggered.to_string(),
        })
        .collect()
    }

    /// Most recent first.
    pub fn logs(&self) -> Vec<AutomationLog> {
        [
            ("2025-10-12T08:30:00Z", "Auto-post to Twitter", "Posted trending content"),
            ("2025-10-12T06:15:00Z", "Engagement alert", "Notified team about low engagement"),
            ("2025-10-11T19:45:00Z", "SEO optimization", "Updated meta descriptions"),
        ]
        .into_iter()
        .map(|(timestamp, action, details)| AutomationLog {
            timestamp: timestamp.to_string(),
            action: action.to_string(),
            status: "success".to_string(),
            details: details.to_string(),
        })
        .collect()
    }

    /// Simulated execution; nothing is dispatched.
    pub fn execute(&self, action_type: &str, params: &Value) -> ActionResult {
        info!(action = action_type, params = %params, "executing automation action");
        ActionResult {
            action: action_type.to_string(),
            status: "completed".to_string(),
            details: format!("Successfully executed {action_type}"),
            execution_time: self.clock.now(),
        }
    }

    pub fn create_workflow(&self, request: NewWorkflow) -> Workflow {
        let id = self.rng.with(|rng| rng.gen_range(WORKFLOW_ID_RANGE));
        info!(workflow_id = id, name = %request.name, "workflow created");
        Workflow {
            id,
            name: request.name,
            trigger: request.trigger,
            actions: request.actions,
            status: RuleStatus::Active,
            created_at: self.clock.now(),
        }
    }
}
