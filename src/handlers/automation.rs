use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use serde_json::Value;
use utoipa::ToSchema;
use validator::Validate;

use crate::{
    errors::{ErrorResponse, ServiceResult},
    handlers::common::ValidatedJson,
    models::{ActionResult, AutomationLog, Trigger, Workflow},
    services::{automation::NewWorkflow, AutomationService},
    ApiResult, AppState, Envelope,
};

/// Build the automation Router scoped under `/api/automation`.
pub fn automation_routes() -> Router<AppState> {
    Router::new()
        .route("/triggers", get(get_triggers))
        .route("/execute", post(execute_action))
        .route("/workflow/create", post(create_workflow))
        .route("/logs", get(get_logs))
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct ExecuteActionRequest {
    #[validate(length(min = 1, max = 128))]
    #[schema(example = "post_to_twitter")]
    pub action_type: String,
    #[serde(default)]
    #[schema(value_type = Object)]
    pub params: Value,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateWorkflowRequest {
    #[validate(length(min = 1, max = 200))]
    #[schema(example = "Weekly engagement digest")]
    pub name: String,
    pub trigger: Option<String>,
    #[serde(default)]
    #[schema(value_type = Vec<Object>)]
    pub actions: Vec<Value>,
}

#[utoipa::path(
    get,
    path = "/api/automation/triggers",
    responses(
        (status = 200, description = "Configured automation triggers", body = Vec<Trigger>)
    ),
    tag = "Automation"
)]
pub async fn get_triggers(State(state): State<AppState>) -> ApiResult<Vec<Trigger>> {
    let triggers = AutomationService::from_state(&state).triggers();
    Ok(Json(state.envelope(triggers)))
}

#[utoipa::path(
    post,
    path = "/api/automation/execute",
    request_body = ExecuteActionRequest,
    responses(
        (status = 200, description = "Action executed", body = ActionResult),
        (status = 400, description = "Missing or empty action_type", body = ErrorResponse)
    ),
    tag = "Automation"
)]
pub async fn execute_action(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<ExecuteActionRequest>,
) -> ApiResult<ActionResult> {
    let result =
        AutomationService::from_state(&state).execute(&request.action_type, &request.params);
    Ok(Json(state.envelope(result)))
}

#[utoipa::path(
    post,
    path = "/api/automation/workflow/create",
    request_body = CreateWorkflowRequest,
    responses(
        (status = 201, description = "Workflow created", body = Workflow),
        (status = 400, description = "Missing or empty name", body = ErrorResponse)
    ),
    tag = "Automation"
)]
pub async fn create_workflow(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateWorkflowRequest>,
) -> ServiceResult<(StatusCode, Json<Envelope<Workflow>>)> {
    let workflow = AutomationService::from_state(&state).create_workflow(NewWorkflow {
        name: request.name,
        trigger: request.trigger,
        actions: request.actions,
    });
    Ok((StatusCode::CREATED, Json(state.envelope(workflow))))
}

#[utoipa::path(
    get,
    path = "/api/automation/logs",
    responses(
        (status = 200, description = "Recent automation runs, newest first", body = Vec<AutomationLog>)
    ),
    tag = "Automation"
)]
pub async fn get_logs(State(state): State<AppState>) -> ApiResult<Vec<AutomationLog>> {
    let logs = AutomationService::from_state(&state).logs();
    Ok(Json(state.envelope(logs)))
}
