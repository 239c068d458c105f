use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::{common::scope_request_clock, AppState};

/// Expose the state's clock to code that runs without access to the state,
/// so error bodies carry the same instant source as envelopes.
pub async fn request_clock_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    scope_request_clock(state.clock.clone(), next.run(request)).await
}
