pub mod ai;
pub mod analytics;
pub mod automation;
pub mod common;
pub mod health;
pub mod integrations;

use axum::http::Uri;

use crate::errors::ServiceError;

// Re-export AppState so handler modules can import it as crate::handlers::AppState
pub use crate::AppState;

/// Fallback for unknown routes
pub async fn not_found(uri: Uri) -> ServiceError {
    tracing::debug!(path = %uri.path(), "no route matched");
    ServiceError::NotFound("Endpoint not found".to_string())
}
