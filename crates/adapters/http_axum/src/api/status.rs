//! Liveness and diagnostics handlers.

use axum::Json;
use axum::extract::State;
use serde::Serialize;

use garden_app::ports::DocumentStore;
use garden_app::services::diagnostics_service::StatusReport;

use crate::state::AppState;

/// Body of the liveness endpoint.
#[derive(Serialize)]
pub struct Message {
    pub message: &'static str,
}

/// `GET /`
pub async fn root() -> Json<Message> {
    Json(Message {
        message: "Garden Services API running",
    })
}

/// `GET /test`
pub async fn report<S>(State(state): State<AppState<S>>) -> Json<StatusReport>
where
    S: DocumentStore + Send + Sync + 'static,
{
    Json(state.diagnostics_service.report().await)
}
