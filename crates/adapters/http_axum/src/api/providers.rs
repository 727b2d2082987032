//! JSON REST handlers for providers.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;

use garden_app::ports::DocumentStore;
use garden_domain::kind::EntityKind;
use garden_domain::validation::Payload;

use super::records::{self, CreateResponse, ListResponse};
use crate::error::ApiError;
use crate::state::AppState;

/// `GET /providers`
pub async fn list<S>(State(state): State<AppState<S>>) -> Result<ListResponse, ApiError>
where
    S: DocumentStore + Send + Sync + 'static,
{
    records::list(&state, EntityKind::Provider, None).await
}

/// `POST /providers`
pub async fn create<S>(
    State(state): State<AppState<S>>,
    body: Result<Json<Payload>, JsonRejection>,
) -> Result<CreateResponse, ApiError>
where
    S: DocumentStore + Send + Sync + 'static,
{
    records::create(&state, EntityKind::Provider, body).await
}
