//! JSON REST handlers for service requests.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Query, State};
use serde::Deserialize;

use garden_app::ports::DocumentStore;
use garden_domain::document::Filter;
use garden_domain::kind::EntityKind;
use garden_domain::validation::Payload;

use super::records::{self, CreateResponse, ListResponse};
use crate::error::ApiError;
use crate::state::AppState;

/// Query parameters for the list endpoint.
#[derive(Deserialize)]
pub struct ListQuery {
    /// Keep only requests with exactly this status. Empty means no filter.
    pub status: Option<String>,
}

/// `GET /requests?status=...`
pub async fn list<S>(
    State(state): State<AppState<S>>,
    Query(query): Query<ListQuery>,
) -> Result<ListResponse, ApiError>
where
    S: DocumentStore + Send + Sync + 'static,
{
    let filter = Filter::from_query("status", query.status);
    records::list(&state, EntityKind::ServiceRequest, filter).await
}

/// `POST /requests`
pub async fn create<S>(
    State(state): State<AppState<S>>,
    body: Result<Json<Payload>, JsonRejection>,
) -> Result<CreateResponse, ApiError>
where
    S: DocumentStore + Send + Sync + 'static,
{
    records::create(&state, EntityKind::ServiceRequest, body).await
}
