//! Create and list handlers shared by every record collection.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use garden_app::ports::DocumentStore;
use garden_domain::document::{Document, Filter};
use garden_domain::id::RecordId;
use garden_domain::kind::EntityKind;
use garden_domain::validation::Payload;

use crate::error::ApiError;
use crate::state::AppState;

/// Body returned after a successful create.
#[derive(Serialize)]
pub struct Created {
    pub id: String,
}

/// Possible responses from a create endpoint.
pub enum CreateResponse {
    /// 201 Created with the generated id.
    Created(Json<Created>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// Possible responses from a list endpoint.
pub enum ListResponse {
    /// 200 OK with a JSON array of records, each carrying its `id`.
    Ok(Json<Vec<Document>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Validate and store the request body as a record of `kind`.
pub(crate) async fn create<S>(
    state: &AppState<S>,
    kind: EntityKind,
    body: Result<Json<Payload>, JsonRejection>,
) -> Result<CreateResponse, ApiError>
where
    S: DocumentStore + Send + Sync + 'static,
{
    let Json(payload) = body?;
    let id: RecordId = state.record_service.create(kind, &payload).await?;
    Ok(CreateResponse::Created(Json(Created { id: id.to_string() })))
}

/// List records of `kind`, filtered when a filter is given.
pub(crate) async fn list<S>(
    state: &AppState<S>,
    kind: EntityKind,
    filter: Option<Filter>,
) -> Result<ListResponse, ApiError>
where
    S: DocumentStore + Send + Sync + 'static,
{
    let documents = state.record_service.list(kind, filter.as_ref()).await?;
    Ok(ListResponse::Ok(Json(documents)))
}
