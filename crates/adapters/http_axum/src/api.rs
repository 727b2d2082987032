//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod providers;
mod records;
#[allow(clippy::missing_errors_doc)]
pub mod requests;
#[allow(clippy::missing_errors_doc)]
pub mod reviews;
#[allow(clippy::missing_errors_doc)]
pub mod services;
pub mod status;

pub use records::{CreateResponse, Created, ListResponse};

use axum::Router;
use axum::routing::get;

use garden_app::ports::DocumentStore;

use crate::state::AppState;

/// Build the record collection routes.
pub fn routes<S>() -> Router<AppState<S>>
where
    S: DocumentStore + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(status::root))
        .route("/test", get(status::report::<S>))
        .route(
            "/providers",
            get(providers::list::<S>).post(providers::create::<S>),
        )
        .route(
            "/services",
            get(services::list::<S>).post(services::create::<S>),
        )
        .route(
            "/requests",
            get(requests::list::<S>).post(requests::create::<S>),
        )
        .route(
            "/reviews",
            get(reviews::list::<S>).post(reviews::create::<S>),
        )
}
