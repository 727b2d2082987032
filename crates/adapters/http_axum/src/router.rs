//! Axum router assembly.

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use garden_app::ports::DocumentStore;

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Cross-origin requests are accepted from any origin, with any method and
/// header, credentials included. A [`TraceLayer`] logs each HTTP
/// request/response at the `DEBUG` level using the `tracing` ecosystem.
pub fn build<S>(state: AppState<S>) -> Router
where
    S: DocumentStore + Send + Sync + 'static,
{
    Router::new()
        .merge(crate::api::routes())
        .layer(CorsLayer::very_permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
