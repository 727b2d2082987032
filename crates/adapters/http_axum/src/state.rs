//! Shared application state for axum handlers.

use std::sync::Arc;

use garden_app::ports::DocumentStore;
use garden_app::services::diagnostics_service::DiagnosticsService;
use garden_app::services::record_service::RecordService;

/// Application state shared across all axum handlers.
///
/// Generic over the document store to avoid dynamic dispatch.
/// `Clone` is implemented manually so the store itself does not need to be
/// `Clone` — only the `Arc` wrappers are cloned.
pub struct AppState<S> {
    /// Record create/list service.
    pub record_service: Arc<RecordService<S>>,
    /// Connectivity report service.
    pub diagnostics_service: Arc<DiagnosticsService<S>>,
}

impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            record_service: Arc::clone(&self.record_service),
            diagnostics_service: Arc::clone(&self.diagnostics_service),
        }
    }
}

impl<S> AppState<S>
where
    S: DocumentStore + Send + Sync + 'static,
{
    /// Create a new application state from service instances.
    pub fn new(
        record_service: RecordService<S>,
        diagnostics_service: DiagnosticsService<S>,
    ) -> Self {
        Self {
            record_service: Arc::new(record_service),
            diagnostics_service: Arc::new(diagnostics_service),
        }
    }
}
