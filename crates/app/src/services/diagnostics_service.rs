//! Diagnostics service — human-readable connectivity report.

use serde::Serialize;

use crate::ports::DocumentStore;

/// Maximum number of collection names included in a report.
pub const MAX_REPORTED_COLLECTIONS: usize = 10;

/// Which of the two storage configuration values were provided at startup.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConfigPresence {
    pub database_url: bool,
    pub database_name: bool,
}

/// Status report. Values are display strings, not machine-readable states.
#[derive(Debug, Clone, Serialize)]
pub struct StatusReport {
    pub backend: String,
    pub database: String,
    pub database_url: String,
    pub database_name: String,
    pub connection_status: String,
    pub collections: Vec<String>,
}

/// Builds [`StatusReport`]s for a store.
pub struct DiagnosticsService<S> {
    store: S,
    presence: ConfigPresence,
}

impl<S: DocumentStore> DiagnosticsService<S> {
    /// Create a new service reporting on `store`.
    pub fn new(store: S, presence: ConfigPresence) -> Self {
        Self { store, presence }
    }

    /// Probe the store and describe what was found.
    ///
    /// Never fails: storage errors end up in the `database` field.
    pub async fn report(&self) -> StatusReport {
        let mut report = StatusReport {
            backend: "✅ Running".to_owned(),
            database: "❌ Not Available".to_owned(),
            database_url: set_or_not(self.presence.database_url),
            database_name: set_or_not(self.presence.database_name),
            connection_status: "Not Connected".to_owned(),
            collections: Vec::new(),
        };

        if !self.store.is_initialized() {
            report.database = "⚠️  Available but not initialized".to_owned();
            return report;
        }

        report.connection_status = "Connected".to_owned();
        match self.store.collection_names().await {
            Ok(mut names) => {
                names.truncate(MAX_REPORTED_COLLECTIONS);
                report.collections = names;
                report.database = "✅ Connected & Working".to_owned();
            }
            Err(err) => {
                tracing::warn!(error = %err, "collection listing failed");
                report.database = format!("⚠️  Connected but Error: {}", err.diagnostic());
            }
        }
        report
    }
}

fn set_or_not(present: bool) -> String {
    if present { "✅ Set" } else { "❌ Not Set" }.to_owned()
}
