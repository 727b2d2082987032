//! Storage-specific error type wrapping sqlx errors.

use garden_domain::error::GardenError;

/// Errors originating from the `SQLite` storage layer.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// A query or connection failed.
    #[error("database error")]
    Database(#[from] sqlx::Error),

    /// A document body could not be encoded or decoded as JSON.
    #[error("JSON deserialization error")]
    Json(#[from] serde_json::Error),

    /// Failed to run migrations.
    #[error("migration error")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

impl From<StorageError> for GardenError {
    fn from(err: StorageError) -> Self {
        Self::Storage(Box::new(err))
    }
}
