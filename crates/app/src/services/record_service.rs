//! Record service — validate-then-persist and filtered listing for every kind.

use garden_domain::document::{Document, Filter};
use garden_domain::error::GardenError;
use garden_domain::id::RecordId;
use garden_domain::kind::EntityKind;
use garden_domain::record;
use garden_domain::validation::Payload;

use crate::ports::DocumentStore;

/// Application service translating record use-cases into store calls.
///
/// No kind-specific logic lives here: the kind selects the schema and the
/// collection, nothing else.
pub struct RecordService<S> {
    store: S,
}

impl<S: DocumentStore> RecordService<S> {
    /// Create a new service backed by the given store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Validate `payload` as a record of `kind` and insert it.
    ///
    /// Nothing is written when validation fails.
    ///
    /// # Errors
    ///
    /// Returns [`GardenError::Validation`] if the payload violates the schema,
    /// or a storage error propagated from the store.
    pub async fn create(
        &self,
        kind: EntityKind,
        payload: &Payload,
    ) -> Result<RecordId, GardenError> {
        let fields = record::validate(kind, payload).inspect_err(|err| {
            tracing::debug!(%kind, error = %err, "rejected invalid payload");
        })?;
        let id = self.store.insert(kind, fields).await?;
        tracing::info!(%kind, %id, "record created");
        Ok(id)
    }

    /// List records of `kind`, optionally keeping only those matching `filter`.
    ///
    /// An empty result is not an error.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the store.
    pub async fn list(
        &self,
        kind: EntityKind,
        filter: Option<&Filter>,
    ) -> Result<Vec<Document>, GardenError> {
        let documents = self.store.find(kind, filter).await?;
        tracing::debug!(
            %kind,
            count = documents.len(),
            filtered = filter.is_some(),
            "records listed"
        );
        Ok(documents)
    }
}
