//! Storage port — the document store every record goes through.

use std::future::Future;

use serde_json::{Map, Value};

use garden_domain::document::{Document, Filter};
use garden_domain::error::GardenError;
use garden_domain::id::RecordId;
use garden_domain::kind::EntityKind;

/// A store of JSON documents grouped into one collection per [`EntityKind`].
///
/// Implementations own concurrency control; callers share one handle across
/// all requests.
pub trait DocumentStore {
    /// Insert `fields` as a new document of `kind` and return its generated id.
    fn insert(
        &self,
        kind: EntityKind,
        fields: Map<String, Value>,
    ) -> impl Future<Output = Result<RecordId, GardenError>> + Send;

    /// Every document of `kind` satisfying `filter`, or all when `None`.
    fn find(
        &self,
        kind: EntityKind,
        filter: Option<&Filter>,
    ) -> impl Future<Output = Result<Vec<Document>, GardenError>> + Send;

    /// Names of the collections currently holding documents.
    fn collection_names(&self) -> impl Future<Output = Result<Vec<String>, GardenError>> + Send;

    /// Whether the store was set up. Defaults to `true`.
    fn is_initialized(&self) -> bool {
        true
    }
}

/// `None` is a store that failed to initialise: every operation reports
/// [`GardenError::Unavailable`].
impl<S: DocumentStore + Sync> DocumentStore for Option<S> {
    async fn insert(
        &self,
        kind: EntityKind,
        fields: Map<String, Value>,
    ) -> Result<RecordId, GardenError> {
        match self {
            Some(store) => store.insert(kind, fields).await,
            None => Err(GardenError::Unavailable),
        }
    }

    async fn find(
        &self,
        kind: EntityKind,
        filter: Option<&Filter>,
    ) -> Result<Vec<Document>, GardenError> {
        match self {
            Some(store) => store.find(kind, filter).await,
            None => Err(GardenError::Unavailable),
        }
    }

    async fn collection_names(&self) -> Result<Vec<String>, GardenError> {
        match self {
            Some(store) => store.collection_names().await,
            None => Err(GardenError::Unavailable),
        }
    }

    fn is_initialized(&self) -> bool {
        self.as_ref().is_some_and(|store| store.is_initialized())
    }
}
