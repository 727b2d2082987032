//! In-memory [`DocumentStore`] used by the service tests.

use std::collections::BTreeSet;
use std::sync::{Arc, Mutex};

use serde_json::{Map, Value};

use garden_domain::document::{Document, Filter};
use garden_domain::error::GardenError;
use garden_domain::id::RecordId;
use garden_domain::kind::EntityKind;

use crate::ports::DocumentStore;

#[derive(Clone, Default)]
pub(crate) struct InMemoryStore {
    documents: Arc<Mutex<Vec<(EntityKind, Document)>>>,
    pub(crate) failing: bool,
}

impl InMemoryStore {
    pub(crate) fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.documents.lock().unwrap().len()
    }

    fn check(&self) -> Result<(), GardenError> {
        if self.failing {
            return Err(GardenError::Storage("connection refused".into()));
        }
        Ok(())
    }
}

impl DocumentStore for InMemoryStore {
    async fn insert(
        &self,
        kind: EntityKind,
        fields: Map<String, Value>,
    ) -> Result<RecordId, GardenError> {
        self.check()?;
        let id = RecordId::new();
        self.documents
            .lock()
            .unwrap()
            .push((kind, Document::new(id, fields)));
        Ok(id)
    }

    async fn find(
        &self,
        kind: EntityKind,
        filter: Option<&Filter>,
    ) -> Result<Vec<Document>, GardenError> {
        self.check()?;
        let documents = self.documents.lock().unwrap();
        Ok(documents
            .iter()
            .filter(|(stored, doc)| *stored == kind && filter.is_none_or(|f| f.matches(doc)))
            .map(|(_, doc)| doc.clone())
            .collect())
    }

    async fn collection_names(&self) -> Result<Vec<String>, GardenError> {
        self.check()?;
        let documents = self.documents.lock().unwrap();
        let names: BTreeSet<&str> = documents
            .iter()
            .map(|(kind, _)| kind.collection())
            .collect();
        Ok(names.into_iter().map(str::to_owned).collect())
    }
}
