//! Stored documents and list filters.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::id::RecordId;

/// A stored record as returned by list queries.
///
/// The identifier is exposed as a public `"id"` string next to the record
/// fields; no storage-internal identifier field is ever part of `fields`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: RecordId,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl Document {
    #[must_use]
    pub fn new(id: RecordId, mut fields: Map<String, Value>) -> Self {
        fields.remove("id");
        fields.remove("_id");
        Self { id, fields }
    }

    /// Value stored under `field`, if any.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }
}

/// Single field-equality predicate applied when listing records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filter {
    pub field: String,
    pub value: String,
}

impl Filter {
    /// Match documents whose `field` holds exactly the string `value`.
    #[must_use]
    pub fn eq(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Build a filter from an optional query value; empty means no filter.
    #[must_use]
    pub fn from_query(field: &str, value: Option<String>) -> Option<Self> {
        value
            .filter(|value| !value.is_empty())
            .map(|value| Self::eq(field, value))
    }

    /// Whether `document` satisfies the predicate.
    #[must_use]
    pub fn matches(&self, document: &Document) -> bool {
        document.get(&self.field).and_then(Value::as_str) == Some(self.value.as_str())
    }
}
