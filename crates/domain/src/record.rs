//! The contract shared by the four record schemas.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::ValidationErrors;
use crate::kind::EntityKind;
use crate::provider::Provider;
use crate::review::Review;
use crate::service::Service;
use crate::service_request::ServiceRequest;
use crate::validation::Payload;

/// A validated record of one [`EntityKind`].
pub trait Record: Serialize + Sized {
    /// Kind this schema validates.
    const KIND: EntityKind;

    /// Validate a raw payload and apply defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationErrors`] listing every field that violated a
    /// presence, type, format or range rule.
    fn from_payload(payload: &Payload) -> Result<Self, ValidationErrors>;

    /// Stored form of the record: every schema field, unset optionals as `null`.
    #[must_use]
    fn into_fields(self) -> Map<String, Value> {
        match serde_json::to_value(self) {
            Ok(Value::Object(fields)) => fields,
            _ => Map::new(),
        }
    }
}

/// Validate `payload` against the schema of `kind` and return its stored form.
///
/// # Errors
///
/// Returns [`ValidationErrors`] when the payload violates the schema.
pub fn validate(
    kind: EntityKind,
    payload: &Payload,
) -> Result<Map<String, Value>, ValidationErrors> {
    match kind {
        EntityKind::Provider => Provider::from_payload(payload).map(Record::into_fields),
        EntityKind::Service => Service::from_payload(payload).map(Record::into_fields),
        EntityKind::ServiceRequest => ServiceRequest::from_payload(payload).map(Record::into_fields),
        EntityKind::Review => Review::from_payload(payload).map(Record::into_fields),
    }
}
