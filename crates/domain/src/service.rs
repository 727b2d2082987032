//! Service — a kind of garden work offered, e.g. lawn mowing.

use serde::{Deserialize, Serialize};

use crate::error::ValidationErrors;
use crate::kind::EntityKind;
use crate::record::Record;
use crate::validation::{Fields, Payload};

/// An offered service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub title: String,
    pub description: Option<String>,
    /// Starting price in dollars.
    pub base_price: Option<f64>,
    /// Free-form grouping such as maintenance, design or cleanup.
    pub category: Option<String>,
    /// Estimated duration in minutes.
    pub duration_estimate_min: Option<i64>,
    pub is_active: bool,
}

impl Record for Service {
    const KIND: EntityKind = EntityKind::Service;

    fn from_payload(payload: &Payload) -> Result<Self, ValidationErrors> {
        let mut fields = Fields::new(payload);
        let title = fields.required_text("title");
        let description = fields.optional_text("description");
        let base_price = fields.optional_number_at_least("base_price", 0.0);
        let category = fields.optional_text("category");
        let duration_estimate_min = fields.optional_integer_at_least("duration_estimate_min", 0);
        let is_active = fields.boolean_or("is_active", true);

        fields.finish(|| {
            Some(Self {
                title: title?,
                description,
                base_price,
                category,
                duration_estimate_min,
                is_active,
            })
        })
    }
}
