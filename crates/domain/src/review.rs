//! Review — a customer's rating of a provider.

use serde::{Deserialize, Serialize};

use crate::error::ValidationErrors;
use crate::kind::EntityKind;
use crate::record::Record;
use crate::validation::{Fields, Payload};

/// A rating left for a provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    /// Provider id as a string. Opaque; never resolved against stored providers.
    pub provider_id: String,
    /// Whole stars, `1..=5`.
    pub rating: i64,
    pub comment: Option<String>,
    pub customer_name: Option<String>,
}

impl Record for Review {
    const KIND: EntityKind = EntityKind::Review;

    fn from_payload(payload: &Payload) -> Result<Self, ValidationErrors> {
        let mut fields = Fields::new(payload);
        let provider_id = fields.required_text("provider_id");
        let rating = fields.required_integer_in("rating", 1, 5);
        let comment = fields.optional_text("comment");
        let customer_name = fields.optional_text("customer_name");

        fields.finish(|| {
            Some(Self {
                provider_id: provider_id?,
                rating: rating?,
                comment,
                customer_name,
            })
        })
    }
}
