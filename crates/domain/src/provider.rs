//! Provider — a gardener or business offering services.

use serde::{Deserialize, Serialize};

use crate::error::ValidationErrors;
use crate::kind::EntityKind;
use crate::record::Record;
use crate::validation::{Fields, Payload};

/// Lowest accepted provider rating.
pub const MIN_RATING: f64 = 0.0;
/// Highest accepted provider rating.
pub const MAX_RATING: f64 = 5.0;

/// A service provider, full name or business name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Provider {
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    /// Cities or areas covered, in the order given.
    pub service_areas: Option<Vec<String>>,
    /// Average rating, `0..=5`.
    pub rating: Option<f64>,
    pub is_active: bool,
}

impl Record for Provider {
    const KIND: EntityKind = EntityKind::Provider;

    fn from_payload(payload: &Payload) -> Result<Self, ValidationErrors> {
        let mut fields = Fields::new(payload);
        let name = fields.required_text("name");
        let email = fields.optional_email("email");
        let phone = fields.optional_text("phone");
        let service_areas = fields.optional_text_list("service_areas");
        let rating = fields.optional_number_in("rating", MIN_RATING, MAX_RATING);
        let is_active = fields.boolean_or("is_active", true);

        fields.finish(|| {
            Some(Self {
                name: name?,
                email,
                phone,
                service_areas,
                rating,
                is_active,
            })
        })
    }
}
