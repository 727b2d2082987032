//! Service request — a customer asking for a service at an address.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::ValidationErrors;
use crate::kind::EntityKind;
use crate::record::Record;
use crate::validation::{Fields, Payload};

/// Status given to requests created without one.
pub const DEFAULT_STATUS: &str = "pending";

/// Statuses the API documents. Other values are stored as given.
pub const KNOWN_STATUSES: [&str; 4] = ["pending", "confirmed", "completed", "cancelled"];

/// A customer request for a service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceRequest {
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: Option<String>,
    pub address: String,
    /// Title of the requested service. Not checked against stored services.
    pub service_title: String,
    pub preferred_date: Option<NaiveDate>,
    pub notes: Option<String>,
    pub status: String,
}

impl ServiceRequest {
    /// Whether `status` is one of [`KNOWN_STATUSES`].
    #[must_use]
    pub fn has_known_status(&self) -> bool {
        KNOWN_STATUSES.contains(&self.status.as_str())
    }
}

impl Record for ServiceRequest {
    const KIND: EntityKind = EntityKind::ServiceRequest;

    fn from_payload(payload: &Payload) -> Result<Self, ValidationErrors> {
        let mut fields = Fields::new(payload);
        let customer_name = fields.required_text("customer_name");
        let customer_email = fields.required_email("customer_email");
        let customer_phone = fields.optional_text("customer_phone");
        let address = fields.required_text("address");
        let service_title = fields.required_text("service_title");
        let preferred_date = fields.optional_date("preferred_date");
        let notes = fields.optional_text("notes");
        let status = fields.text_or("status", DEFAULT_STATUS);

        fields.finish(|| {
            Some(Self {
                customer_name: customer_name?,
                customer_email: customer_email?,
                customer_phone,
                address: address?,
                service_title: service_title?,
                preferred_date,
                notes,
                status,
            })
        })
    }
}
