//! HTTP error response mapping.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use garden_domain::error::{FieldError, GardenError};

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    fields: Vec<FieldError>,
}

impl ErrorBody {
    fn message(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            fields: Vec::new(),
        }
    }
}

/// Maps application failures to an HTTP response with appropriate status code.
pub enum ApiError {
    /// A use-case failed.
    Domain(GardenError),
    /// The request body was not a JSON object.
    Malformed(JsonRejection),
}

impl From<GardenError> for ApiError {
    fn from(err: GardenError) -> Self {
        Self::Domain(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Malformed(rejection)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            Self::Malformed(rejection) => (
                StatusCode::BAD_REQUEST,
                ErrorBody::message(rejection.body_text()),
            ),
            Self::Domain(GardenError::Validation(errors)) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                ErrorBody {
                    error: "validation failed".to_owned(),
                    fields: errors.0,
                },
            ),
            Self::Domain(err @ GardenError::Unavailable) => {
                tracing::warn!("request rejected: storage is not initialized");
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    ErrorBody::message(format!("storage unavailable: {}", err.diagnostic())),
                )
            }
            Self::Domain(err @ GardenError::Storage(_)) => {
                tracing::error!(error = ?err, "storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorBody::message(format!("storage unavailable: {}", err.diagnostic())),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}
