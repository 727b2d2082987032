//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into [`GardenError`]
//! via `From`, so the application services expose a single error type.

use std::error::Error as StdError;
use std::fmt;

use serde::Serialize;

/// Maximum length of an error diagnostic surfaced to API clients.
pub const DIAGNOSTIC_MAX_CHARS: usize = 80;

/// Top-level error for every application use-case.
#[derive(Debug, thiserror::Error)]
pub enum GardenError {
    /// The payload did not satisfy the record schema.
    #[error("validation failed")]
    Validation(#[from] ValidationErrors),

    /// No store was initialised at startup.
    #[error("storage is not initialized")]
    Unavailable,

    /// The store could not complete the operation.
    #[error("storage error")]
    Storage(#[source] Box<dyn StdError + Send + Sync>),
}

impl GardenError {
    /// Short, client-safe description of the failure.
    ///
    /// The message walks the error source chain and is cut to
    /// [`DIAGNOSTIC_MAX_CHARS`] characters.
    #[must_use]
    pub fn diagnostic(&self) -> String {
        diagnostic(self)
    }
}

/// Join an error and its sources with `": "`, truncated to
/// [`DIAGNOSTIC_MAX_CHARS`] characters.
#[must_use]
pub fn diagnostic(err: &(dyn StdError + 'static)) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(inner) = source {
        message.push_str(": ");
        message.push_str(&inner.to_string());
        source = inner.source();
    }
    truncate(&message, DIAGNOSTIC_MAX_CHARS)
}

/// Cut `text` to at most `max` characters, respecting char boundaries.
#[must_use]
pub fn truncate(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}

/// The constraint a field failed to satisfy.
#[derive(Debug, Clone, PartialEq)]
pub enum Constraint {
    /// Required field absent or `null`.
    Missing,
    /// Expected a JSON string.
    Text,
    /// Expected a JSON number.
    Number,
    /// Expected a whole number.
    Integer,
    /// Expected `true` or `false`.
    Boolean,
    /// Expected a `YYYY-MM-DD` calendar date.
    Date,
    /// Expected an array of strings.
    TextList,
    /// Not a syntactically valid email address.
    Email,
    /// Numeric value outside an inclusive range.
    Range { min: f64, max: f64 },
    /// Numeric value below an inclusive minimum.
    Minimum { min: f64 },
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing => f.write_str("field required"),
            Self::Text => f.write_str("must be a string"),
            Self::Number => f.write_str("must be a number"),
            Self::Integer => f.write_str("must be an integer"),
            Self::Boolean => f.write_str("must be a boolean"),
            Self::Date => f.write_str("must be a date formatted as YYYY-MM-DD"),
            Self::TextList => f.write_str("must be a list of strings"),
            Self::Email => f.write_str("must be a valid email address"),
            Self::Range { min, max } => write!(f, "must be between {min} and {max}"),
            Self::Minimum { min } => write!(f, "must be greater than or equal to {min}"),
        }
    }
}

/// One field that violated one constraint.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldError {
    pub field: String,
    pub constraint: Constraint,
}

impl FieldError {
    #[must_use]
    pub fn new(field: impl Into<String>, constraint: Constraint) -> Self {
        Self {
            field: field.into(),
            constraint,
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.constraint)
    }
}

impl Serialize for FieldError {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("FieldError", 2)?;
        state.serialize_field("field", &self.field)?;
        state.serialize_field("message", &self.constraint.to_string())?;
        state.end()
    }
}

/// Every field-level failure found while validating one payload.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("invalid fields: {}", join(.0))]
pub struct ValidationErrors(pub Vec<FieldError>);

impl ValidationErrors {
    #[must_use]
    pub fn fields(&self) -> &[FieldError] {
        &self.0
    }

    /// Whether `field` failed with `constraint`.
    #[must_use]
    pub fn contains(&self, field: &str, constraint: &Constraint) -> bool {
        self.0
            .iter()
            .any(|err| err.field == field && &err.constraint == constraint)
    }
}

fn join(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Raised when parsing an entity kind name that is not one of the four kinds.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown entity kind: {0}")]
pub struct UnknownKindError(pub String);
