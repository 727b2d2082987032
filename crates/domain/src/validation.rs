//! Field-level payload validation.
//!
//! A [`Fields`] reader walks a raw JSON object and pulls typed values out of
//! it, recording a [`FieldError`] for every violation instead of stopping at
//! the first one. Record constructors read every field, then call
//! [`Fields::finish`].

use chrono::NaiveDate;
use serde_json::{Map, Value};

use crate::error::{Constraint, FieldError, ValidationErrors};

/// Raw inbound document: field name to JSON value.
pub type Payload = Map<String, Value>;

/// Collects typed field values and validation failures from a [`Payload`].
pub struct Fields<'a> {
    payload: &'a Payload,
    errors: Vec<FieldError>,
}

impl<'a> Fields<'a> {
    #[must_use]
    pub fn new(payload: &'a Payload) -> Self {
        Self {
            payload,
            errors: Vec::new(),
        }
    }

    /// Present and non-null value for `field`.
    fn present(&self, field: &str) -> Option<&'a Value> {
        self.payload.get(field).filter(|value| !value.is_null())
    }

    fn fail(&mut self, field: &str, constraint: Constraint) {
        self.errors.push(FieldError::new(field, constraint));
    }

    fn required<T>(
        &mut self,
        field: &str,
        read: impl FnOnce(&mut Self, &Value) -> Option<T>,
    ) -> Option<T> {
        if let Some(value) = self.present(field) {
            read(self, value)
        } else {
            self.fail(field, Constraint::Missing);
            None
        }
    }

    fn optional<T>(
        &mut self,
        field: &str,
        read: impl FnOnce(&mut Self, &Value) -> Option<T>,
    ) -> Option<T> {
        let value = self.present(field)?;
        read(self, value)
    }

    fn text(&mut self, field: &str, value: &Value) -> Option<String> {
        if let Some(text) = value.as_str() {
            Some(text.to_owned())
        } else {
            self.fail(field, Constraint::Text);
            None
        }
    }

    fn email(&mut self, field: &str, value: &Value) -> Option<String> {
        let text = self.text(field, value)?;
        if is_valid_email(&text) {
            Some(text)
        } else {
            self.fail(field, Constraint::Email);
            None
        }
    }

    fn number(&mut self, field: &str, value: &Value) -> Option<f64> {
        if let Some(number) = value.as_f64() {
            Some(number)
        } else {
            self.fail(field, Constraint::Number);
            None
        }
    }

    fn integer(&mut self, field: &str, value: &Value) -> Option<i64> {
        if let Some(integer) = value.as_i64() {
            return Some(integer);
        }
        match value.as_f64() {
            #[allow(clippy::cast_possible_truncation)]
            Some(number) if number.fract() == 0.0 && number.abs() < 9.0e15 => Some(number as i64),
            _ => {
                self.fail(field, Constraint::Integer);
                None
            }
        }
    }

    fn date(&mut self, field: &str, value: &Value) -> Option<NaiveDate> {
        let parsed = value
            .as_str()
            .and_then(|text| NaiveDate::parse_from_str(text, "%Y-%m-%d").ok());
        if parsed.is_none() {
            self.fail(field, Constraint::Date);
        }
        parsed
    }

    fn text_list(&mut self, field: &str, value: &Value) -> Option<Vec<String>> {
        let Some(items) = value.as_array() else {
            self.fail(field, Constraint::TextList);
            return None;
        };
        let mut out = Vec::with_capacity(items.len());
        let mut valid = true;
        for (index, item) in items.iter().enumerate() {
            match item.as_str() {
                Some(text) => out.push(text.to_owned()),
                None => {
                    self.fail(&format!("{field}[{index}]"), Constraint::Text);
                    valid = false;
                }
            }
        }
        valid.then_some(out)
    }

    fn in_range(&mut self, field: &str, number: f64, min: f64, max: f64) -> Option<f64> {
        if (min..=max).contains(&number) {
            Some(number)
        } else {
            self.fail(field, Constraint::Range { min, max });
            None
        }
    }

    fn at_least(&mut self, field: &str, number: f64, min: f64) -> Option<f64> {
        if number >= min {
            Some(number)
        } else {
            self.fail(field, Constraint::Minimum { min });
            None
        }
    }

    /// Required text field.
    pub fn required_text(&mut self, field: &str) -> Option<String> {
        self.required(field, |this, value| this.text(field, value))
    }

    /// Required email field.
    pub fn required_email(&mut self, field: &str) -> Option<String> {
        self.required(field, |this, value| this.email(field, value))
    }

    /// Required integer within `[min, max]`.
    pub fn required_integer_in(&mut self, field: &str, min: i64, max: i64) -> Option<i64> {
        let integer = self.required(field, |this, value| this.integer(field, value))?;
        if (min..=max).contains(&integer) {
            Some(integer)
        } else {
            #[allow(clippy::cast_precision_loss)]
            self.fail(
                field,
                Constraint::Range {
                    min: min as f64,
                    max: max as f64,
                },
            );
            None
        }
    }

    pub fn optional_text(&mut self, field: &str) -> Option<String> {
        self.optional(field, |this, value| this.text(field, value))
    }

    pub fn optional_email(&mut self, field: &str) -> Option<String> {
        self.optional(field, |this, value| this.email(field, value))
    }

    pub fn optional_date(&mut self, field: &str) -> Option<NaiveDate> {
        self.optional(field, |this, value| this.date(field, value))
    }

    pub fn optional_text_list(&mut self, field: &str) -> Option<Vec<String>> {
        self.optional(field, |this, value| this.text_list(field, value))
    }

    /// Optional number within `[min, max]`.
    pub fn optional_number_in(&mut self, field: &str, min: f64, max: f64) -> Option<f64> {
        let number = self.optional(field, |this, value| this.number(field, value))?;
        self.in_range(field, number, min, max)
    }

    /// Optional number no lower than `min`.
    pub fn optional_number_at_least(&mut self, field: &str, min: f64) -> Option<f64> {
        let number = self.optional(field, |this, value| this.number(field, value))?;
        self.at_least(field, number, min)
    }

    /// Optional integer no lower than `min`.
    pub fn optional_integer_at_least(&mut self, field: &str, min: i64) -> Option<i64> {
        let integer = self.optional(field, |this, value| this.integer(field, value))?;
        if integer >= min {
            Some(integer)
        } else {
            #[allow(clippy::cast_precision_loss)]
            self.fail(field, Constraint::Minimum { min: min as f64 });
            None
        }
    }

    /// Boolean field that falls back to `default` when absent.
    ///
    /// An explicit `null` is a type error, not an absence.
    pub fn boolean_or(&mut self, field: &str, default: bool) -> bool {
        match self.payload.get(field) {
            None => default,
            Some(Value::Bool(flag)) => *flag,
            Some(_) => {
                self.fail(field, Constraint::Boolean);
                default
            }
        }
    }

    /// Text field that falls back to `default` when absent.
    ///
    /// An explicit `null` is a type error, not an absence.
    pub fn text_or(&mut self, field: &str, default: &str) -> String {
        let payload = self.payload;
        match payload.get(field) {
            None => default.to_owned(),
            Some(value) => self
                .text(field, value)
                .unwrap_or_else(|| default.to_owned()),
        }
    }

    /// Return `value` if no field failed, else every recorded failure.
    ///
    /// `build` only runs when validation succeeded, so it may unwrap the
    /// required fields it read.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationErrors`] listing every failed field.
    pub fn finish<T>(self, build: impl FnOnce() -> Option<T>) -> Result<T, ValidationErrors> {
        if !self.errors.is_empty() {
            return Err(ValidationErrors(self.errors));
        }
        build().ok_or_else(|| ValidationErrors(Vec::new()))
    }
}

/// Syntactic email check: `local@domain.tld`, no whitespace, one `@`.
#[must_use]
pub fn is_valid_email(text: &str) -> bool {
    if text.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = text.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') || !domain.contains('.') {
        return false;
    }
    domain.split('.').all(|label| !label.is_empty())
}
