//! Editable forms backed by a validation schema

use thiserror::Error;

use super::engine::validate_form;
use super::errors::ValidationErrors;
use super::rule::ValidationSchema;
use super::value::{parse_number, FormRecord};

/// Why a form could not be turned into a record
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SubmitError {
    #[error("form has invalid fields: {0}")]
    Invalid(ValidationErrors),

    #[error("field '{field}' is not a number: '{value}'")]
    InvalidNumber { field: &'static str, value: String },

    #[error("field '{field}' is not a date: '{value}'")]
    InvalidDate { field: &'static str, value: String },

    #[error("field '{field}' has unknown option '{value}'")]
    UnknownOption { field: &'static str, value: String },
}

/// Form state holding raw input strings, validated against a static schema.
///
/// `submit` is the only way to get the typed record out, and only when the
/// schema reports no errors.
pub trait FormModel: Clone + Default {
    type Output;

    fn schema() -> &'static ValidationSchema;

    /// Every editable field, in display order
    fn field_names() -> &'static [&'static str];

    /// Raw input of `field`; empty for unknown fields
    fn field(&self, field: &str) -> String;

    /// Store raw input. Unknown fields are ignored.
    fn set_field(&mut self, field: &str, value: String);

    /// Build the typed record. Only called once validation has passed.
    fn build(&self) -> Result<Self::Output, SubmitError>;

    fn to_record(&self) -> FormRecord {
        Self::field_names()
            .iter()
            .map(|name| (*name, self.field(name)))
            .collect()
    }

    fn validate(&self) -> ValidationErrors {
        validate_form(&self.to_record(), Self::schema())
    }

    fn submit(&self) -> Result<Self::Output, SubmitError> {
        let errors = self.validate();
        if !errors.is_empty() {
            return Err(SubmitError::Invalid(errors));
        }
        self.build()
    }
}

pub(crate) fn parse_amount(field: &'static str, raw: &str) -> Result<f64, SubmitError> {
    parse_number(raw)
        .filter(|n| n.is_finite())
        .ok_or_else(|| SubmitError::InvalidNumber {
            field,
            value: raw.to_string(),
        })
}
