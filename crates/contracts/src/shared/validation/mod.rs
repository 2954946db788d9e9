//! Declarative form validation
//!
//! A [`ValidationSchema`] maps field names to [`ValidationRule`]s.
//! [`validate_form`] applies a schema to a [`FormRecord`] and returns the
//! failing fields with one message each.
//!
//! ```rust,ignore
//! use contracts::shared::validation::{validate_form, FormRecord, EMPLOYEE_SCHEMA};
//!
//! let record = FormRecord::new().with("email", "not-an-email");
//! let errors = validate_form(&record, &EMPLOYEE_SCHEMA);
//! assert!(errors.contains("email"));
//! ```

mod catalog;
mod engine;
mod errors;
mod form_model;
pub mod patterns;
mod rule;
mod value;

pub use catalog::{due_date_on, COMPANY_SCHEMA, EMPLOYEE_SCHEMA, PROFILE_SCHEMA, PROJECT_SCHEMA};
pub use engine::{validate_field, validate_form, INVALID_FORMAT_MESSAGE, REQUIRED_MESSAGE};
pub use errors::ValidationErrors;
pub use form_model::{FormModel, SubmitError};
pub(crate) use form_model::parse_amount;
pub use rule::{CustomValidator, ValidationRule, ValidationSchema};
pub use value::{FieldValue, FormRecord};
pub(crate) use value::parse_date;
