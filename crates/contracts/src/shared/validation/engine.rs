//! Field and form validation
//!
//! Both functions are pure: the same input always yields the same result.

use super::errors::ValidationErrors;
use super::rule::{ValidationRule, ValidationSchema};
use super::value::{FieldValue, FormRecord};

pub const REQUIRED_MESSAGE: &str = "This field is required";
pub const INVALID_FORMAT_MESSAGE: &str = "Invalid format";

/// Check one value against one rule set.
///
/// Order: required, empty short-circuit, min length, max length, pattern,
/// custom. Length and pattern checks apply to text only and the first of
/// them that fails is kept. When the rule has a `custom` check, its result
/// is final and replaces whatever the structural checks found.
pub fn validate_field(value: Option<&FieldValue>, rule: &ValidationRule) -> Option<String> {
    let blank = value.map_or(true, FieldValue::is_blank);
    if rule.required && blank {
        return Some(REQUIRED_MESSAGE.to_string());
    }

    let value = match value {
        Some(v) if !v.is_empty() => v,
        _ => return None,
    };

    match rule.custom {
        Some(check) => check(value),
        None => value.as_text().and_then(|text| structural_error(text, rule)),
    }
}

fn structural_error(text: &str, rule: &ValidationRule) -> Option<String> {
    let len = text.chars().count();

    if let Some(min) = rule.min_length {
        if len < min {
            return Some(format!("Must be at least {} characters", min));
        }
    }

    if let Some(max) = rule.max_length {
        if len > max {
            return Some(format!("Must be no more than {} characters", max));
        }
    }

    if let Some(pattern) = &rule.pattern {
        if !pattern.is_match(text) {
            return Some(INVALID_FORMAT_MESSAGE.to_string());
        }
    }

    None
}

/// Validate every field declared in `schema`.
///
/// Record fields without a rule are ignored; the result's keys are always a
/// subset of the schema's.
pub fn validate_form(record: &FormRecord, schema: &ValidationSchema) -> ValidationErrors {
    let mut errors = ValidationErrors::new();
    for (field, rule) in schema.iter() {
        if let Some(message) = validate_field(record.get(field), rule) {
            errors.insert(field, message);
        }
    }
    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use regex::Regex;

    fn text(s: &str) -> FieldValue {
        FieldValue::from(s)
    }

    fn no_digits(value: &FieldValue) -> Option<String> {
        match value.as_text() {
            Some(s) if s.chars().any(|c| c.is_ascii_digit()) => Some("No digits allowed".into()),
            _ => None,
        }
    }

    #[test]
    fn test_required_rejects_missing_and_blank() {
        let rule = ValidationRule::required().length(2, 5);
        for value in [None, Some(text("")), Some(text("   "))] {
            assert_eq!(
                validate_field(value.as_ref(), &rule).as_deref(),
                Some(REQUIRED_MESSAGE)
            );
        }
    }

    #[test]
    fn test_optional_missing_value_skips_all_checks() {
        let rule = ValidationRule::none()
            .length(3, 4)
            .pattern(&Regex::new(r"^\d+$").unwrap())
            .custom(|_| Some("always fails".into()));

        assert_eq!(validate_field(None, &rule), None);
        assert_eq!(validate_field(Some(&text("")), &rule), None);
    }

    #[test]
    fn test_optional_whitespace_is_still_checked() {
        let rule = ValidationRule::none().min_length(5);
        assert_eq!(
            validate_field(Some(&text("  ")), &rule).as_deref(),
            Some("Must be at least 5 characters")
        );
    }

    #[test]
    fn test_min_length_boundary() {
        let rule = ValidationRule::none().min_length(3);
        assert_eq!(
            validate_field(Some(&text("ab")), &rule).as_deref(),
            Some("Must be at least 3 characters")
        );
        assert_eq!(validate_field(Some(&text("abc")), &rule), None);
        assert_eq!(validate_field(Some(&text("abcd")), &rule), None);
    }

    #[test]
    fn test_max_length_boundary() {
        let rule = ValidationRule::none().max_length(3);
        assert_eq!(validate_field(Some(&text("abc")), &rule), None);
        assert_eq!(
            validate_field(Some(&text("abcd")), &rule).as_deref(),
            Some("Must be no more than 3 characters")
        );
    }

    #[test]
    fn test_length_counts_characters() {
        let rule = ValidationRule::none().max_length(4);
        assert_eq!(validate_field(Some(&text("Zoë!")), &rule), None);
    }

    #[test]
    fn test_pattern_mismatch() {
        let rule = ValidationRule::none().pattern(&Regex::new(r"^\d{5}$").unwrap());
        assert_eq!(validate_field(Some(&text("12345")), &rule), None);
        assert_eq!(
            validate_field(Some(&text("1234a")), &rule).as_deref(),
            Some(INVALID_FORMAT_MESSAGE)
        );
    }

    #[test]
    fn test_custom_result_replaces_structural_outcome() {
        let rule = ValidationRule::none().min_length(5).custom(no_digits);
        assert_eq!(
            validate_field(Some(&text("a1")), &rule).as_deref(),
            Some("No digits allowed")
        );
        // too short, but the custom check passes
        assert_eq!(validate_field(Some(&text("ab")), &rule), None);
        assert_eq!(validate_field(Some(&text("abcde")), &rule), None);
    }

    #[test]
    fn test_structural_checks_stop_at_first_failure() {
        let rule = ValidationRule::none()
            .min_length(5)
            .pattern(&Regex::new(r"^\d+$").unwrap());
        assert_eq!(
            validate_field(Some(&text("ab")), &rule).as_deref(),
            Some("Must be at least 5 characters")
        );
        assert_eq!(
            validate_field(Some(&text("abcdef")), &rule).as_deref(),
            Some(INVALID_FORMAT_MESSAGE)
        );
    }

    #[test]
    fn test_length_and_pattern_ignore_non_text() {
        let rule = ValidationRule::required()
            .min_length(10)
            .pattern(&Regex::new(r"^x$").unwrap());
        assert_eq!(validate_field(Some(&FieldValue::Number(3.0)), &rule), None);
    }

    #[test]
    fn test_custom_sees_numbers() {
        let rule = ValidationRule::required().custom(|v| match v.as_number() {
            Some(n) if n > 10.0 => Some("too big".into()),
            _ => None,
        });
        assert_eq!(
            validate_field(Some(&FieldValue::Number(11.0)), &rule).as_deref(),
            Some("too big")
        );
        assert_eq!(validate_field(Some(&FieldValue::Number(0.0)), &rule), None);
    }

    #[test]
    fn test_form_only_validates_schema_fields() {
        let schema = ValidationSchema::new()
            .field("name", ValidationRule::required())
            .field("code", ValidationRule::none().max_length(2));
        let record = FormRecord::new()
            .with("code", "ABC")
            .with("unknown", "")
            .with("notes", "x".repeat(10_000));

        let errors = validate_form(&record, &schema);

        assert_eq!(errors.len(), 2);
        assert_eq!(errors.get("name"), Some(REQUIRED_MESSAGE));
        assert_eq!(errors.get("code"), Some("Must be no more than 2 characters"));
        assert!(errors.fields().all(|f| schema.contains(f)));
    }

    #[test]
    fn test_valid_record_has_no_errors() {
        let schema = ValidationSchema::new().field("name", ValidationRule::required());
        let errors = validate_form(&FormRecord::new().with("name", "Ada"), &schema);
        assert!(errors.is_empty());
        assert!(!errors.contains("name"));
    }

    #[test]
    fn test_form_validation_is_idempotent() {
        let schema = ValidationSchema::new()
            .field("a", ValidationRule::required())
            .field("b", ValidationRule::none().min_length(3));
        let record = FormRecord::new().with("b", "x");

        let first = validate_form(&record, &schema);
        let second = validate_form(&record, &schema);
        assert_eq!(first, second);
        assert_eq!(first.len(), 2);
    }
}
