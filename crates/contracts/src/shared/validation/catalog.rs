//! Schemas of the dashboard's forms

use chrono::{Local, NaiveDate};
use once_cell::sync::Lazy;

use super::patterns::{self, EMAIL, LETTERS_AND_SPACES, PHONE, URL, ZIP_CODE};
use super::rule::{ValidationRule, ValidationSchema};
use super::value::FieldValue;

pub static EMPLOYEE_SCHEMA: Lazy<ValidationSchema> = Lazy::new(|| {
    ValidationSchema::new()
        .field("name", person_name_rule())
        .field("email", email_rule())
        .field("phone", ValidationRule::required().custom(phone_number))
        .field("role", ValidationRule::required().length(2, 100))
        .field("department", ValidationRule::required())
        .field("salary", ValidationRule::required().custom(salary_range))
});

pub static PROJECT_SCHEMA: Lazy<ValidationSchema> = Lazy::new(|| {
    ValidationSchema::new()
        .field(
            "name",
            ValidationRule::required().length(3, 100).custom(project_name),
        )
        .field(
            "description",
            ValidationRule::required()
                .length(10, 500)
                .custom(project_description),
        )
        .field("priority", ValidationRule::required())
        .field("budget", ValidationRule::required().custom(budget_range))
        .field("due_date", ValidationRule::required().custom(due_date))
});

pub static PROFILE_SCHEMA: Lazy<ValidationSchema> = Lazy::new(|| {
    ValidationSchema::new()
        .field("name", person_name_rule())
        .field("email", email_rule())
        .field("phone", ValidationRule::none().custom(phone_number))
        .field("bio", ValidationRule::none().max_length(500))
});

pub static COMPANY_SCHEMA: Lazy<ValidationSchema> = Lazy::new(|| {
    ValidationSchema::new()
        .field("name", ValidationRule::required().length(2, 100))
        .field("address", ValidationRule::none().max_length(200))
        .field("city", ValidationRule::none().max_length(50))
        .field("state", ValidationRule::none().max_length(50))
        .field("zip", ValidationRule::none().custom(zip_code))
        .field("website", ValidationRule::none().custom(website))
});

fn person_name_rule() -> ValidationRule {
    ValidationRule::required().length(2, 50).custom(person_name)
}

fn email_rule() -> ValidationRule {
    ValidationRule::required().pattern(&EMAIL).custom(email_address)
}

// ============================================================================
// Custom checks
// ============================================================================

fn person_name(value: &FieldValue) -> Option<String> {
    match value.as_text() {
        Some(s) if !LETTERS_AND_SPACES.is_match(s) => {
            Some("Name can only contain letters and spaces".into())
        }
        _ => None,
    }
}

fn email_address(value: &FieldValue) -> Option<String> {
    match value.as_text() {
        Some(s) if !EMAIL.is_match(s) => Some("Please enter a valid email address".into()),
        _ => None,
    }
}

fn phone_number(value: &FieldValue) -> Option<String> {
    match value.as_text() {
        Some(s) if !PHONE.is_match(&patterns::strip_phone_formatting(s)) => {
            Some("Please enter a valid phone number".into())
        }
        _ => None,
    }
}

/// Shared shape of the salary and budget checks
fn amount_in_range(
    value: &FieldValue,
    what: &str,
    min: f64,
    max: f64,
    min_label: &str,
    max_label: &str,
) -> Option<String> {
    let amount = match value.as_number() {
        Some(n) if n >= 0.0 => n,
        _ => return Some(format!("Please enter a valid {} amount", what)),
    };
    let capitalized = capitalize(what);
    if amount < min {
        return Some(format!("{} must be at least {}", capitalized, min_label));
    }
    if amount > max {
        return Some(format!("{} cannot exceed {}", capitalized, max_label));
    }
    None
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn salary_range(value: &FieldValue) -> Option<String> {
    amount_in_range(value, "salary", 20_000.0, 1_000_000.0, "$20,000", "$1,000,000")
}

fn budget_range(value: &FieldValue) -> Option<String> {
    amount_in_range(value, "budget", 100.0, 10_000_000.0, "$100", "$10,000,000")
}

fn trimmed_min(value: &FieldValue, min: usize, message: &str) -> Option<String> {
    match value.as_text() {
        Some(s) if s.trim().chars().count() < min => Some(message.to_string()),
        _ => None,
    }
}

fn project_name(value: &FieldValue) -> Option<String> {
    trimmed_min(value, 3, "Project name must be at least 3 characters")
}

fn project_description(value: &FieldValue) -> Option<String> {
    trimmed_min(value, 10, "Description must be at least 10 characters")
}

fn due_date(value: &FieldValue) -> Option<String> {
    due_date_on(value, Local::now().date_naive())
}

/// Due date check against an explicit "today"
pub fn due_date_on(value: &FieldValue, today: NaiveDate) -> Option<String> {
    if value.is_blank() {
        return Some("Due date is required".into());
    }
    match value.as_date() {
        Some(date) if date < today => Some("Due date cannot be in the past".into()),
        Some(_) => None,
        None => Some("Please enter a valid due date".into()),
    }
}

fn zip_code(value: &FieldValue) -> Option<String> {
    match value.as_text() {
        Some(s) if !ZIP_CODE.is_match(s) => Some("Please enter a valid ZIP code".into()),
        _ => None,
    }
}

fn website(value: &FieldValue) -> Option<String> {
    match value.as_text() {
        Some(s) if !URL.is_match(s) => Some("Please enter a valid website URL".into()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::validation::{validate_field, validate_form, FormRecord};
    use chrono::Duration;

    fn text(s: &str) -> FieldValue {
        FieldValue::from(s)
    }

    fn rule<'a>(schema: &'a ValidationSchema, field: &str) -> &'a ValidationRule {
        schema.get(field).expect("field declared in schema")
    }

    fn valid_employee() -> FormRecord {
        FormRecord::new()
            .with("name", "Jane Doe")
            .with("email", "jane@example.com")
            .with("phone", "+1 (555) 123-4567")
            .with("role", "Developer")
            .with("department", "Engineering")
            .with("salary", "75000")
    }

    #[test]
    fn test_employee_valid_record() {
        assert!(validate_form(&valid_employee(), &EMPLOYEE_SCHEMA).is_empty());
    }

    #[test]
    fn test_employee_email() {
        let invalid = valid_employee().with("email", "not-an-email");
        let errors = validate_form(&invalid, &EMPLOYEE_SCHEMA);
        assert!(errors
            .get("email")
            .is_some_and(|m| m.contains("valid email")));

        let valid = valid_employee().with("email", "a@b.com");
        assert!(!validate_form(&valid, &EMPLOYEE_SCHEMA).contains("email"));
    }

    #[test]
    fn test_employee_email_custom_message_replaces_pattern_error() {
        let email = rule(&EMPLOYEE_SCHEMA, "email");
        assert_eq!(
            validate_field(Some(&text("not-an-email")), email).as_deref(),
            Some("Please enter a valid email address")
        );
    }

    #[test]
    fn test_employee_salary_range() {
        let salary = rule(&EMPLOYEE_SCHEMA, "salary");
        assert_eq!(
            validate_field(Some(&text("19999")), salary).as_deref(),
            Some("Salary must be at least $20,000")
        );
        assert_eq!(validate_field(Some(&text("20000")), salary), None);
        assert_eq!(validate_field(Some(&text("1000000")), salary), None);
        assert_eq!(
            validate_field(Some(&text("1000001")), salary).as_deref(),
            Some("Salary cannot exceed $1,000,000")
        );
        assert_eq!(
            validate_field(Some(&text("lots")), salary).as_deref(),
            Some("Please enter a valid salary amount")
        );
        assert_eq!(
            validate_field(Some(&text("-5")), salary).as_deref(),
            Some("Please enter a valid salary amount")
        );
    }

    #[test]
    fn test_salary_reads_input_like_a_browser() {
        let salary = rule(&EMPLOYEE_SCHEMA, "salary");
        for overflow in ["Infinity", "1e309"] {
            assert_eq!(
                validate_field(Some(&text(overflow)), salary).as_deref(),
                Some("Salary cannot exceed $1,000,000"),
                "{}",
                overflow
            );
        }
        assert_eq!(validate_field(Some(&text("0x4E20")), salary), None);
        assert_eq!(
            validate_field(Some(&text("-Infinity")), salary).as_deref(),
            Some("Please enter a valid salary amount")
        );
    }

    #[test]
    fn test_employee_name_letters_only() {
        let name = rule(&EMPLOYEE_SCHEMA, "name");
        assert_eq!(
            validate_field(Some(&text("R2 D2")), name).as_deref(),
            Some("Name can only contain letters and spaces")
        );
        assert_eq!(validate_field(Some(&text("Mary Ann")), name), None);

        let role = rule(&EMPLOYEE_SCHEMA, "role");
        assert_eq!(
            validate_field(Some(&text("J")), role).as_deref(),
            Some("Must be at least 2 characters")
        );
    }

    #[test]
    fn test_employee_phone() {
        let phone = rule(&EMPLOYEE_SCHEMA, "phone");
        assert_eq!(validate_field(Some(&text("123-456-7890")), phone), None);
        assert_eq!(
            validate_field(Some(&text("call me")), phone).as_deref(),
            Some("Please enter a valid phone number")
        );
        assert_eq!(
            validate_field(None, phone).as_deref(),
            Some("This field is required")
        );
    }

    #[test]
    fn test_project_due_date() {
        let today = Local::now().date_naive();
        let yesterday = today - Duration::days(1);
        let due = rule(&PROJECT_SCHEMA, "due_date");

        assert_eq!(
            validate_field(Some(&FieldValue::Date(yesterday)), due).as_deref(),
            Some("Due date cannot be in the past")
        );
        assert_eq!(validate_field(Some(&FieldValue::Date(today)), due), None);
        assert_eq!(
            validate_field(Some(&text(&today.format("%Y-%m-%d").to_string())), due),
            None
        );
    }

    #[test]
    fn test_due_date_on_fixed_day() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        assert_eq!(
            due_date_on(&text("2024-03-14"), today).as_deref(),
            Some("Due date cannot be in the past")
        );
        assert_eq!(due_date_on(&text("2024-03-15"), today), None);
        assert_eq!(due_date_on(&text("2024-03-15T00:00:00Z"), today), None);
        assert_eq!(
            due_date_on(&text("next week"), today).as_deref(),
            Some("Please enter a valid due date")
        );
    }

    #[test]
    fn test_project_name_and_budget() {
        let name = rule(&PROJECT_SCHEMA, "name");
        assert_eq!(
            validate_field(Some(&text("  ab  ")), name).as_deref(),
            Some("Project name must be at least 3 characters")
        );
        assert_eq!(validate_field(Some(&text("CRM")), name), None);

        let budget = rule(&PROJECT_SCHEMA, "budget");
        assert_eq!(
            validate_field(Some(&text("99")), budget).as_deref(),
            Some("Budget must be at least $100")
        );
        assert_eq!(validate_field(Some(&FieldValue::Number(100.0)), budget), None);
        assert_eq!(
            validate_field(Some(&text("10000001")), budget).as_deref(),
            Some("Budget cannot exceed $10,000,000")
        );
    }

    #[test]
    fn test_profile_phone_is_optional() {
        let record = FormRecord::new()
            .with("name", "John Smith")
            .with("email", "john.smith@novacrm.com")
            .with("title", "CRM Administrator!!!")
            .with("phone", "");
        assert!(validate_form(&record, &PROFILE_SCHEMA).is_empty());

        let record = record.with("phone", "12ab");
        assert_eq!(
            validate_form(&record, &PROFILE_SCHEMA).get("phone"),
            Some("Please enter a valid phone number")
        );
    }

    #[test]
    fn test_profile_bio_limit() {
        let bio = rule(&PROFILE_SCHEMA, "bio");
        assert_eq!(validate_field(Some(&text(&"a".repeat(500))), bio), None);
        assert_eq!(
            validate_field(Some(&text(&"a".repeat(501))), bio).as_deref(),
            Some("Must be no more than 500 characters")
        );
    }

    #[test]
    fn test_company_schema() {
        let record = FormRecord::new()
            .with("name", "NovaCRM Inc.")
            .with("zip", "94105-123")
            .with("website", "novacrm.com")
            .with("country", "United States");
        let errors = validate_form(&record, &COMPANY_SCHEMA);

        assert_eq!(errors.len(), 2);
        assert_eq!(errors.get("zip"), Some("Please enter a valid ZIP code"));
        assert_eq!(errors.get("website"), Some("Please enter a valid website URL"));

        let fixed = record
            .with("zip", "94105-1234")
            .with("website", "https://novacrm.com");
        assert!(validate_form(&fixed, &COMPANY_SCHEMA).is_empty());
    }
}
