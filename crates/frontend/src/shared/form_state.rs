use contracts::shared::validation::{FormModel, SubmitError, ValidationErrors};
use std::collections::HashSet;

/// Edit state of one form: current input, its errors and which fields the
/// user has interacted with.
///
/// Errors are recomputed on every change, but only shown for touched fields.
#[derive(Clone, Debug)]
pub struct FormState<F: FormModel> {
    form: F,
    errors: ValidationErrors,
    touched: HashSet<&'static str>,
}

impl<F: FormModel> FormState<F> {
    pub fn new(form: F) -> Self {
        let errors = form.validate();
        Self {
            form,
            errors,
            touched: HashSet::new(),
        }
    }

    pub fn form(&self) -> &F {
        &self.form
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn value(&self, field: &str) -> String {
        self.form.field(field)
    }

    /// Store new input for `field`, mark it touched and revalidate
    pub fn set_field(&mut self, field: &str, value: String) {
        self.form.set_field(field, value);
        self.touch(field);
        self.errors = self.form.validate();
    }

    /// Mark a field as interacted with (e.g. on blur)
    pub fn touch(&mut self, field: &str) {
        if let Some(name) = F::field_names().iter().find(|name| **name == field) {
            self.touched.insert(*name);
        }
    }

    pub fn touch_all(&mut self) {
        self.touched.extend(F::field_names().iter().copied());
    }

    pub fn is_touched(&self, field: &str) -> bool {
        self.touched.contains(field)
    }

    /// Error to display next to `field`: only once the field was touched
    pub fn visible_error(&self, field: &str) -> Option<String> {
        if self.is_touched(field) {
            self.errors.get(field).map(str::to_string)
        } else {
            None
        }
    }

    /// No field fails validation
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Create-modal gate: something was entered and nothing fails
    pub fn is_submittable(&self) -> bool {
        self.is_valid() && !self.touched.is_empty()
    }

    /// Reveal all errors and try to build the record
    pub fn begin_submit(&mut self) -> Result<F::Output, SubmitError> {
        self.touch_all();
        let result = self.form.submit();
        self.errors = match &result {
            Err(SubmitError::Invalid(errors)) => errors.clone(),
            _ => ValidationErrors::new(),
        };
        result
    }

    pub fn reset(&mut self) {
        *self = Self::new(F::default());
    }
}

impl<F: FormModel> Default for FormState<F> {
    fn default() -> Self {
        Self::new(F::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_employee::form::EmployeeForm;
    use contracts::domain::a004_company::aggregate::Company;
    use contracts::domain::a004_company::form::CompanyForm;

    #[test]
    fn test_errors_hidden_until_touched() {
        let mut state = FormState::<EmployeeForm>::default();
        assert!(state.errors().contains("name"));
        assert_eq!(state.visible_error("name"), None);

        state.touch("name");
        assert_eq!(
            state.visible_error("name").as_deref(),
            Some("This field is required")
        );
        assert_eq!(state.visible_error("email"), None);
    }

    #[test]
    fn test_set_field_revalidates() {
        let mut state = FormState::<EmployeeForm>::default();
        state.set_field("salary", "19999".into());
        assert_eq!(
            state.visible_error("salary").as_deref(),
            Some("Salary must be at least $20,000")
        );

        state.set_field("salary", "20000".into());
        assert_eq!(state.visible_error("salary"), None);
        assert!(state.is_touched("salary"));
    }

    #[test]
    fn test_unknown_field_is_never_touched() {
        let mut state = FormState::<EmployeeForm>::default();
        state.touch("nickname");
        assert!(!state.is_touched("nickname"));
        assert!(!state.is_submittable());
    }

    #[test]
    fn test_prefilled_form_is_valid_before_any_edit() {
        let mut state = FormState::new(CompanyForm::from(&Company::demo()));
        assert!(state.is_valid());
        assert!(!state.is_submittable());

        state.set_field("zip", "9410".into());
        assert!(!state.is_valid());

        state.set_field("zip", "94107".into());
        assert!(state.is_valid());
    }

    #[test]
    fn test_submittable_needs_touch_and_no_errors() {
        let mut state = FormState::<EmployeeForm>::default();
        assert!(!state.is_valid());
        assert!(!state.is_submittable());

        for (field, value) in [
            ("name", "Jane Doe"),
            ("email", "jane@example.com"),
            ("phone", "555-123-4567"),
            ("role", "Developer"),
            ("department", "HR"),
            ("salary", "65000"),
        ] {
            state.set_field(field, value.into());
        }
        assert!(state.is_submittable());

        state.set_field("salary", "5".into());
        assert!(!state.is_submittable());
    }

    #[test]
    fn test_begin_submit_reveals_all_errors() {
        let mut state = FormState::<EmployeeForm>::default();
        assert!(state.begin_submit().is_err());
        for field in EmployeeForm::field_names() {
            assert!(state.visible_error(field).is_some(), "{} should show", field);
        }

        state.reset();
        assert!(!state.is_touched("name"));
        assert_eq!(state.visible_error("name"), None);
    }

    #[test]
    fn test_begin_submit_returns_record() {
        let mut state = FormState::new(CompanyForm::from(&Company::demo()));
        let company = state.begin_submit().unwrap();
        assert_eq!(company, Company::demo());
        assert!(state.is_valid());
    }

    #[test]
    fn test_begin_submit_keeps_the_submitted_errors() {
        let mut form = EmployeeForm::default();
        form.set_field("email", "nope".into());
        let mut state = FormState::new(form.clone());

        match state.begin_submit() {
            Err(SubmitError::Invalid(errors)) => assert_eq!(&errors, state.errors()),
            other => panic!("expected validation failure, got {:?}", other),
        }
        assert_eq!(state.errors(), &form.validate());
        assert_eq!(
            state.visible_error("email").as_deref(),
            Some("Please enter a valid email address")
        );
    }
}
