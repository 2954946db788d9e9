use chrono::Local;
use serde::{Deserialize, Serialize};

use super::aggregate::{Department, Employee, EmployeeId, EmployeeStatus};
use crate::domain::common::SelectOption;
use crate::shared::validation::{
    parse_amount, FormModel, SubmitError, ValidationSchema, EMPLOYEE_SCHEMA,
};

/// Raw input of the "new employee" dialog
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmployeeForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub role: String,
    pub department: String,
    pub salary: String,
}

impl FormModel for EmployeeForm {
    type Output = Employee;

    fn schema() -> &'static ValidationSchema {
        &EMPLOYEE_SCHEMA
    }

    fn field_names() -> &'static [&'static str] {
        &["name", "email", "phone", "role", "department", "salary"]
    }

    fn field(&self, field: &str) -> String {
        match field {
            "name" => self.name.clone(),
            "email" => self.email.clone(),
            "phone" => self.phone.clone(),
            "role" => self.role.clone(),
            "department" => self.department.clone(),
            "salary" => self.salary.clone(),
            _ => String::new(),
        }
    }

    fn set_field(&mut self, field: &str, value: String) {
        match field {
            "name" => self.name = value,
            "email" => self.email = value,
            "phone" => self.phone = value,
            "role" => self.role = value,
            "department" => self.department = value,
            "salary" => self.salary = value,
            _ => {}
        }
    }

    /// New hires start active, joined today
    fn build(&self) -> Result<Employee, SubmitError> {
        let department =
            Department::parse(&self.department).ok_or_else(|| SubmitError::UnknownOption {
                field: "department",
                value: self.department.clone(),
            })?;

        Ok(Employee {
            id: EmployeeId::new_v4(),
            name: self.name.trim().to_string(),
            avatar: None,
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            role: self.role.trim().to_string(),
            department,
            status: EmployeeStatus::Active,
            join_date: Local::now().date_naive(),
            salary: parse_amount("salary", &self.salary)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> EmployeeForm {
        EmployeeForm {
            name: "Jane Doe".into(),
            email: "jane@example.com".into(),
            phone: "555-123-4567".into(),
            role: "Developer".into(),
            department: "HR".into(),
            salary: "65000".into(),
        }
    }

    #[test]
    fn test_empty_form_reports_every_required_field() {
        let errors = EmployeeForm::default().validate();
        assert_eq!(errors.len(), EmployeeForm::field_names().len());
        assert!(errors.iter().all(|(_, m)| m == "This field is required"));
    }

    #[test]
    fn test_set_field_updates_record() {
        let mut form = EmployeeForm::default();
        form.set_field("salary", "19999".into());
        form.set_field("nickname", "JD".into());

        assert_eq!(form.field("salary"), "19999");
        assert_eq!(form.field("nickname"), "");
        assert_eq!(
            form.validate().get("salary"),
            Some("Salary must be at least $20,000")
        );
    }

    #[test]
    fn test_submit_builds_active_employee() {
        let employee = filled().submit().unwrap();
        assert_eq!(employee.name, "Jane Doe");
        assert_eq!(employee.department, Department::HumanResources);
        assert_eq!(employee.status, EmployeeStatus::Active);
        assert_eq!(employee.salary, 65_000.0);
        assert_eq!(employee.join_date, Local::now().date_naive());
    }

    #[test]
    fn test_submit_reads_hex_salary() {
        let mut form = filled();
        form.salary = " 0x4E20 ".into();
        assert_eq!(form.submit().map(|e| e.salary), Ok(20_000.0));
    }

    #[test]
    fn test_submit_rejects_invalid_form() {
        let mut form = filled();
        form.email = "nope".into();
        match form.submit() {
            Err(SubmitError::Invalid(errors)) => {
                assert_eq!(errors.fields().collect::<Vec<_>>(), ["email"]);
            }
            other => panic!("expected validation failure, got {:?}", other),
        }
    }

    #[test]
    fn test_submit_rejects_unknown_department() {
        let mut form = filled();
        form.department = "Legal".into();
        assert_eq!(
            form.submit(),
            Err(SubmitError::UnknownOption {
                field: "department",
                value: "Legal".into()
            })
        );
    }
}
