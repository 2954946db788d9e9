use serde::{Deserialize, Serialize};

use super::aggregate::{Priority, Project, ProjectId, ProjectStatus};
use crate::domain::common::SelectOption;
use crate::shared::validation::{
    parse_amount, parse_date, FormModel, SubmitError, ValidationSchema, PROJECT_SCHEMA,
};

/// Raw input of the "new project" dialog
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectForm {
    pub name: String,
    pub description: String,
    pub priority: String,
    pub budget: String,
    /// `YYYY-MM-DD` as produced by a date input
    pub due_date: String,
}

impl FormModel for ProjectForm {
    type Output = Project;

    fn schema() -> &'static ValidationSchema {
        &PROJECT_SCHEMA
    }

    fn field_names() -> &'static [&'static str] {
        &["name", "description", "priority", "budget", "due_date"]
    }

    fn field(&self, field: &str) -> String {
        match field {
            "name" => self.name.clone(),
            "description" => self.description.clone(),
            "priority" => self.priority.clone(),
            "budget" => self.budget.clone(),
            "due_date" => self.due_date.clone(),
            _ => String::new(),
        }
    }

    fn set_field(&mut self, field: &str, value: String) {
        match field {
            "name" => self.name = value,
            "description" => self.description = value,
            "priority" => self.priority = value,
            "budget" => self.budget = value,
            "due_date" => self.due_date = value,
            _ => {}
        }
    }

    /// New projects start in planning with nothing spent and no team
    fn build(&self) -> Result<Project, SubmitError> {
        let priority = Priority::parse(&self.priority).ok_or_else(|| SubmitError::UnknownOption {
            field: "priority",
            value: self.priority.clone(),
        })?;
        let due_date = parse_date(&self.due_date).ok_or_else(|| SubmitError::InvalidDate {
            field: "due_date",
            value: self.due_date.clone(),
        })?;

        Ok(Project {
            id: ProjectId::new_v4(),
            name: self.name.trim().to_string(),
            description: self.description.trim().to_string(),
            status: ProjectStatus::Planning,
            priority,
            progress: 0,
            due_date,
            spend: 0.0,
            budget: parse_amount("budget", &self.budget)?,
            team_members: Vec::new(),
            members_count: 0,
        })
    }
}
