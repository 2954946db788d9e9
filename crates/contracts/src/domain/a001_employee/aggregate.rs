use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use uuid::Uuid;

use crate::domain::common::{AggregateId, SelectOption};
use crate::shared::list_query::{contains_ignore_case, Filterable, Searchable, Sortable};

// ============================================================================
// ID Type
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EmployeeId(pub Uuid);

impl EmployeeId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl AggregateId for EmployeeId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(EmployeeId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Options
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum EmployeeStatus {
    Active,
    OnLeave,
    Inactive,
}

impl SelectOption for EmployeeStatus {
    fn all() -> &'static [Self] {
        &[Self::Active, Self::OnLeave, Self::Inactive]
    }

    fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::OnLeave => "On Leave",
            Self::Inactive => "Inactive",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Department {
    Engineering,
    Design,
    Product,
    Marketing,
    Sales,
    HumanResources,
    Finance,
    Analytics,
}

impl SelectOption for Department {
    fn all() -> &'static [Self] {
        &[
            Self::Engineering,
            Self::Design,
            Self::Product,
            Self::Marketing,
            Self::Sales,
            Self::HumanResources,
            Self::Finance,
            Self::Analytics,
        ]
    }

    fn as_str(&self) -> &'static str {
        match self {
            Self::Engineering => "Engineering",
            Self::Design => "Design",
            Self::Product => "Product",
            Self::Marketing => "Marketing",
            Self::Sales => "Sales",
            Self::HumanResources => "HR",
            Self::Finance => "Finance",
            Self::Analytics => "Analytics",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Self::HumanResources => "Human Resources",
            other => other.as_str(),
        }
    }
}

// ============================================================================
// Aggregate
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: EmployeeId,
    pub name: String,
    pub avatar: Option<String>,
    pub email: String,
    pub phone: String,
    pub role: String,
    pub department: Department,
    pub status: EmployeeStatus,
    pub join_date: NaiveDate,
    pub salary: f64,
}

impl Employee {
    pub fn is_active(&self) -> bool {
        self.status == EmployeeStatus::Active
    }
}

impl Searchable for Employee {
    fn matches_search(&self, needle: &str) -> bool {
        contains_ignore_case(&self.name, needle)
            || contains_ignore_case(&self.email, needle)
            || contains_ignore_case(&self.role, needle)
            || contains_ignore_case(self.department.label(), needle)
    }
}

impl Filterable for Employee {
    fn filter_value(&self, key: &str) -> Option<String> {
        match key {
            "department" => Some(self.department.as_str().to_string()),
            "status" => Some(self.status.as_str().to_string()),
            _ => None,
        }
    }
}

impl Sortable for Employee {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "name" => self.name.to_lowercase().cmp(&other.name.to_lowercase()),
            "role" => self.role.to_lowercase().cmp(&other.role.to_lowercase()),
            "department" => self.department.as_str().cmp(other.department.as_str()),
            "status" => self.status.as_str().cmp(other.status.as_str()),
            "join_date" => self.join_date.cmp(&other.join_date),
            "salary" => self.salary.total_cmp(&other.salary),
            _ => Ordering::Equal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_employee::samples::sample_employees;
    use crate::shared::list_query::{apply_filters, ListCriteria, SortDirection};

    #[test]
    fn test_select_option_round_trip() {
        assert_eq!(Department::parse("HR"), Some(Department::HumanResources));
        assert_eq!(Department::HumanResources.label(), "Human Resources");
        assert_eq!(EmployeeStatus::parse("On Leave"), Some(EmployeeStatus::OnLeave));
        assert_eq!(EmployeeStatus::parse("Retired"), None);
    }

    #[test]
    fn test_id_from_string() {
        let id = EmployeeId::new(Uuid::from_u128(7));
        assert_eq!(EmployeeId::from_string(&id.as_string()), Ok(id));
        assert!(EmployeeId::from_string("EMP001").is_err());
    }

    #[test]
    fn test_filter_by_department_and_status() {
        let criteria = ListCriteria::new()
            .toggle_value("department", "Engineering")
            .toggle_value("status", "Active");
        let visible = apply_filters(&sample_employees(), &criteria);

        assert!(!visible.is_empty());
        assert!(visible
            .iter()
            .all(|e| e.department == Department::Engineering && e.is_active()));
    }

    #[test]
    fn test_search_matches_department_label() {
        let criteria = ListCriteria::new().with_search("human");
        let visible = apply_filters(&sample_employees(), &criteria);
        assert!(visible
            .iter()
            .all(|e| e.department == Department::HumanResources));
        assert!(!visible.is_empty());
    }

    #[test]
    fn test_sort_by_salary_desc() {
        let criteria = ListCriteria::new().with_sort("salary", SortDirection::Desc);
        let visible = apply_filters(&sample_employees(), &criteria);
        assert!(visible.windows(2).all(|w| w[0].salary >= w[1].salary));
    }
}
