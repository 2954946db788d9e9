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
pub struct ProjectId(pub Uuid);

impl ProjectId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }
}

impl AggregateId for ProjectId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(ProjectId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Options
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProjectStatus {
    Planning,
    InProgress,
    OnHold,
    Completed,
}

impl SelectOption for ProjectStatus {
    fn all() -> &'static [Self] {
        &[Self::Planning, Self::InProgress, Self::OnHold, Self::Completed]
    }

    fn as_str(&self) -> &'static str {
        match self {
            Self::Planning => "Planning",
            Self::InProgress => "In Progress",
            Self::OnHold => "On Hold",
            Self::Completed => "Completed",
        }
    }
}

/// Ordered from most to least urgent
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl SelectOption for Priority {
    fn all() -> &'static [Self] {
        &[Self::High, Self::Medium, Self::Low]
    }

    fn as_str(&self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }
}

// ============================================================================
// Aggregate
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMember {
    pub name: String,
    pub avatar: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: ProjectId,
    pub name: String,
    pub description: String,
    pub status: ProjectStatus,
    pub priority: Priority,
    /// Percent complete, 0..=100
    pub progress: u8,
    pub due_date: NaiveDate,
    pub spend: f64,
    pub budget: f64,
    pub team_members: Vec<TeamMember>,
    pub members_count: usize,
}

impl Project {
    /// Share of the budget already spent, 0.0 when there is no budget
    pub fn budget_used(&self) -> f64 {
        if self.budget > 0.0 {
            self.spend / self.budget
        } else {
            0.0
        }
    }

    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        self.status != ProjectStatus::Completed && self.due_date < today
    }
}

impl Searchable for Project {
    fn matches_search(&self, needle: &str) -> bool {
        contains_ignore_case(&self.name, needle)
            || contains_ignore_case(&self.description, needle)
            || contains_ignore_case(self.status.as_str(), needle)
    }
}

impl Filterable for Project {
    fn filter_value(&self, key: &str) -> Option<String> {
        match key {
            "status" => Some(self.status.as_str().to_string()),
            "priority" => Some(self.priority.as_str().to_string()),
            _ => None,
        }
    }
}

impl Sortable for Project {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "name" => self.name.to_lowercase().cmp(&other.name.to_lowercase()),
            "priority" => self.priority.cmp(&other.priority),
            "progress" => self.progress.cmp(&other.progress),
            "due_date" => self.due_date.cmp(&other.due_date),
            "budget" => self.budget.total_cmp(&other.budget),
            _ => Ordering::Equal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a002_project::samples::sample_projects;
    use crate::shared::list_query::{apply_filters, ListCriteria, SortDirection};

    #[test]
    fn test_search_covers_status() {
        let criteria = ListCriteria::new().with_search("on hold");
        let visible = apply_filters(&sample_projects(), &criteria);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].status, ProjectStatus::OnHold);
    }

    #[test]
    fn test_priority_sort_puts_high_first() {
        let criteria = ListCriteria::new().with_sort("priority", SortDirection::Asc);
        let visible = apply_filters(&sample_projects(), &criteria);
        assert_eq!(visible.first().map(|p| p.priority), Some(Priority::High));
        assert_eq!(visible.last().map(|p| p.priority), Some(Priority::Low));
    }

    #[test]
    fn test_budget_used_and_overdue() {
        let project = &sample_projects()[0];
        assert!((project.budget_used() - 0.75).abs() < 1e-9);

        let day_after = project.due_date.succ_opt().unwrap();
        assert!(project.is_overdue(day_after));
        assert!(!project.is_overdue(project.due_date));
    }
}
