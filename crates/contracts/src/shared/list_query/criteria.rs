use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::descriptor::SortDirection;

/// Sort by one field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortRule {
    pub field: String,
    pub direction: SortDirection,
}

/// Search text, filter selections and sort currently applied to a list.
///
/// Value object: every change returns a new `ListCriteria`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListCriteria {
    #[serde(default)]
    pub search: String,
    /// Filter group key -> selected option values. Empty selections are not stored.
    #[serde(default)]
    pub selections: BTreeMap<String, Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort: Option<SortRule>,
}

impl ListCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    /// Replace the selection of one filter group
    pub fn with_selection(mut self, key: impl Into<String>, values: Vec<String>) -> Self {
        let key = key.into();
        if values.is_empty() {
            self.selections.remove(&key);
        } else {
            self.selections.insert(key, values);
        }
        self
    }

    /// Select `value` in group `key`, or deselect it if already selected
    pub fn toggle_value(self, key: &str, value: &str) -> Self {
        let mut values = self.selected(key).to_vec();
        if let Some(pos) = values.iter().position(|v| v == value) {
            values.remove(pos);
        } else {
            values.push(value.to_string());
        }
        self.with_selection(key, values)
    }

    pub fn with_sort(mut self, field: impl Into<String>, direction: SortDirection) -> Self {
        self.sort = Some(SortRule {
            field: field.into(),
            direction,
        });
        self
    }

    /// Header-click behaviour: the same field flips direction, another field
    /// starts ascending.
    pub fn toggle_sort(self, field: &str) -> Self {
        let direction = match &self.sort {
            Some(rule) if rule.field == field => rule.direction.toggled(),
            _ => SortDirection::Asc,
        };
        self.with_sort(field, direction)
    }

    pub fn without_sort(mut self) -> Self {
        self.sort = None;
        self
    }

    pub fn selected(&self, key: &str) -> &[String] {
        self.selections.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn is_selected(&self, key: &str, value: &str) -> bool {
        self.selected(key).iter().any(|v| v == value)
    }

    /// Total number of selected filter values across all groups
    pub fn active_filters_count(&self) -> usize {
        self.selections.values().map(Vec::len).sum()
    }

    pub fn has_search(&self) -> bool {
        !self.search.trim().is_empty()
    }

    /// Something `cleared` would undo: a filter selection or a sort
    pub fn has_refinements(&self) -> bool {
        self.active_filters_count() > 0 || self.sort.is_some()
    }

    /// Drop all filter selections and the sort. Search text is kept.
    pub fn cleared(self) -> Self {
        Self {
            search: self.search,
            ..Self::default()
        }
    }

    pub fn sort_field(&self) -> Option<&str> {
        self.sort.as_ref().map(|rule| rule.field.as_str())
    }

    pub fn sort_direction(&self) -> SortDirection {
        self.sort.as_ref().map(|rule| rule.direction).unwrap_or_default()
    }
}
