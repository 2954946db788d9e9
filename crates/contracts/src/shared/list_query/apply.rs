use std::cmp::Ordering;

use super::criteria::ListCriteria;
use super::descriptor::SortDirection;

/// Records that can be matched by free-text search
pub trait Searchable {
    /// `needle` is already trimmed and lowercased
    fn matches_search(&self, needle: &str) -> bool;
}

/// Records exposing attributes for multi-select filter groups
pub trait Filterable {
    /// Value of the attribute behind filter group `key`
    fn filter_value(&self, key: &str) -> Option<String>;
}

/// Records that can be ordered by a named field
pub trait Sortable {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering;
}

/// Case-insensitive substring test used by `Searchable` implementations
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

/// Visible subset of `records` under `criteria`.
///
/// Search matches any record when blank. Within a filter group any selected
/// value matches; all groups with a selection must match. Sorting is stable,
/// so records equal on the sort field keep their original order.
pub fn apply_filters<T>(records: &[T], criteria: &ListCriteria) -> Vec<T>
where
    T: Searchable + Filterable + Sortable + Clone,
{
    let needle = criteria.search.trim().to_lowercase();

    let mut visible: Vec<T> = records
        .iter()
        .filter(|record| needle.is_empty() || record.matches_search(&needle))
        .filter(|record| {
            criteria.selections.iter().all(|(key, selected)| {
                selected.is_empty()
                    || record
                        .filter_value(key)
                        .is_some_and(|value| selected.contains(&value))
            })
        })
        .cloned()
        .collect();

    if let Some(rule) = &criteria.sort {
        visible.sort_by(|a, b| {
            let cmp = a.compare_by_field(b, &rule.field);
            match rule.direction {
                SortDirection::Asc => cmp,
                SortDirection::Desc => cmp.reverse(),
            }
        });
    }

    visible
}
