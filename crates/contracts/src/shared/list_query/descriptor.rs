use serde::{Deserialize, Serialize};

/// One selectable value inside a filter group
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOption {
    pub label: String,
    pub value: String,
    /// Number of records carrying this value, if the page computes it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
}

impl FilterOption {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            count: None,
        }
    }

    /// Option whose label and value are the same text
    pub fn same(value: impl Into<String>) -> Self {
        let value = value.into();
        Self::new(value.clone(), value)
    }

    pub fn with_count(mut self, count: usize) -> Self {
        self.count = Some(count);
        self
    }
}

/// Multi-select filter over one record attribute
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterGroup {
    pub label: String,
    /// Attribute key passed to `Filterable::filter_value`
    pub key: String,
    pub options: Vec<FilterOption>,
}

impl FilterGroup {
    pub fn new(label: impl Into<String>, key: impl Into<String>, options: Vec<FilterOption>) -> Self {
        Self {
            label: label.into(),
            key: key.into(),
            options,
        }
    }

    /// Fill in each option's `count` from the values present in `values`
    pub fn with_counts<'a>(mut self, values: impl IntoIterator<Item = &'a str>) -> Self {
        let values: Vec<&str> = values.into_iter().collect();
        for option in &mut self.options {
            option.count = Some(values.iter().filter(|v| **v == option.value).count());
        }
        self
    }
}

/// A field the list can be sorted by
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortOption {
    pub label: String,
    pub value: String,
}

impl SortOption {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }

    /// Arrow shown next to the active sort field
    pub fn indicator(&self) -> &'static str {
        match self {
            Self::Asc => "▲",
            Self::Desc => "▼",
        }
    }
}
