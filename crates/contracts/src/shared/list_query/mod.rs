//! Search, filter and sort over in-memory record lists
//!
//! Pages describe their filter widgets with [`FilterGroup`] and
//! [`SortOption`], keep the user's choices in a [`ListCriteria`], and compute
//! the visible rows with [`apply_filters`].

mod apply;
mod criteria;
mod descriptor;

pub use apply::{apply_filters, contains_ignore_case, Filterable, Searchable, Sortable};
pub use criteria::{ListCriteria, SortRule};
pub use descriptor::{FilterGroup, FilterOption, SortDirection, SortOption};
