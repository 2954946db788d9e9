pub mod data_table_filters;
pub mod form_field;
