pub mod a001_employee;
pub mod a002_project;
pub mod a003_profile;
pub mod a004_company;
pub mod common;
