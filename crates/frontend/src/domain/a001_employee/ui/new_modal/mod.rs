//! New Employee dialog
//!
//! MVVM split:
//! - view_model.rs: form state, submit command
//! - view.rs: Leptos component (pure UI)

mod view;
mod view_model;

pub use view::NewEmployeeModal;
pub use view_model::NewEmployeeViewModel;
