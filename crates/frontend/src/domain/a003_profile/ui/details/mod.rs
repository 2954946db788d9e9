//! Profile settings form
//!
//! MVVM split:
//! - view_model.rs: saved profile, form state, save/cancel commands
//! - view.rs: Leptos component (pure UI)

mod view;
mod view_model;

pub use view::ProfileDetails;
pub use view_model::ProfileDetailsViewModel;
