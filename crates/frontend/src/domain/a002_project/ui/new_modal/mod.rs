mod view;
mod view_model;

pub use view::NewProjectModal;
pub use view_model::NewProjectViewModel;
