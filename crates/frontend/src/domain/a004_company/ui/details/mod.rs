mod view;
mod view_model;

pub use view::CompanyDetails;
pub use view_model::CompanyDetailsViewModel;
