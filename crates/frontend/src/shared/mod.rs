pub mod components;
pub mod config;
pub mod form_binding;
pub mod form_state;
pub mod format;
pub mod icons;
pub mod modal;
pub mod submit;
