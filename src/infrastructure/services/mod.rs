//! Application services built on the prediction client

pub mod form_controller;
pub mod form_registry;

pub use form_controller::ProjectFormController;
pub use form_registry::FormRegistry;
