//! Project form state exposed to the view layer

pub mod state;

pub use state::{FormField, FormState, FormStatus};
