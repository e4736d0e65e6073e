//! Request and response types of the form API

pub mod error;
pub mod forms;
pub mod json;

pub use error::{ApiError, ApiErrorResponse, ApiErrorType};
pub use forms::{FieldChangeRequest, FormResponse, ModelsResponse};
pub use json::Json;
